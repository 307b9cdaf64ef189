#![no_main]

use libfuzzer_sys::fuzz_target;

use pidigit_core::digits::DigitRequest;
use pidigit_core::options::Options;

fuzz_target!(|data: &[u8]| {
    if data.len() < 16 {
        return;
    }
    let position = u64::from_le_bytes(data[0..8].try_into().unwrap());
    let guard = u64::from_le_bytes(data[8..16].try_into().unwrap());
    let opts = Options {
        guard_digits: guard,
        guard_terms: guard,
        ..Default::default()
    };

    // Any position either yields a consistent request or a structured error
    if let Ok(request) = DigitRequest::new(position, &opts) {
        assert!(position >= 1);
        assert!(request.digits() >= position);
        assert!(request.term_count() >= 2);
        assert_eq!(request.precision().bits(), request.digits().saturating_mul(4));
    }
});
