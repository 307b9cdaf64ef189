#![no_main]

use libfuzzer_sys::fuzz_target;

use pidigit_core::options::Options;
use pidigit_core::parallel::parallel_split;
use pidigit_core::split::{split, TermRange};

fuzz_target!(|data: &[u8]| {
    if data.len() < 5 {
        return;
    }
    // Range [a, b) with a >= 1, width capped at 600 terms for speed
    let a = i64::from(u16::from_le_bytes([data[0], data[1]])) + 1;
    let width = i64::from(u16::from_le_bytes([data[2], data[3]]) % 600) + 1;
    let opts = Options {
        parallel_min_width: i64::from(data[4] % 64) + 2,
        parallel_max_depth: u32::from(data[4] >> 5),
        ..Default::default()
    };

    let Ok(range) = TermRange::new(a, a + width) else {
        return;
    };
    let serial = split(range);
    let parallel = parallel_split(range, 0, &opts);
    assert_eq!(serial, parallel, "split mismatch on [{a}, {})", a + width);
});
