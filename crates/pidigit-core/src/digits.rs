//! Digit requests and extraction of a single decimal digit.
//!
//! Positions are 1-based after the decimal point: position 1 is the `1` in
//! `3.14159…`. The digit at position `d` is `trunc(π · 10^d) mod 10`.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::ToPrimitive;
use tracing::warn;

use crate::assembler::PiApprox;
use crate::calculator::PiError;
use crate::constants::{
    ASSEMBLY_ERROR_ULPS, CONTEXT_POSITION_LIMIT, DIGITS_PER_TERM, MIN_TERM_COUNT,
};
use crate::fixed::Precision;
use crate::options::Options;
use crate::split::TermRange;

/// A digit position together with the parameters derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitRequest {
    position: u64,
    term_count: i64,
    digits: u64,
    precision: Precision,
    context_window: u64,
}

impl DigitRequest {
    /// Derive term count and precision for `position`.
    ///
    /// # Example
    /// ```
    /// use pidigit_core::digits::DigitRequest;
    /// use pidigit_core::options::Options;
    ///
    /// let request = DigitRequest::new(1000, &Options::default()).unwrap();
    /// assert_eq!(request.term_count(), 171);
    /// assert_eq!(request.digits(), 1100);
    /// assert_eq!(request.precision().bits(), 4400);
    /// ```
    pub fn new(position: u64, opts: &Options) -> Result<Self, PiError> {
        if position == 0 {
            return Err(PiError::InvalidInput(
                "digit position must be at least 1".into(),
            ));
        }
        if u32::try_from(position).is_err() {
            return Err(PiError::InvalidInput(format!(
                "digit position {position} is too large"
            )));
        }

        let terms = (position / DIGITS_PER_TERM)
            .saturating_add(opts.guard_terms)
            .max(MIN_TERM_COUNT);
        let term_count = i64::try_from(terms)
            .map_err(|_| PiError::InvalidInput(format!("term count {terms} is too large")))?;
        let digits = position.saturating_add(opts.guard_digits);

        Ok(Self {
            position,
            term_count,
            digits,
            precision: Precision::for_digits(digits),
            context_window: opts.context_window,
        })
    }

    /// 1-based digit position after the decimal point.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Upper bound `n` of the summed term range `[1, n)`.
    #[must_use]
    pub fn term_count(&self) -> i64 {
        self.term_count
    }

    /// Decimal digits of working precision.
    #[must_use]
    pub fn digits(&self) -> u64 {
        self.digits
    }

    /// Working precision in bits.
    #[must_use]
    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// Digits of context to render on each side.
    #[must_use]
    pub fn context_window(&self) -> u64 {
        self.context_window
    }

    /// The term range `[1, term_count)` to split.
    pub fn terms(&self) -> Result<TermRange, PiError> {
        TermRange::new(1, self.term_count)
    }
}

/// Decimal digits surrounding the requested one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitContext {
    /// Position of the first digit in `digits`.
    pub start: u64,
    /// Consecutive decimal digits starting at `start`.
    pub digits: String,
    /// Index of the requested digit within `digits`.
    pub focus: usize,
}

impl DigitContext {
    /// Digits before the requested one.
    #[must_use]
    pub fn before(&self) -> &str {
        &self.digits[..self.focus]
    }

    /// Digits after the requested one.
    #[must_use]
    pub fn after(&self) -> &str {
        &self.digits[self.focus + 1..]
    }

    /// Whether the window begins right after the decimal point.
    #[must_use]
    pub fn at_start(&self) -> bool {
        self.start == 1
    }
}

/// The extracted digit and its surroundings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitReport {
    /// 1-based position after the decimal point.
    pub position: u64,
    /// The digit, `0..=9`.
    pub digit: u8,
    /// Surrounding digits, when the position is small enough to render.
    pub context: Option<DigitContext>,
    /// False when the approximation error could reach the digit.
    pub certain: bool,
}

impl DigitReport {
    /// The digit as an ASCII character.
    #[must_use]
    pub fn digit_char(&self) -> char {
        char::from(b'0' + self.digit)
    }
}

/// Extract the digit at `position` from `pi`.
///
/// A context window of `window` digits on each side is rendered when
/// `position` does not exceed the context limit.
pub fn extract_digit(pi: &PiApprox, position: u64, window: u64) -> Result<DigitReport, PiError> {
    if position == 0 {
        return Err(PiError::InvalidInput(
            "digit position must be at least 1".into(),
        ));
    }

    let shifter = pow10(position)?;
    let shifted = pi.value().mul_integer(&shifter);
    let digit = shifted
        .trunc()
        .mod_floor(&BigInt::from(10u8))
        .to_u8()
        .ok_or_else(|| PiError::Calculation("digit out of range".into()))?;

    // The assembled value is within ASSEMBLY_ERROR_ULPS of π, so after the
    // shift the error is at most that many ulps times the shifter.
    let margin = &shifter * ASSEMBLY_ERROR_ULPS;
    let fraction = shifted.fract();
    let certain = fraction >= margin && &fraction + &margin < shifted.unit();
    if !certain {
        warn!(
            position,
            bits = pi.precision().bits(),
            "guard precision cannot certify digit"
        );
    }

    let context = if position <= CONTEXT_POSITION_LIMIT {
        Some(render_context(pi, position, window)?)
    } else {
        None
    };

    Ok(DigitReport {
        position,
        digit,
        context,
        certain,
    })
}

fn pow10(exponent: u64) -> Result<BigInt, PiError> {
    let exponent = u32::try_from(exponent)
        .map_err(|_| PiError::InvalidInput(format!("position {exponent} is too large")))?;
    Ok(BigInt::from(10u8).pow(exponent))
}

fn render_context(pi: &PiApprox, position: u64, window: u64) -> Result<DigitContext, PiError> {
    let start = position.saturating_sub(window).max(1);
    let end = position + window;

    // "3" followed by `end` fractional digits; index i holds position i.
    let expansion = pi.value().mul_integer(&pow10(end)?).trunc().to_string();
    let lo = usize::try_from(start).map_err(|e| PiError::Calculation(e.to_string()))?;
    let hi = usize::try_from(end).map_err(|e| PiError::Calculation(e.to_string()))?;
    let digits = expansion
        .get(lo..=hi)
        .ok_or_else(|| PiError::Calculation("expansion shorter than window".into()))?
        .to_string();
    let focus = usize::try_from(position - start).map_err(|e| PiError::Calculation(e.to_string()))?;

    Ok(DigitContext {
        start,
        digits,
        focus,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembler::assemble;
    use crate::fixed::FixedPoint;
    use crate::split::split;

    const PI_100: &str = "1415926535897932384626433832795028841971\
                          6939937510582097494459230781640628620899\
                          86280348253421170679";

    fn pi_for(position: u64) -> PiApprox {
        let request = DigitRequest::new(position, &Options::default()).unwrap();
        let (_, q, r) = split(request.terms().unwrap()).into_parts();
        assemble(&q, &r, request.precision()).unwrap()
    }

    #[test]
    fn request_derivation() {
        let opts = Options::default();
        let request = DigitRequest::new(1000, &opts).unwrap();
        assert_eq!(request.position(), 1000);
        assert_eq!(request.term_count(), 171);
        assert_eq!(request.digits(), 1100);
        assert_eq!(request.precision().bits(), 4400);
        assert_eq!(request.context_window(), 5);
        assert_eq!(request.terms().unwrap(), TermRange::new(1, 171).unwrap());
    }

    #[test]
    fn request_uses_guard_options() {
        let opts = Options {
            guard_digits: 20,
            guard_terms: 3,
            ..Default::default()
        };
        let request = DigitRequest::new(28, &opts).unwrap();
        assert_eq!(request.term_count(), 5);
        assert_eq!(request.digits(), 48);
    }

    #[test]
    fn request_keeps_one_series_term() {
        let opts = Options {
            guard_terms: 1,
            ..Default::default()
        };
        for position in 1..14 {
            let request = DigitRequest::new(position, &opts).unwrap();
            assert_eq!(request.term_count(), 2);
            assert_eq!(request.terms().unwrap(), TermRange::new(1, 2).unwrap());
        }

        let request = DigitRequest::new(5, &opts).unwrap();
        let (_, q, r) = split(request.terms().unwrap()).into_parts();
        let pi = assemble(&q, &r, request.precision()).unwrap();
        assert_eq!(extract_digit(&pi, 5, 0).unwrap().digit, 9);
    }

    #[test]
    fn request_rejects_zero() {
        assert!(matches!(
            DigitRequest::new(0, &Options::default()),
            Err(PiError::InvalidInput(_))
        ));
    }

    #[test]
    fn request_rejects_huge_position() {
        assert!(matches!(
            DigitRequest::new(u64::MAX, &Options::default()),
            Err(PiError::InvalidInput(_))
        ));
    }

    #[test]
    fn known_digit_vectors() {
        let pi = pi_for(100);
        for (position, expected) in [(1, 1), (5, 9), (6, 2)] {
            let report = extract_digit(&pi, position, 5).unwrap();
            assert_eq!(report.digit, expected, "digit {position}");
            assert!(report.certain);
        }
    }

    #[test]
    fn first_hundred_digits() {
        let pi = pi_for(100);
        for (i, expected) in PI_100.bytes().enumerate() {
            let position = i as u64 + 1;
            let report = extract_digit(&pi, position, 0).unwrap();
            assert_eq!(report.digit, expected - b'0', "digit {position}");
        }
    }

    #[test]
    fn context_clipped_at_start() {
        let report = extract_digit(&pi_for(10), 2, 5).unwrap();
        assert_eq!(report.digit_char(), '4');
        let context = report.context.unwrap();
        assert_eq!(context.start, 1);
        assert!(context.at_start());
        assert_eq!(context.digits, "1415926");
        assert_eq!(context.before(), "1");
        assert_eq!(context.after(), "15926");
    }

    #[test]
    fn context_centered() {
        let report = extract_digit(&pi_for(30), 20, 5).unwrap();
        let context = report.context.unwrap();
        assert_eq!(context.start, 15);
        assert!(!context.at_start());
        assert_eq!(context.digits, &PI_100[14..25]);
        assert_eq!(context.focus, 5);
        assert_eq!(context.before(), &PI_100[14..19]);
        assert_eq!(context.after(), &PI_100[20..25]);
    }

    #[test]
    fn context_omitted_beyond_limit() {
        let pi = PiApprox::new(FixedPoint::from_mantissa(
            BigInt::from(3) << 64u64,
            Precision::from_bits(64),
        ));
        let report = extract_digit(&pi, CONTEXT_POSITION_LIMIT + 1, 5).unwrap();
        assert!(report.context.is_none());
    }

    #[test]
    fn uncertain_digit_is_flagged() {
        // Exactly 3.0: every shifted fraction sits on an integer boundary.
        let pi = PiApprox::new(FixedPoint::from_mantissa(
            BigInt::from(3) << 64u64,
            Precision::from_bits(64),
        ));
        let report = extract_digit(&pi, 1, 0).unwrap();
        assert_eq!(report.digit, 0);
        assert!(!report.certain);
    }

    #[test]
    fn insufficient_precision_is_flagged() {
        let pi = pi_for(10);
        // Far beyond the 110-digit budget.
        let report = extract_digit(&pi, 200, 0).unwrap();
        assert!(!report.certain);
    }

    #[test]
    fn extract_rejects_zero() {
        assert!(matches!(
            extract_digit(&pi_for(10), 0, 5),
            Err(PiError::InvalidInput(_))
        ));
    }

    #[test]
    fn extraction_is_deterministic() {
        let first = extract_digit(&pi_for(500), 500, 5).unwrap();
        for _ in 0..3 {
            assert_eq!(extract_digit(&pi_for(500), 500, 5).unwrap(), first);
        }
    }
}
