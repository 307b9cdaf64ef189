//! Binary splitting of the Chudnovsky series.
//!
//! For a half-open range of term indices `[a, b)` the engine produces the
//! exact triple `(P, Q, R)`:
//!
//!   P(a) = -(6a-1)(2a-1)(6a-5)
//!   Q(a) = C³/24 · a³
//!   R(a) = P(a) · (545140134a + 13591409)
//!
//! and combines adjacent ranges with
//!
//!   P = P₁P₂,  Q = Q₁Q₂,  R = Q₂R₁ + P₁R₂
//!
//! The combination is not symmetric: the left range must always be the
//! receiver of `SplitTriple::combine`.

use num_bigint::BigInt;

use crate::calculator::{PiError, Splitter};
use crate::constants::{CHUDNOVSKY_LINEAR_CONSTANT, CHUDNOVSKY_LINEAR_SLOPE, CHUDNOVSKY_Q_FACTOR};
use crate::options::Options;

/// A validated half-open range `[start, end)` of term indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermRange {
    start: i64,
    end: i64,
}

impl TermRange {
    /// Create a range, rejecting `end <= start` and `start < 1`.
    pub fn new(start: i64, end: i64) -> Result<Self, PiError> {
        if start < 1 || end <= start {
            return Err(PiError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// First term index.
    #[must_use]
    pub fn start(self) -> i64 {
        self.start
    }

    /// One past the last term index.
    #[must_use]
    pub fn end(self) -> i64 {
        self.end
    }

    /// Number of terms in the range.
    #[must_use]
    pub fn width(self) -> i64 {
        self.end - self.start
    }

    /// Halves at the midpoint. Both are non-empty only when `width() >= 2`.
    pub(crate) fn bisect(self) -> (Self, Self) {
        let m = midpoint(self.start, self.end);
        (
            Self {
                start: self.start,
                end: m,
            },
            Self {
                start: m,
                end: self.end,
            },
        )
    }
}

/// Midpoint used by every split, `(a + b) / 2` without overflow.
pub(crate) fn midpoint(a: i64, b: i64) -> i64 {
    a + (b - a) / 2
}

/// The `(P, Q, R)` accumulator for a term range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitTriple {
    p: BigInt,
    q: BigInt,
    r: BigInt,
}

impl SplitTriple {
    /// Closed-form triple for the single term `a`.
    #[must_use]
    pub fn term(a: i64) -> Self {
        let a = BigInt::from(a);

        let mut p: BigInt = (&a * 6 - 1) * (&a * 2 - 1) * (&a * 6 - 5);
        p = -p;

        let q = a.pow(3) * CHUDNOVSKY_Q_FACTOR;

        let r = &p * (&a * CHUDNOVSKY_LINEAR_SLOPE + CHUDNOVSKY_LINEAR_CONSTANT);

        Self { p, q, r }
    }

    /// Merge the triple of `[a, m)` (self) with the triple of `[m, b)`.
    #[must_use]
    pub fn combine(self, right: Self) -> Self {
        let r = &right.q * &self.r + &self.p * &right.r;
        Self {
            p: self.p * right.p,
            q: self.q * right.q,
            r,
        }
    }

    /// `P` accumulator.
    #[must_use]
    pub fn p(&self) -> &BigInt {
        &self.p
    }

    /// `Q` accumulator.
    #[must_use]
    pub fn q(&self) -> &BigInt {
        &self.q
    }

    /// `R` accumulator.
    #[must_use]
    pub fn r(&self) -> &BigInt {
        &self.r
    }

    /// Consume the triple, yielding `(P, Q, R)`.
    #[must_use]
    pub fn into_parts(self) -> (BigInt, BigInt, BigInt) {
        (self.p, self.q, self.r)
    }
}

/// Serially split `range` into its `(P, Q, R)` triple.
///
/// # Example
/// ```
/// use pidigit_core::split::{split, SplitTriple, TermRange};
///
/// let range = TermRange::new(1, 2).unwrap();
/// assert_eq!(split(range), SplitTriple::term(1));
/// ```
#[must_use]
pub fn split(range: TermRange) -> SplitTriple {
    split_range(range.start, range.end)
}

/// Recursive engine over an already validated range.
fn split_range(a: i64, b: i64) -> SplitTriple {
    if b - a == 1 {
        return SplitTriple::term(a);
    }
    let m = midpoint(a, b);
    let left = split_range(a, m);
    let right = split_range(m, b);
    left.combine(right)
}

/// Single-threaded splitting strategy; also the fallback path.
pub struct SerialSplitter;

impl SerialSplitter {
    /// Create a new `SerialSplitter`.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for SerialSplitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Splitter for SerialSplitter {
    fn split(&self, range: TermRange, _opts: &Options) -> Result<SplitTriple, PiError> {
        Ok(split(range))
    }

    fn name(&self) -> &'static str {
        "Serial"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(a: i64, b: i64) -> TermRange {
        TermRange::new(a, b).unwrap()
    }

    fn closed_form(a: i64) -> (BigInt, BigInt, BigInt) {
        let a = BigInt::from(a);
        let six = BigInt::from(6);
        let two = BigInt::from(2);
        let one = BigInt::from(1);
        let five = BigInt::from(5);
        let p = -((&six * &a - &one) * (&two * &a - &one) * (&six * &a - &five));
        let q = BigInt::from(CHUDNOVSKY_Q_FACTOR) * &a * &a * &a;
        let r = &p * (BigInt::from(CHUDNOVSKY_LINEAR_SLOPE) * &a
            + BigInt::from(CHUDNOVSKY_LINEAR_CONSTANT));
        (p, q, r)
    }

    #[test]
    fn term_one() {
        let t = SplitTriple::term(1);
        assert_eq!(t.p(), &BigInt::from(-5));
        assert_eq!(t.q(), &BigInt::from(CHUDNOVSKY_Q_FACTOR));
        assert_eq!(t.r(), &BigInt::from(-2_793_657_715i64));
    }

    #[test]
    fn terms_match_closed_form() {
        for a in [1, 2, 3, 17, 1000, 123_456_789] {
            let (p, q, r) = closed_form(a);
            assert_eq!(SplitTriple::term(a).into_parts(), (p, q, r), "term {a}");
        }
    }

    #[test]
    fn terms_two_and_three() {
        let t2 = SplitTriple::term(2);
        assert_eq!(t2.p(), &BigInt::from(-231));
        assert_eq!(t2.r(), &BigInt::from(-254_994_357_387i64));

        let t3 = SplitTriple::term(3);
        assert_eq!(t3.p(), &BigInt::from(-1105));
        assert_eq!(t3.q(), &(BigInt::from(CHUDNOVSKY_Q_FACTOR) * 27));
        assert_eq!(t3.r(), &BigInt::from(-1_822_158_051_155i64));
    }

    #[test]
    fn large_index_does_not_overflow() {
        let a = i64::MAX / 2;
        let (p, q, r) = closed_form(a);
        assert_eq!(SplitTriple::term(a).into_parts(), (p, q, r));
    }

    #[test]
    fn single_term_range_is_base_case() {
        assert_eq!(split(range(7, 8)), SplitTriple::term(7));
    }

    #[test]
    fn two_terms_combine_left_to_right() {
        let expected = SplitTriple::term(1).combine(SplitTriple::term(2));
        assert_eq!(split(range(1, 3)), expected);

        let (p1, q1, r1) = SplitTriple::term(1).into_parts();
        let (p2, q2, r2) = SplitTriple::term(2).into_parts();
        assert_eq!(expected.p(), &(&p1 * &p2));
        assert_eq!(expected.q(), &(&q1 * &q2));
        assert_eq!(expected.r(), &(&q2 * &r1 + &p1 * &r2));
    }

    #[test]
    fn combine_is_not_symmetric() {
        let forward = SplitTriple::term(1).combine(SplitTriple::term(2));
        let swapped = SplitTriple::term(2).combine(SplitTriple::term(1));
        assert_eq!(forward.p(), swapped.p());
        assert_eq!(forward.q(), swapped.q());
        assert_ne!(forward.r(), swapped.r());
    }

    #[test]
    fn combination_is_associative() {
        let direct = split(range(1, 10));
        let at_five = split(range(1, 5)).combine(split(range(5, 10)));
        let at_three = split(range(1, 3)).combine(split(range(3, 10)));
        assert_eq!(direct, at_five);
        assert_eq!(direct, at_three);
    }

    #[test]
    fn fold_of_terms_matches_split() {
        let folded = (2..40).fold(SplitTriple::term(1), |acc, a| acc.combine(SplitTriple::term(a)));
        assert_eq!(split(range(1, 40)), folded);
    }

    #[test]
    fn invalid_ranges_rejected() {
        assert_eq!(
            TermRange::new(5, 5),
            Err(PiError::InvalidRange { start: 5, end: 5 })
        );
        assert!(TermRange::new(6, 5).is_err());
        assert!(TermRange::new(0, 5).is_err());
        assert!(TermRange::new(-3, 5).is_err());
    }

    #[test]
    fn range_accessors() {
        let r = range(3, 11);
        assert_eq!(r.start(), 3);
        assert_eq!(r.end(), 11);
        assert_eq!(r.width(), 8);
    }

    #[test]
    fn midpoint_matches_integer_division() {
        assert_eq!(midpoint(1, 10), 5);
        assert_eq!(midpoint(1, 3), 2);
        assert_eq!(midpoint(4, 5), 4);
        assert_eq!(midpoint(i64::MAX - 2, i64::MAX), i64::MAX - 1);
    }

    #[test]
    fn serial_splitter_matches_split() {
        let splitter = SerialSplitter::new();
        let opts = Options::default();
        assert_eq!(splitter.split(range(1, 50), &opts).unwrap(), split(range(1, 50)));
        assert_eq!(splitter.name(), "Serial");
    }
}
