//! Series constants, derived-parameter defaults and exit codes.

/// `C³ / 24` with `C = 640320`: the per-term factor of `Q(a) = C³/24 · a³`.
pub const CHUDNOVSKY_Q_FACTOR: u64 = 10_939_058_860_032_000;

/// Constant term of the linear factor `545140134·a + 13591409`.
pub const CHUDNOVSKY_LINEAR_CONSTANT: u64 = 13_591_409;

/// Slope of the linear factor `545140134·a + 13591409`.
pub const CHUDNOVSKY_LINEAR_SLOPE: u64 = 545_140_134;

/// Radicand of the square root in `426880 · √10005`.
pub const SQRT_RADICAND: u32 = 10_005;

/// Multiplier of the square root in `426880 · √10005`.
pub const SQRT_MULTIPLIER: u32 = 426_880;

/// Decimal digits gained per series term (≈ 14.18, rounded down).
pub const DIGITS_PER_TERM: u64 = 14;

/// Bits of working precision budgeted per decimal digit.
///
/// `log2(10) ≈ 3.32`, so 4 bits per digit leaves a safety margin.
pub const BITS_PER_DIGIT: u64 = 4;

/// Default extra decimal digits of precision beyond the requested position.
pub const DEFAULT_GUARD_DIGITS: u64 = 100;

/// Default extra series terms beyond `position / DIGITS_PER_TERM`.
pub const DEFAULT_GUARD_TERMS: u64 = 100;

/// Smallest term count; the split range `[1, n)` must hold at least one term.
pub const MIN_TERM_COUNT: u64 = 2;

/// Default digit position when none is given.
pub const DEFAULT_DIGIT_POSITION: u64 = 10_000;

/// Ranges narrower than this are split serially.
pub const DEFAULT_PARALLEL_MIN_WIDTH: i64 = 1000;

/// Recursion depth beyond which the scheduler stops forking.
pub const DEFAULT_PARALLEL_MAX_DEPTH: u32 = 4;

/// Digits shown on each side of the requested digit.
pub const DEFAULT_CONTEXT_WINDOW: u64 = 5;

/// Largest position for which a context window is rendered.
pub const CONTEXT_POSITION_LIMIT: u64 = 100_000;

/// Upper bound, in units of the last place, on the error of an assembled
/// approximation (square root and division truncations).
pub const ASSEMBLY_ERROR_ULPS: u32 = 8;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic or calculation error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Algorithm results did not match during cross-validation.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration or input.
    pub const ERROR_CONFIG: i32 = 4;
}
