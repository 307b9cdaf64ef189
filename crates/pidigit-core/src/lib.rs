//! # pidigit-core
//!
//! Core library for the pidigit π digit calculator.
//! Implements Chudnovsky binary splitting, its bounded fork-join
//! scheduling, fixed-point assembly of π and single-digit extraction.

pub mod assembler;
pub mod calculator;
pub mod constants;
pub mod digits;
pub mod fixed;
pub mod options;
pub mod parallel;
pub mod registry;
pub mod split;

// Re-exports
pub use assembler::{assemble, PiApprox};
pub use calculator::{Calculator, PiCalculator, PiError, Splitter};
pub use constants::{
    exit_codes, DEFAULT_CONTEXT_WINDOW, DEFAULT_DIGIT_POSITION, DEFAULT_GUARD_DIGITS,
    DEFAULT_GUARD_TERMS, DEFAULT_PARALLEL_MAX_DEPTH, DEFAULT_PARALLEL_MIN_WIDTH,
};
pub use digits::{extract_digit, DigitContext, DigitReport, DigitRequest};
pub use fixed::{FixedPoint, Precision};
pub use options::Options;
pub use parallel::{parallel_split, parallel_split_with, ParallelSplitter};
pub use registry::{CalculatorFactory, DefaultFactory};
pub use split::{split, SerialSplitter, SplitTriple, TermRange};

/// Compute the digit of π at `position` (1 = first digit after the point).
///
/// This is a convenience function for simple use cases. It runs the parallel
/// splitter with default options and no fallback; use the orchestration
/// crate for the serial fallback path.
///
/// # Example
/// ```
/// assert_eq!(pidigit_core::pi_digit(1).unwrap(), 1);
/// assert_eq!(pidigit_core::pi_digit(5).unwrap(), 9);
/// ```
pub fn pi_digit(position: u64) -> Result<u8, PiError> {
    let calc = PiCalculator::new(std::sync::Arc::new(ParallelSplitter::new()));
    let opts = Options::default();
    let request = DigitRequest::new(position, &opts)?;
    Ok(calc.calculate(&request, &opts)?.digit)
}
