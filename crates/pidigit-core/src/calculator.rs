//! Calculator traits and the `PiCalculator` decorator.
//!
//! `Calculator` is the public trait consumed by orchestration.
//! `Splitter` is the internal trait implemented by the splitting strategies.
//! `PiCalculator` wraps a `Splitter` with precision budgeting, assembly and
//! digit extraction.

use std::sync::Arc;

use tracing::{debug, info};

use crate::assembler::{assemble, PiApprox};
use crate::digits::{extract_digit, DigitReport, DigitRequest};
use crate::options::Options;
use crate::split::{SplitTriple, TermRange};

/// Error type for π digit calculations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PiError {
    /// A term range with `end <= start` or `start < 1`.
    #[error("invalid term range [{start}, {end})")]
    InvalidRange {
        /// First term index of the range.
        start: i64,
        /// One past the last term index of the range.
        end: i64,
    },

    /// A concurrent branch failed or the worker pool could not be built.
    #[error("parallel execution failed: {0}")]
    ParallelExecution(String),

    /// An arithmetic step could not be performed.
    #[error("calculation error: {0}")]
    Calculation(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// The requested position cannot be computed.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Digits from different algorithms don't match.
    #[error("result mismatch between algorithms")]
    Mismatch,
}

/// Public trait for π digit calculators, consumed by orchestration.
pub trait Calculator: Send + Sync {
    /// Compute the digit described by `request`.
    fn calculate(&self, request: &DigitRequest, opts: &Options) -> Result<DigitReport, PiError>;

    /// Get the name of this calculator.
    fn name(&self) -> &str;
}

/// Internal trait for binary splitting strategies.
/// Wrapped by `PiCalculator` which adds assembly and extraction.
pub trait Splitter: Send + Sync {
    /// Produce the `(P, Q, R)` triple for `range`.
    fn split(&self, range: TermRange, opts: &Options) -> Result<SplitTriple, PiError>;

    /// Get the name of this strategy.
    fn name(&self) -> &str;
}

/// Decorator that turns a `Splitter` into a full digit calculator.
pub struct PiCalculator {
    inner: Arc<dyn Splitter>,
}

impl PiCalculator {
    /// Create a new `PiCalculator` wrapping the given splitter.
    #[must_use]
    pub fn new(inner: Arc<dyn Splitter>) -> Self {
        Self { inner }
    }

    /// Compute the π approximation backing `request`.
    pub fn approximate(&self, request: &DigitRequest, opts: &Options) -> Result<PiApprox, PiError> {
        info!(
            splitter = self.inner.name(),
            position = request.position(),
            terms = request.term_count(),
            bits = request.precision().bits(),
            "computing pi"
        );
        let (_, q, r) = self.inner.split(request.terms()?, opts)?.into_parts();
        debug!(q_bits = q.bits(), "series split complete");
        assemble(&q, &r, request.precision())
    }
}

impl Calculator for PiCalculator {
    fn calculate(&self, request: &DigitRequest, opts: &Options) -> Result<DigitReport, PiError> {
        let pi = self.approximate(request, opts)?;
        extract_digit(&pi, request.position(), request.context_window())
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
