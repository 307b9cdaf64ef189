//! Orchestration interfaces.

use std::time::Duration;

use pidigit_core::calculator::PiError;
use pidigit_core::digits::{DigitReport, DigitRequest};

/// Trait for reporting a parallel failure before the serial retry runs.
pub trait FallbackReporter: Send + Sync {
    /// Report that `algorithm` failed with `error` and the serial path takes over.
    fn report_fallback(&self, algorithm: &str, error: &PiError);
}

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present a digit result.
    fn present_result(&self, result: &CalculationResult, request: &DigitRequest, details: bool);

    /// Present a comparison of several results.
    fn present_comparison(&self, results: &[CalculationResult]);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Result of a single calculation.
#[derive(Debug, Clone)]
pub struct CalculationResult {
    /// Name of the calculator that produced the outcome.
    pub algorithm: String,
    /// The extracted digit or a structured error.
    pub outcome: Result<DigitReport, PiError>,
    /// Computation duration, including any failed parallel attempt.
    pub duration: Duration,
    /// Whether the serial fallback produced this outcome.
    pub fell_back: bool,
}

impl CalculationResult {
    /// The digit, when the calculation succeeded.
    #[must_use]
    pub fn digit(&self) -> Option<u8> {
        self.outcome.as_ref().ok().map(|report| report.digit)
    }
}

/// Null fallback reporter (does nothing).
pub struct NullFallbackReporter;

impl FallbackReporter for NullFallbackReporter {
    fn report_fallback(&self, _algorithm: &str, _error: &PiError) {}
}
