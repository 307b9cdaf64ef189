//! Core orchestration: parallel-first execution, serial fallback and
//! result analysis.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Instant;

use tracing::{info, warn};

use pidigit_core::calculator::{Calculator, PiError};
use pidigit_core::digits::{DigitReport, DigitRequest};
use pidigit_core::options::Options;

use crate::interfaces::{CalculationResult, FallbackReporter};

/// Run `primary`, recomputing everything with `fallback` if it fails.
///
/// Only a `ParallelExecution` failure (including a panic anywhere in the
/// primary calculator) triggers the retry. Partial work from the failed
/// attempt is discarded. Failures of `fallback` are not caught.
pub fn execute_with_fallback(
    primary: &dyn Calculator,
    fallback: &dyn Calculator,
    request: &DigitRequest,
    opts: &Options,
    reporter: &dyn FallbackReporter,
) -> CalculationResult {
    let start = Instant::now();

    match run_guarded(primary, request, opts) {
        Err(PiError::ParallelExecution(reason)) => {
            let error = PiError::ParallelExecution(reason);
            warn!(
                algorithm = primary.name(),
                %error,
                "parallel computation failed, recomputing serially"
            );
            reporter.report_fallback(primary.name(), &error);

            let outcome = fallback.calculate(request, opts);
            CalculationResult {
                algorithm: fallback.name().to_string(),
                outcome,
                duration: start.elapsed(),
                fell_back: true,
            }
        }
        outcome => CalculationResult {
            algorithm: primary.name().to_string(),
            outcome,
            duration: start.elapsed(),
            fell_back: false,
        },
    }
}

/// Call `calc`, converting a panic into a `ParallelExecution` error.
fn run_guarded(
    calc: &dyn Calculator,
    request: &DigitRequest,
    opts: &Options,
) -> Result<DigitReport, PiError> {
    panic::catch_unwind(AssertUnwindSafe(|| calc.calculate(request, opts)))
        .unwrap_or_else(|payload| Err(PiError::ParallelExecution(panic_message(payload.as_ref()))))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "worker panicked".to_string()
    }
}

/// Execute the request with all given calculators.
pub fn execute_calculations(
    calculators: &[Arc<dyn Calculator>],
    request: &DigitRequest,
    opts: &Options,
) -> Vec<CalculationResult> {
    let run = |calc: &Arc<dyn Calculator>| {
        let start = Instant::now();
        let outcome = calc.calculate(request, opts);
        let duration = start.elapsed();
        info!(algorithm = calc.name(), ?duration, ok = outcome.is_ok(), "calculation finished");
        CalculationResult {
            algorithm: calc.name().to_string(),
            outcome,
            duration,
            fell_back: false,
        }
    };

    if calculators.len() == 1 {
        return vec![run(&calculators[0])];
    }

    // Multiple calculators: run in parallel using rayon
    use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

    calculators.par_iter().map(run).collect()
}

/// Analyze comparison results for mismatches.
pub fn analyze_comparison_results(results: &[CalculationResult]) -> Result<(), PiError> {
    let digits: Vec<u8> = results.iter().filter_map(CalculationResult::digit).collect();

    let Some((first, rest)) = digits.split_first() else {
        return Err(PiError::Calculation("no valid results".into()));
    };

    if rest.iter().any(|digit| digit != first) {
        return Err(PiError::Mismatch);
    }

    Ok(())
}
