//! CLI result presenter and fallback reporter.

use pidigit_core::calculator::PiError;
use pidigit_core::digits::DigitRequest;
use pidigit_orchestration::interfaces::{CalculationResult, FallbackReporter, ResultPresenter};

use crate::output::{format_context, format_duration, format_number};
use crate::ui::{print_error, print_header, print_warning};

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_result(&self, result: &CalculationResult, request: &DigitRequest, details: bool) {
        let report = match &result.outcome {
            Ok(report) => report,
            Err(e) => {
                self.present_error(&format!("{}: {e}", result.algorithm));
                return;
            }
        };

        if self.quiet {
            println!("{}", report.digit_char());
            return;
        }

        if self.verbose {
            print_header(&format!("{} splitter", result.algorithm));
            println!("Duration: {}", format_duration(result.duration));
            if result.fell_back {
                println!("Recovered: serial fallback");
            }
        }

        if details {
            println!("Terms: {}", format_number(request.term_count().unsigned_abs()));
            println!("Working digits: {}", format_number(request.digits()));
            println!("Precision: {} bits", format_number(request.precision().bits()));
            println!(
                "Guard band: {}",
                if report.certain { "clear" } else { "ambiguous" }
            );
        }

        println!(
            "Digit {} of pi: {}",
            format_number(report.position),
            report.digit_char()
        );
        if let Some(context) = &report.context {
            println!("Context: {}", format_context(context));
        }
    }

    fn present_comparison(&self, results: &[CalculationResult]) {
        if self.quiet {
            return;
        }

        println!("\nComparison Results:");
        println!("{:-<60}", "");
        for result in results {
            let status = match result.digit() {
                Some(digit) => format!("digit {digit}"),
                None => "ERROR".to_string(),
            };
            println!(
                "  {:<20} {:>10} [{}]",
                result.algorithm,
                format_duration(result.duration),
                status,
            );
        }
    }

    fn present_error(&self, error: &str) {
        print_error(error);
    }
}

/// Fallback reporter printing a warning line on stderr.
pub struct CLIFallbackReporter {
    quiet: bool,
}

impl CLIFallbackReporter {
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl FallbackReporter for CLIFallbackReporter {
    fn report_fallback(&self, algorithm: &str, error: &PiError) {
        if self.quiet {
            return;
        }
        print_warning(&format!("{algorithm} run failed ({error}); recomputing serially"));
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use pidigit_core::digits::{DigitContext, DigitReport};
    use pidigit_core::options::Options;

    fn request() -> DigitRequest {
        DigitRequest::new(2, &Options::default()).unwrap()
    }

    fn ok_result() -> CalculationResult {
        CalculationResult {
            algorithm: "Parallel".into(),
            outcome: Ok(DigitReport {
                position: 2,
                digit: 4,
                context: Some(DigitContext {
                    start: 1,
                    digits: "1415926".into(),
                    focus: 1,
                }),
                certain: true,
            }),
            duration: Duration::from_millis(5),
            fell_back: false,
        }
    }

    #[test]
    fn presenter_modes() {
        let presenter = CLIResultPresenter::new(true, false);
        assert!(presenter.verbose);
        assert!(!presenter.quiet);
    }

    #[test]
    fn presenter_present_result_quiet() {
        CLIResultPresenter::new(false, true).present_result(&ok_result(), &request(), false);
    }

    #[test]
    fn presenter_present_result_verbose_with_details() {
        let mut result = ok_result();
        result.fell_back = true;
        CLIResultPresenter::new(true, false).present_result(&result, &request(), true);
    }

    #[test]
    fn presenter_present_failed_result() {
        let result = CalculationResult {
            outcome: Err(PiError::Calculation("boom".into())),
            ..ok_result()
        };
        CLIResultPresenter::new(false, false).present_result(&result, &request(), false);
    }

    #[test]
    fn presenter_present_comparison() {
        let presenter = CLIResultPresenter::new(false, false);
        let failed = CalculationResult {
            algorithm: "Serial".into(),
            outcome: Err(PiError::Mismatch),
            ..ok_result()
        };
        presenter.present_comparison(&[ok_result(), failed]);
        presenter.present_comparison(&[]);
    }

    #[test]
    fn fallback_reporter_quiet_and_loud() {
        let error = PiError::ParallelExecution("pool".into());
        CLIFallbackReporter::new(true).report_fallback("Parallel", &error);
        CLIFallbackReporter::new(false).report_fallback("Parallel", &error);
    }
}
