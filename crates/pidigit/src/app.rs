//! Application entry point and dispatch.

use anyhow::Result;
use tracing::debug;

use pidigit_cli::presenter::{CLIFallbackReporter, CLIResultPresenter};
use pidigit_core::digits::DigitRequest;
use pidigit_core::registry::DefaultFactory;
use pidigit_orchestration::calculator_selection::{select_calculators, Selection};
use pidigit_orchestration::interfaces::ResultPresenter;
use pidigit_orchestration::orchestrator::{
    analyze_comparison_results, execute_calculations, execute_with_fallback,
};

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        pidigit_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    run_cli(config)
}

fn run_cli(config: &AppConfig) -> Result<()> {
    let opts = config.options();
    let request = DigitRequest::new(config.digit, &opts)?;
    debug!(?opts, position = request.position(), "resolved options");

    let factory = DefaultFactory::new();
    let presenter = CLIResultPresenter::new(config.verbose, config.quiet);

    match select_calculators(&config.algo, &factory)? {
        Selection::Fallback { primary, fallback } => {
            let reporter = CLIFallbackReporter::new(config.quiet);
            let result = execute_with_fallback(
                primary.as_ref(),
                fallback.as_ref(),
                &request,
                &opts,
                &reporter,
            );
            match result.outcome {
                Ok(_) => presenter.present_result(&result, &request, config.details),
                Err(err) => return Err(err.into()),
            }
        }
        Selection::Compare(calculators) => {
            let results = execute_calculations(&calculators, &request, &opts);

            if results.len() > 1 {
                presenter.present_comparison(&results);
                analyze_comparison_results(&results)?;
            }

            match results.iter().find(|r| r.outcome.is_ok()) {
                Some(result) => presenter.present_result(result, &request, config.details),
                None => {
                    let err = results
                        .into_iter()
                        .find_map(|r| r.outcome.err())
                        .unwrap_or_else(|| {
                            pidigit_core::calculator::PiError::Calculation("no calculators".into())
                        });
                    return Err(err.into());
                }
            }
        }
    }

    Ok(())
}
