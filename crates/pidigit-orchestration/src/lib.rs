//! # pidigit-orchestration
//!
//! Parallel-first execution with serial fallback, calculator selection,
//! and result analysis.

pub mod calculator_selection;
pub mod interfaces;
pub mod orchestrator;

pub use calculator_selection::{select_calculators, Selection};
pub use interfaces::{CalculationResult, FallbackReporter, ResultPresenter};
pub use orchestrator::{analyze_comparison_results, execute_calculations, execute_with_fallback};
