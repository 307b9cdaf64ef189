//! # pidigit-cli
//!
//! CLI output, fallback reporting, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod ui;

pub use presenter::{CLIFallbackReporter, CLIResultPresenter};
