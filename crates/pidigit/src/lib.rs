//! pidigit library: application logic for the π digit calculator.

pub mod app;
pub mod config;
pub mod errors;
