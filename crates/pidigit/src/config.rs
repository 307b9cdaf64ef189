//! Application configuration from CLI flags and environment.

use clap::Parser;

use pidigit_core::constants::{DEFAULT_CONTEXT_WINDOW, DEFAULT_PARALLEL_MAX_DEPTH};
use pidigit_core::options::Options;

/// Compute a single decimal digit of π.
#[derive(Parser, Debug)]
#[command(name = "pidigit", version, about)]
pub struct AppConfig {
    /// Digit position after the decimal point (1 is the first decimal).
    #[arg(short, long, default_value = "10000", env = "PIDIGIT_DIGIT")]
    pub digit: u64,

    /// Algorithm to use: auto, serial, parallel, or all.
    #[arg(long, default_value = "auto")]
    pub algo: String,

    /// Worker threads for the splitting pool (0 = available parallelism).
    #[arg(long, default_value = "0")]
    pub threads: usize,

    /// Minimum range width, in terms, that is split in parallel (0 = default).
    #[arg(long, default_value = "0")]
    pub parallel_width: i64,

    /// Maximum recursion depth that still forks.
    #[arg(long, default_value_t = DEFAULT_PARALLEL_MAX_DEPTH)]
    pub parallel_depth: u32,

    /// Extra decimal digits of working precision (0 = default).
    #[arg(long, default_value = "0")]
    pub guard_digits: u64,

    /// Extra series terms beyond the estimate (0 = default).
    #[arg(long, default_value = "0")]
    pub guard_terms: u64,

    /// Digits of context shown on each side of the requested digit.
    #[arg(long, default_value_t = DEFAULT_CONTEXT_WINDOW)]
    pub window: u64,

    /// Quiet mode (only output the digit).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Show term count, precision and guard-band status.
    #[arg(long)]
    pub details: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Calculation options derived from the flags.
    #[must_use]
    pub fn options(&self) -> Options {
        Options {
            parallel_min_width: self.parallel_width,
            parallel_max_depth: self.parallel_depth,
            threads: self.threads,
            guard_digits: self.guard_digits,
            guard_terms: self.guard_terms,
            context_window: self.window,
        }
        .normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("pidigit").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults() {
        let config = parse(&[]);
        assert_eq!(config.algo, "auto");
        assert_eq!(config.parallel_depth, 4);
        assert_eq!(config.window, 5);
        assert!(!config.quiet);

        let opts = config.options();
        assert_eq!(opts.parallel_min_width, 1000);
        assert_eq!(opts.guard_digits, 100);
        assert_eq!(opts.guard_terms, 100);
    }

    #[test]
    fn explicit_flags() {
        let config = parse(&[
            "-d",
            "42",
            "--algo",
            "serial",
            "--threads",
            "2",
            "--parallel-width",
            "16",
            "--parallel-depth",
            "1",
            "--guard-digits",
            "30",
            "--window",
            "50",
            "-q",
        ]);
        assert_eq!(config.digit, 42);
        assert_eq!(config.algo, "serial");
        assert!(config.quiet);

        let opts = config.options();
        assert_eq!(opts.threads, 2);
        assert_eq!(opts.parallel_min_width, 16);
        assert_eq!(opts.parallel_max_depth, 1);
        assert_eq!(opts.guard_digits, 30);
        // capped at the guard digits
        assert_eq!(opts.context_window, 30);
    }

    #[test]
    fn rejects_non_numeric_digit() {
        assert!(AppConfig::try_parse_from(["pidigit", "-d", "abc"]).is_err());
    }
}
