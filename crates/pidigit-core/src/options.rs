//! Calculation options and configuration.

use crate::constants::{
    DEFAULT_CONTEXT_WINDOW, DEFAULT_GUARD_DIGITS, DEFAULT_GUARD_TERMS,
    DEFAULT_PARALLEL_MAX_DEPTH, DEFAULT_PARALLEL_MIN_WIDTH,
};

/// Options for a π digit computation.
#[derive(Debug, Clone)]
pub struct Options {
    /// Ranges narrower than this many terms are split serially.
    pub parallel_min_width: i64,
    /// Recursion depth beyond which the scheduler stops forking.
    pub parallel_max_depth: u32,
    /// Worker threads for the splitting pool (0 = available parallelism).
    pub threads: usize,
    /// Extra decimal digits of precision beyond the requested position.
    pub guard_digits: u64,
    /// Extra series terms beyond the estimated term count.
    pub guard_terms: u64,
    /// Digits of context shown on each side of the requested digit.
    pub context_window: u64,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            parallel_min_width: DEFAULT_PARALLEL_MIN_WIDTH,
            parallel_max_depth: DEFAULT_PARALLEL_MAX_DEPTH,
            threads: 0,
            guard_digits: DEFAULT_GUARD_DIGITS,
            guard_terms: DEFAULT_GUARD_TERMS,
            context_window: DEFAULT_CONTEXT_WINDOW,
        }
    }
}

impl Options {
    /// Normalize options, applying defaults where values are zero.
    ///
    /// The context window is capped at the guard digits so that every
    /// rendered digit lies inside the precision budget.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.parallel_min_width <= 0 {
            self.parallel_min_width = DEFAULT_PARALLEL_MIN_WIDTH;
        }
        if self.guard_digits == 0 {
            self.guard_digits = DEFAULT_GUARD_DIGITS;
        }
        if self.guard_terms == 0 {
            self.guard_terms = DEFAULT_GUARD_TERMS;
        }
        self.context_window = self.context_window.min(self.guard_digits);
        self
    }
}
