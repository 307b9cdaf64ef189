//! Bounded fork-join scheduling of the binary splitting recursion.
//!
//! A call forks its two half-ranges onto the rayon pool only while the range
//! is at least `parallel_min_width` terms wide and the recursion depth is at
//! most `parallel_max_depth`; everything else runs the serial engine. The
//! two branches own their outputs and the parent combines them after the
//! join, so the result is identical to `split::split` for every input.

use rayon::ThreadPoolBuilder;
use tracing::debug;

use crate::calculator::{PiError, Splitter};
use crate::options::Options;
use crate::split::{split, SplitTriple, TermRange};

/// Whether a call over `width` terms at `depth` forks into two branches.
#[must_use]
pub fn should_fork(width: i64, depth: u32, opts: &Options) -> bool {
    // A one-term range has no midpoint to split at.
    width >= opts.parallel_min_width.max(2) && depth <= opts.parallel_max_depth
}

/// Split `range` on the current rayon pool, starting at `depth`.
///
/// A panicking branch re-raises at the join point.
#[must_use]
pub fn parallel_split(range: TermRange, depth: u32, opts: &Options) -> SplitTriple {
    parallel_split_with(range, depth, opts, &split)
}

/// Fork-join over `range`, running `leaf` on every range that is not forked.
///
/// Both branches of a fork run to completion before the parent combines
/// them; a panic in either one resumes on the joining thread.
pub fn parallel_split_with<F>(range: TermRange, depth: u32, opts: &Options, leaf: &F) -> SplitTriple
where
    F: Fn(TermRange) -> SplitTriple + Sync,
{
    if !should_fork(range.width(), depth, opts) {
        return leaf(range);
    }

    let (lo, hi) = range.bisect();
    let (left, right) = rayon::join(
        || parallel_split_with(lo, depth + 1, opts, leaf),
        || parallel_split_with(hi, depth + 1, opts, leaf),
    );
    left.combine(right)
}

/// Fork-join splitting strategy running on a dedicated thread pool.
pub struct ParallelSplitter;

impl ParallelSplitter {
    /// Create a new `ParallelSplitter`.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for ParallelSplitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Splitter for ParallelSplitter {
    fn split(&self, range: TermRange, opts: &Options) -> Result<SplitTriple, PiError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(opts.threads)
            .thread_name(|i| format!("pidigit-split-{i}"))
            .build()
            .map_err(|e| PiError::ParallelExecution(format!("failed to create thread pool: {e}")))?;

        debug!(
            threads = pool.current_num_threads(),
            width = range.width(),
            min_width = opts.parallel_min_width,
            max_depth = opts.parallel_max_depth,
            "starting parallel split"
        );

        Ok(pool.install(|| parallel_split(range, 0, opts)))
    }

    fn name(&self) -> &'static str {
        "Parallel"
    }
}
