//! Calculator selection logic.

use std::sync::Arc;

use pidigit_core::calculator::{Calculator, PiError};
use pidigit_core::registry::CalculatorFactory;

/// How the selected calculators are run.
pub enum Selection {
    /// Run `primary`; on a parallel failure, recompute with `fallback`.
    Fallback {
        /// Parallel-first calculator.
        primary: Arc<dyn Calculator>,
        /// Serial calculator used after a parallel failure.
        fallback: Arc<dyn Calculator>,
    },
    /// Run each calculator and cross-check the digits.
    Compare(Vec<Arc<dyn Calculator>>),
}

/// Select calculators based on algorithm name.
///
/// `auto` is the parallel calculator with serial fallback, `all` runs every
/// registered calculator, any other name runs that calculator alone.
pub fn select_calculators(
    algo: &str,
    factory: &dyn CalculatorFactory,
) -> Result<Selection, PiError> {
    match algo {
        "auto" => Ok(Selection::Fallback {
            primary: factory.get("parallel")?,
            fallback: factory.get("serial")?,
        }),
        "all" => {
            let mut calcs = Vec::new();
            for name in factory.available() {
                calcs.push(factory.get(name)?);
            }
            Ok(Selection::Compare(calcs))
        }
        name => Ok(Selection::Compare(vec![factory.get(name)?])),
    }
}
