//! Named splitting strategies and a cached calculator factory.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::calculator::{Calculator, PiCalculator, PiError, Splitter};
use crate::parallel::ParallelSplitter;
use crate::split::SerialSplitter;

/// Registered strategies, in the order `--algo all` runs them.
const SPLITTERS: &[(&str, fn() -> Arc<dyn Splitter>)] =
    &[("parallel", parallel_splitter), ("serial", serial_splitter)];

fn parallel_splitter() -> Arc<dyn Splitter> {
    Arc::new(ParallelSplitter::new())
}

fn serial_splitter() -> Arc<dyn Splitter> {
    Arc::new(SerialSplitter::new())
}

/// Lookup of calculators by strategy name.
pub trait CalculatorFactory: Send + Sync {
    /// Calculator for `name`, matched case-insensitively.
    fn get(&self, name: &str) -> Result<Arc<dyn Calculator>, PiError>;

    /// Registered strategy names.
    fn available(&self) -> Vec<&str>;
}

/// Factory building each calculator on first use and sharing it afterwards.
#[derive(Default)]
pub struct DefaultFactory {
    built: RwLock<HashMap<&'static str, Arc<dyn Calculator>>>,
}

impl DefaultFactory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CalculatorFactory for DefaultFactory {
    fn get(&self, name: &str) -> Result<Arc<dyn Calculator>, PiError> {
        let &(key, make) = SPLITTERS
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| {
                PiError::Config(format!(
                    "unknown calculator: {name} (expected one of: {})",
                    self.available().join(", ")
                ))
            })?;

        if let Some(calc) = self.built.read().get(key) {
            return Ok(Arc::clone(calc));
        }
        let calc = self
            .built
            .write()
            .entry(key)
            .or_insert_with(|| Arc::new(PiCalculator::new(make())))
            .clone();
        Ok(calc)
    }

    fn available(&self) -> Vec<&str> {
        SPLITTERS.iter().map(|(key, _)| *key).collect()
    }
}
