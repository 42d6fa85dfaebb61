//! Bounded random provider: uniform integer draws in a per-parameter range.

use std::collections::HashMap;

use async_trait::async_trait;
use rand::Rng;

use crate::error::SimulationError;
use crate::provider::{OutcomeProvider, ProviderKind, ResolveRequest};
use crate::scenario::OutcomeValue;

/// Draws a uniformly distributed integer within an inclusive range that may
/// depend on which parameter was chosen. Each call redraws independently from
/// `rand::thread_rng`; outputs are non-reproducible by design.
///
/// The parameter domain constrains display only, not computation: a parameter
/// without a dedicated range falls back to the provider-wide default.
pub struct BoundedRandomProvider {
    ranges: HashMap<String, (i64, i64)>,
    fallback: (i64, i64),
}

impl BoundedRandomProvider {
    pub fn new(low: i64, high: i64) -> Self {
        debug_assert!(low <= high);
        Self {
            ranges: HashMap::new(),
            fallback: (low, high),
        }
    }

    /// Assigns a dedicated inclusive range to one parameter.
    pub fn with_range(mut self, parameter: &str, low: i64, high: i64) -> Self {
        debug_assert!(low <= high);
        self.ranges.insert(parameter.to_string(), (low, high));
        self
    }

    fn range_for(&self, parameter: &str) -> (i64, i64) {
        self.ranges.get(parameter).copied().unwrap_or(self.fallback)
    }
}

#[async_trait]
impl OutcomeProvider for BoundedRandomProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::BoundedRandom
    }

    async fn resolve(&self, req: ResolveRequest<'_>) -> Result<OutcomeValue, SimulationError> {
        let (low, high) = self.range_for(req.parameter);
        let drawn = rand::thread_rng().gen_range(low..=high);
        Ok(OutcomeValue::Score {
            value: drawn as f64,
        })
    }
}
