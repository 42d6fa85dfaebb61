//! Deterministic table provider: a fixed mapping from parameter to score.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::SimulationError;
use crate::provider::{OutcomeProvider, ProviderKind, ResolveRequest};
use crate::scenario::OutcomeValue;

/// Wraps a fixed parameter → score map. Two resolutions of the same parameter
/// always return the identical value.
pub struct TableProvider {
    scores: HashMap<String, f64>,
}

impl TableProvider {
    pub fn new(scores: HashMap<String, f64>) -> Self {
        Self { scores }
    }

    /// Convenience constructor for the static catalog tables.
    pub fn from_entries(entries: &[(&str, f64)]) -> Self {
        Self {
            scores: entries
                .iter()
                .map(|(key, score)| (key.to_string(), *score))
                .collect(),
        }
    }
}

#[async_trait]
impl OutcomeProvider for TableProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Table
    }

    fn supports(&self, parameter: &str) -> bool {
        self.scores.contains_key(parameter)
    }

    async fn resolve(&self, req: ResolveRequest<'_>) -> Result<OutcomeValue, SimulationError> {
        // Validated requests can only miss here on a catalog defect; the
        // registry self-check is supposed to reject that at startup.
        let score = self.scores.get(req.parameter).copied().ok_or_else(|| {
            SimulationError::MissingTableEntry {
                scenario: req.scenario.to_string(),
                parameter: req.parameter.to_string(),
            }
        })?;
        Ok(OutcomeValue::Score { value: score })
    }
}
