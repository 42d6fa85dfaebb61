//! Ordered scenario registry.
//!
//! The registry is the single source of truth for which scenarios exist and
//! what each one accepts. It is populated once at startup and read-only
//! afterwards: no runtime mutation, no removal. Registration order is
//! significant because it drives the selector order in the sidebar.

use std::collections::HashMap;

use crate::error::SimulationError;
use crate::scenario::types::ScenarioDescriptor;

/// Registration-ordered mapping from scenario name to descriptor.
pub struct ScenarioRegistry {
    entries: Vec<ScenarioDescriptor>,
    index: HashMap<String, usize>,
}

impl ScenarioRegistry {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Inserts a descriptor, preserving registration order.
    pub fn register(&mut self, descriptor: ScenarioDescriptor) -> Result<(), SimulationError> {
        if self.index.contains_key(&descriptor.name) {
            return Err(SimulationError::DuplicateScenario(descriptor.name));
        }
        self.index
            .insert(descriptor.name.clone(), self.entries.len());
        self.entries.push(descriptor);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<&ScenarioDescriptor, SimulationError> {
        self.index
            .get(name)
            .map(|&i| &self.entries[i])
            .ok_or_else(|| SimulationError::UnknownScenario(name.to_string()))
    }

    /// Registration-ordered scenario names, used to populate the selector.
    pub fn list_names(&self) -> Vec<String> {
        self.entries.iter().map(|d| d.name.clone()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScenarioDescriptor> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Startup self-check: every descriptor must declare a non-empty domain,
    /// and every declared choice must be resolvable by the bound provider.
    /// A table/domain mismatch is a configuration defect to fail loudly on
    /// here, not a request-time error to recover from.
    pub fn verify(&self) -> Result<(), SimulationError> {
        for descriptor in &self.entries {
            if descriptor.parameter_choices.is_empty() {
                return Err(SimulationError::EmptyParameterDomain(
                    descriptor.name.clone(),
                ));
            }
            for choice in &descriptor.parameter_choices {
                if !descriptor.provider.supports(choice) {
                    return Err(SimulationError::MissingTableEntry {
                        scenario: descriptor.name.clone(),
                        parameter: choice.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl Default for ScenarioRegistry {
    fn default() -> Self {
        Self::new()
    }
}
