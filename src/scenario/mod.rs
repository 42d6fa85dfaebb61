//! Scenario descriptors, the ordered registry, and the built-in catalog.
//!
//! ## Structure
//!
//! - `types`: boundary types (descriptor, request, result, outcome value)
//! - `registry`: registration-ordered, immutable-after-startup registry
//! - `catalog`: the ten built-in scenarios of the demo

pub mod catalog;
pub mod registry;
pub mod types;

pub use catalog::builtin_registry;
pub use registry::ScenarioRegistry;
pub use types::{OutcomeValue, ScenarioDescriptor, SimulationRequest, SimulationResult};
