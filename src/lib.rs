//! Scenario simulation backend library.
//!
//! This is the core of the medical breakthroughs demo application. It owns the
//! dispatch-and-outcome-lookup mechanism behind the sidebar:
//! - `scenario`: descriptors, the ordered registry, and the built-in catalog
//! - `provider`: outcome providers (table lookup, bounded random, inference)
//! - `engine`: the stateless dispatch engine that validates and executes requests
//!
//! # Architecture
//!
//! The presentation layer (sidebar, selectors, image upload) lives outside this
//! crate. It submits a `SimulationRequest` naming a scenario and a parameter
//! choice, and gets back either a complete `SimulationResult` or a structured
//! `SimulationError`. The registry is built once at startup and is read-only
//! afterwards, so the engine can serve concurrent requests without locking.

pub mod engine;
pub mod error;
pub mod provider;
pub mod scenario;

#[cfg(test)]
mod testing;

#[cfg(test)]
mod tests;

pub use engine::DispatchEngine;
pub use error::SimulationError;
pub use scenario::{
    builtin_registry, OutcomeValue, ScenarioDescriptor, ScenarioRegistry, SimulationRequest,
    SimulationResult,
};
