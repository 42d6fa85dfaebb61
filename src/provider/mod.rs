//! Outcome providers for scenario simulations.
//!
//! A provider is the pluggable rule that turns a parameter choice into a
//! result. Three kinds exist:
//! - `table`: fixed parameter → score map, deterministic
//! - `random`: uniform integer draw within a per-parameter inclusive range
//! - `inference`: delegates an image tensor to an external classifier
//!
//! Providers are shared immutable (`Arc<dyn OutcomeProvider>`) because several
//! descriptors may reuse the same rule. None of them hold mutable state, so a
//! provider can serve concurrent resolutions without locking.

pub mod inference;
pub mod random;
pub mod table;

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;

use crate::error::SimulationError;
use crate::scenario::OutcomeValue;

pub use inference::{
    Classification, ImageClassifier, ImageTensor, InferenceProvider, EXPECTED_SHAPE,
};
pub use random::BoundedRandomProvider;
pub use table::TableProvider;

/// Provider kinds, used for catalog introspection and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    Table,
    BoundedRandom,
    ExternalInference,
}

impl ProviderKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Table => "table",
            ProviderKind::BoundedRandom => "bounded-random",
            ProviderKind::ExternalInference => "external-inference",
        }
    }

    pub const fn all() -> &'static [ProviderKind] {
        &[
            ProviderKind::Table,
            ProviderKind::BoundedRandom,
            ProviderKind::ExternalInference,
        ]
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(ProviderKind::Table),
            "bounded-random" | "random" => Ok(ProviderKind::BoundedRandom),
            "external-inference" | "inference" => Ok(ProviderKind::ExternalInference),
            _ => Err(format!("unknown provider kind: {s}")),
        }
    }
}

impl serde::Serialize for ProviderKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// A single resolution, carrying the validated parameter choice plus the
/// optional image attachment the inference provider needs.
#[derive(Debug, Clone, Copy)]
pub struct ResolveRequest<'a> {
    pub scenario: &'a str,
    pub parameter: &'a str,
    pub image: Option<&'a ImageTensor>,
}

/// Core capability implemented by every outcome provider.
///
/// `resolve` must be a single-shot computation: no session state, no
/// multi-step protocol. Implementations are `Send + Sync` so the engine can
/// invoke them from concurrent requests.
#[async_trait]
pub trait OutcomeProvider: Send + Sync {
    fn kind(&self) -> ProviderKind;

    /// Returns whether the provider can resolve the given parameter. Used by
    /// the registry's startup self-check; providers whose computation does not
    /// depend on the parameter accept everything.
    fn supports(&self, _parameter: &str) -> bool {
        true
    }

    async fn resolve(&self, req: ResolveRequest<'_>) -> Result<OutcomeValue, SimulationError>;
}
