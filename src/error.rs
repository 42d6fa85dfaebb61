//! Shared error taxonomy for registry construction and dispatch.
//!
//! Every failure is reported to the caller as a structured variant; nothing is
//! silently substituted with a default value. The engine performs no retries,
//! so retry policy (if any) belongs to the presentation layer around the
//! inference call.

use std::time::Duration;

/// Errors surfaced by the registry, the dispatch engine, and outcome providers.
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    #[error("unknown scenario: {0}")]
    UnknownScenario(String),
    #[error("invalid parameter '{parameter}' for scenario '{scenario}'")]
    InvalidParameter { scenario: String, parameter: String },
    /// Configuration defect: a declared parameter choice has no table entry.
    /// Caught by the startup self-check; occurrence at request time is a
    /// programming error, not a condition to recover from.
    #[error("no table entry for parameter '{parameter}' in scenario '{scenario}'")]
    MissingTableEntry { scenario: String, parameter: String },
    #[error("duplicate scenario: {0}")]
    DuplicateScenario(String),
    #[error("scenario '{0}' declares an empty parameter domain")]
    EmptyParameterDomain(String),
    #[error("scenario '{0}' requires an image attachment")]
    MissingImage(String),
    #[error("model unavailable: {0}")]
    ModelUnavailable(String),
    #[error("invalid image shape: expected {expected:?}, got {actual:?}")]
    InvalidImageShape {
        expected: [usize; 4],
        actual: Vec<usize>,
    },
    #[error("inference timed out after {0:?}")]
    InferenceTimeout(Duration),
}

impl SimulationError {
    /// Stable identifier for the failure kind, used by presentation adapters
    /// that render failures as messages.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::UnknownScenario(_) => "unknown_scenario",
            Self::InvalidParameter { .. } => "invalid_parameter",
            Self::MissingTableEntry { .. } => "missing_table_entry",
            Self::DuplicateScenario(_) => "duplicate_scenario",
            Self::EmptyParameterDomain(_) => "empty_parameter_domain",
            Self::MissingImage(_) => "missing_image",
            Self::ModelUnavailable(_) => "model_unavailable",
            Self::InvalidImageShape { .. } => "invalid_image_shape",
            Self::InferenceTimeout(_) => "inference_timeout",
        }
    }
}

impl serde::Serialize for SimulationError {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}
