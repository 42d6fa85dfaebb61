//! Boundary types exchanged with the presentation adapter.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::provider::{ImageTensor, OutcomeProvider, ProviderKind};

/// Static metadata binding a scenario's name, parameter domain, provider, and
/// result template. Built once at startup, shared read-only for the process
/// lifetime.
pub struct ScenarioDescriptor {
    /// Unique identifier, shown verbatim in the sidebar.
    pub name: String,
    /// Ordered, distinct selectable values; insertion order defines display
    /// order and the first entry is the default selection.
    pub parameter_choices: Vec<String>,
    /// Shared outcome rule; several descriptors may reuse one provider.
    pub provider: Arc<dyn OutcomeProvider>,
    /// Format string with `{parameter}` and `{value}` placeholders.
    pub result_template: String,
}

impl ScenarioDescriptor {
    pub fn new(
        name: &str,
        parameter_choices: &[&str],
        provider: Arc<dyn OutcomeProvider>,
        result_template: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            parameter_choices: parameter_choices.iter().map(|s| s.to_string()).collect(),
            provider,
            result_template: result_template.to_string(),
        }
    }

    pub fn provider_kind(&self) -> ProviderKind {
        self.provider.kind()
    }

    /// Fills the result template for a resolved outcome.
    pub fn render(&self, parameter: &str, value: &OutcomeValue) -> String {
        self.result_template
            .replace("{parameter}", parameter)
            .replace("{value}", &value.to_string())
    }
}

impl fmt::Debug for ScenarioDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScenarioDescriptor")
            .field("name", &self.name)
            .field("parameter_choices", &self.parameter_choices)
            .field("provider", &self.provider.kind())
            .field("result_template", &self.result_template)
            .finish()
    }
}

/// One user interaction: which scenario, which parameter.
///
/// The image attachment travels in-process only; the presentation adapter is
/// responsible for decode, resize, and normalization before constructing the
/// tensor, so it never appears on the serialized boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationRequest {
    pub scenario_name: String,
    pub parameter_choice: String,
    #[serde(skip)]
    pub image: Option<ImageTensor>,
}

impl SimulationRequest {
    pub fn new(scenario_name: &str, parameter_choice: &str) -> Self {
        Self {
            scenario_name: scenario_name.to_string(),
            parameter_choice: parameter_choice.to_string(),
            image: None,
        }
    }

    pub fn with_image(mut self, image: ImageTensor) -> Self {
        self.image = Some(image);
        self
    }
}

/// Resolved outcome of a provider invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OutcomeValue {
    /// Table scores and random draws. Draws are whole numbers and display
    /// without a decimal point; table scores keep their fraction.
    Score { value: f64 },
    Classification {
        class_index: usize,
        distribution: Vec<f32>,
    },
}

impl fmt::Display for OutcomeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutcomeValue::Score { value } => {
                if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
                    write!(f, "{}", *value as i64)
                } else {
                    write!(f, "{value}")
                }
            }
            OutcomeValue::Classification { class_index, .. } => write!(f, "{class_index}"),
        }
    }
}

/// Complete result handed back to the presentation adapter. Created per
/// interaction and discarded after display; nothing is persisted.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationResult {
    pub scenario_name: String,
    pub parameter_choice: String,
    pub value: OutcomeValue,
    pub rendered_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_display_drops_trailing_zero() {
        assert_eq!(OutcomeValue::Score { value: 0.95 }.to_string(), "0.95");
        assert_eq!(OutcomeValue::Score { value: 143.0 }.to_string(), "143");
    }

    #[test]
    fn test_classification_displays_class_index() {
        let value = OutcomeValue::Classification {
            class_index: 4,
            distribution: vec![0.1, 0.2, 0.1, 0.1, 0.5],
        };
        assert_eq!(value.to_string(), "4");
    }

    #[test]
    fn test_request_round_trips_without_image() {
        let request = SimulationRequest::new("Nanomedicine", "Chemotherapy");
        let json = serde_json::to_string(&request).unwrap();
        let back: SimulationRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back.scenario_name, "Nanomedicine");
        assert_eq!(back.parameter_choice, "Chemotherapy");
        assert!(back.image.is_none());
    }
}
