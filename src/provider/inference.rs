//! External-inference provider: delegates an image tensor to a classifier.
//!
//! The core never loads, trains, or persists a model. It receives an
//! already-decoded, channel-normalized tensor from the presentation boundary
//! (decode, resize, and normalization happen there) and hands it to whatever
//! `ImageClassifier` the host application injected at startup.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::SimulationError;
use crate::provider::{OutcomeProvider, ProviderKind, ResolveRequest};
use crate::scenario::OutcomeValue;

/// Expected tensor shape: one image, 224x224 pixels, three channels.
pub const EXPECTED_SHAPE: [usize; 4] = [1, 224, 224, 3];

/// A fixed-size, channel-normalized image tensor.
///
/// Construction validates the shape, so a held tensor is always
/// `[1, 224, 224, 3]` with a matching element count. Values are expected in
/// [0, 1]; the core does not re-normalize.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageTensor {
    data: Vec<f32>,
}

impl ImageTensor {
    pub fn from_raw(data: Vec<f32>, shape: &[usize]) -> Result<Self, SimulationError> {
        if shape != EXPECTED_SHAPE {
            return Err(SimulationError::InvalidImageShape {
                expected: EXPECTED_SHAPE,
                actual: shape.to_vec(),
            });
        }
        let expected_len: usize = EXPECTED_SHAPE.iter().product();
        if data.len() != expected_len {
            return Err(SimulationError::InvalidImageShape {
                expected: EXPECTED_SHAPE,
                actual: vec![data.len()],
            });
        }
        Ok(Self { data })
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }

    pub const fn shape(&self) -> [usize; 4] {
        EXPECTED_SHAPE
    }
}

/// Classifier output: the winning class plus the raw output distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub class_index: usize,
    pub distribution: Vec<f32>,
}

/// Capability contract for the externally supplied classifier.
///
/// Implementations live in the host application (model file handling, runtime
/// selection); tests inject fakes through `new_with_classifier`.
#[async_trait]
pub trait ImageClassifier: Send + Sync {
    async fn classify(&self, tensor: &ImageTensor) -> Result<Classification, SimulationError>;
}

/// Outcome provider that forwards the request's image attachment to the
/// injected classifier.
pub struct InferenceProvider {
    classifier: Arc<dyn ImageClassifier>,
}

impl InferenceProvider {
    pub fn new_with_classifier(classifier: Arc<dyn ImageClassifier>) -> Self {
        Self { classifier }
    }
}

#[async_trait]
impl OutcomeProvider for InferenceProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::ExternalInference
    }

    async fn resolve(&self, req: ResolveRequest<'_>) -> Result<OutcomeValue, SimulationError> {
        let tensor = req
            .image
            .ok_or_else(|| SimulationError::MissingImage(req.scenario.to_string()))?;

        let classification = self.classifier.classify(tensor).await.map_err(|e| {
            tracing::warn!("classifier failed for scenario '{}': {e}", req.scenario);
            e
        })?;

        Ok(OutcomeValue::Classification {
            class_index: classification.class_index,
            distribution: classification.distribution,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{zero_tensor, FakeClassifier};

    #[test]
    fn test_shape_guard_rejects_wrong_dimensions() {
        let err = ImageTensor::from_raw(vec![0.0; 100 * 100 * 3], &[1, 100, 100, 3]).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidImageShape { .. }));

        let err = ImageTensor::from_raw(vec![0.0; 224 * 224], &[224, 224]).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidImageShape { .. }));
    }

    #[test]
    fn test_shape_guard_rejects_short_buffer() {
        let err = ImageTensor::from_raw(vec![0.0; 7], &[1, 224, 224, 3]).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidImageShape { .. }));
    }

    #[test]
    fn test_well_formed_tensor_is_accepted() {
        let tensor = zero_tensor();
        assert_eq!(tensor.shape(), EXPECTED_SHAPE);
        assert_eq!(tensor.data().len(), 1 * 224 * 224 * 3);
    }

    #[tokio::test]
    async fn test_missing_image_is_reported() {
        let provider =
            InferenceProvider::new_with_classifier(Arc::new(FakeClassifier::with_class(3)));
        let err = provider
            .resolve(ResolveRequest {
                scenario: "AI in Diagnostics",
                parameter: "Uploaded Image",
                image: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, SimulationError::MissingImage(_)));
    }

    #[tokio::test]
    async fn test_classification_is_forwarded() {
        let provider =
            InferenceProvider::new_with_classifier(Arc::new(FakeClassifier::with_class(7)));
        let tensor = zero_tensor();
        let value = provider
            .resolve(ResolveRequest {
                scenario: "AI in Diagnostics",
                parameter: "Uploaded Image",
                image: Some(&tensor),
            })
            .await
            .unwrap();
        match value {
            OutcomeValue::Classification { class_index, .. } => assert_eq!(class_index, 7),
            other => panic!("expected classification, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unavailable_model_propagates() {
        let provider = InferenceProvider::new_with_classifier(Arc::new(FakeClassifier::broken()));
        let tensor = zero_tensor();
        let err = provider
            .resolve(ResolveRequest {
                scenario: "AI in Diagnostics",
                parameter: "Uploaded Image",
                image: Some(&tensor),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, SimulationError::ModelUnavailable(_)));
    }
}
