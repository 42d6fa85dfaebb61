//! Test helpers shared across unit and integration tests.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::engine::DispatchEngine;
use crate::error::SimulationError;
use crate::provider::{Classification, ImageClassifier, ImageTensor, EXPECTED_SHAPE};
use crate::scenario::builtin_registry;

/// Classifier double with three behaviors: answer with a fixed class, report
/// the model as unavailable, or stall long enough to trip a timeout.
pub struct FakeClassifier {
    class_index: usize,
    unavailable: bool,
    delay: Option<Duration>,
}

impl FakeClassifier {
    pub fn with_class(class_index: usize) -> Self {
        Self {
            class_index,
            unavailable: false,
            delay: None,
        }
    }

    pub fn broken() -> Self {
        Self {
            class_index: 0,
            unavailable: true,
            delay: None,
        }
    }

    pub fn slow(class_index: usize, delay: Duration) -> Self {
        Self {
            class_index,
            unavailable: false,
            delay: Some(delay),
        }
    }
}

#[async_trait]
impl ImageClassifier for FakeClassifier {
    async fn classify(&self, _tensor: &ImageTensor) -> Result<Classification, SimulationError> {
        if self.unavailable {
            return Err(SimulationError::ModelUnavailable(
                "model file missing".to_string(),
            ));
        }
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        let mut distribution = vec![0.0; self.class_index + 1];
        distribution[self.class_index] = 1.0;
        Ok(Classification {
            class_index: self.class_index,
            distribution,
        })
    }
}

/// A valid all-zero `[1, 224, 224, 3]` tensor.
pub fn zero_tensor() -> ImageTensor {
    let len: usize = EXPECTED_SHAPE.iter().product();
    ImageTensor::from_raw(vec![0.0; len], &EXPECTED_SHAPE).expect("zero tensor is well formed")
}

/// Dispatch engine over the built-in catalog with a fake classifier.
pub fn builtin_engine(classifier: FakeClassifier) -> DispatchEngine {
    let registry = builtin_registry(Arc::new(classifier)).expect("built-in catalog must verify");
    DispatchEngine::new(Arc::new(registry))
}
