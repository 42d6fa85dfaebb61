//! Timeout behavior around the delegated model call.

use std::time::Duration;

use crate::error::SimulationError;
use crate::scenario::SimulationRequest;
use crate::testing::{builtin_engine, zero_tensor, FakeClassifier};

#[tokio::test]
async fn test_slow_classifier_maps_to_inference_timeout() {
    let engine = builtin_engine(FakeClassifier::slow(1, Duration::from_secs(30)));
    let request =
        SimulationRequest::new("AI in Diagnostics", "Uploaded Image").with_image(zero_tensor());
    let err = engine
        .execute_with_timeout(&request, Duration::from_millis(50))
        .await
        .unwrap_err();
    assert!(matches!(err, SimulationError::InferenceTimeout(_)));
}

#[tokio::test]
async fn test_fast_classifier_beats_the_deadline() {
    let engine = builtin_engine(FakeClassifier::with_class(1));
    let request =
        SimulationRequest::new("AI in Diagnostics", "Uploaded Image").with_image(zero_tensor());
    let result = engine
        .execute_with_timeout(&request, Duration::from_secs(5))
        .await
        .unwrap();
    assert_eq!(result.rendered_text, "Predicted Class: 1");
}

#[tokio::test]
async fn test_timeout_does_not_affect_cheap_providers() {
    let engine = builtin_engine(FakeClassifier::with_class(0));
    let result = engine
        .execute_with_timeout(
            &SimulationRequest::new("Stem Cell Therapy", "Heart Disease"),
            Duration::from_millis(1),
        )
        .await
        .unwrap();
    assert_eq!(
        result.rendered_text,
        "Predicted Success Rate for Heart Disease Stem Cell Therapy: 0.75"
    );
}

#[tokio::test]
async fn test_validation_errors_win_over_timeouts() {
    let engine = builtin_engine(FakeClassifier::slow(1, Duration::from_secs(30)));
    let err = engine
        .execute_with_timeout(
            &SimulationRequest::new("AI in Diagnostics", "Raw Scan"),
            Duration::from_millis(1),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, SimulationError::InvalidParameter { .. }));
}
