//! Stateless dispatch engine.
//!
//! Every `execute` call is independent: resolve the scenario, validate the
//! parameter choice against the declared domain, invoke the provider, render
//! the result template. Either a complete result or a failure is produced,
//! never both. The engine holds only an `Arc` to the immutable registry, so it
//! is safe to call from concurrent requests.

use std::sync::Arc;
use std::time::Duration;

use crate::error::SimulationError;
use crate::provider::ResolveRequest;
use crate::scenario::{ScenarioRegistry, SimulationRequest, SimulationResult};

pub struct DispatchEngine {
    registry: Arc<ScenarioRegistry>,
}

impl DispatchEngine {
    pub fn new(registry: Arc<ScenarioRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ScenarioRegistry {
        &self.registry
    }

    /// Executes a request with no timeout. Table lookups and random draws
    /// complete immediately; only the inference provider can block, on the
    /// delegated model call.
    pub async fn execute(
        &self,
        request: &SimulationRequest,
    ) -> Result<SimulationResult, SimulationError> {
        self.dispatch(request, None).await
    }

    /// Executes a request, bounding the provider invocation. An elapsed
    /// deadline is reported as `InferenceTimeout`; validation errors are
    /// returned before the clock starts.
    pub async fn execute_with_timeout(
        &self,
        request: &SimulationRequest,
        timeout: Duration,
    ) -> Result<SimulationResult, SimulationError> {
        self.dispatch(request, Some(timeout)).await
    }

    async fn dispatch(
        &self,
        request: &SimulationRequest,
        timeout: Option<Duration>,
    ) -> Result<SimulationResult, SimulationError> {
        tracing::debug!(
            "dispatching scenario '{}' with parameter '{}'",
            request.scenario_name,
            request.parameter_choice
        );

        let descriptor = self.registry.get(&request.scenario_name)?;

        // Validate against the declared domain before touching the provider,
        // for every provider kind. Random providers would accept anything, but
        // an undeclared choice is still a caller bug.
        if !descriptor
            .parameter_choices
            .iter()
            .any(|choice| choice == &request.parameter_choice)
        {
            tracing::debug!(
                "rejecting undeclared parameter '{}' for scenario '{}'",
                request.parameter_choice,
                request.scenario_name
            );
            return Err(SimulationError::InvalidParameter {
                scenario: request.scenario_name.clone(),
                parameter: request.parameter_choice.clone(),
            });
        }

        let resolve = ResolveRequest {
            scenario: &request.scenario_name,
            parameter: &request.parameter_choice,
            image: request.image.as_ref(),
        };

        let value = match timeout {
            Some(limit) => match tokio::time::timeout(limit, descriptor.provider.resolve(resolve))
                .await
            {
                Ok(outcome) => outcome,
                Err(_) => {
                    tracing::warn!(
                        "provider for scenario '{}' exceeded {limit:?}",
                        request.scenario_name
                    );
                    return Err(SimulationError::InferenceTimeout(limit));
                }
            },
            None => descriptor.provider.resolve(resolve).await,
        }
        .map_err(|e| {
            tracing::warn!(
                "provider failed for scenario '{}': {e}",
                request.scenario_name
            );
            e
        })?;

        let rendered_text = descriptor.render(&request.parameter_choice, &value);
        Ok(SimulationResult {
            scenario_name: request.scenario_name.clone(),
            parameter_choice: request.parameter_choice.clone(),
            value,
            rendered_text,
        })
    }
}
