//! Minimal command-line presentation adapter for the simulation backend.
//!
//! Lists scenarios, runs one (scenario, parameter) request against the
//! built-in catalog, and prints the rendered result. No classifier model is
//! bundled; "AI in Diagnostics" reports the model as unavailable, which is the
//! honest answer for a host without one.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use medsim_lib::provider::{Classification, ImageClassifier, ImageTensor};
use medsim_lib::scenario::{builtin_registry, SimulationRequest};
use medsim_lib::{DispatchEngine, SimulationError};

/// Stand-in for a real model backend. Image decode and model loading belong to
/// a fuller host application, not this demo adapter.
struct UnavailableClassifier;

#[async_trait]
impl ImageClassifier for UnavailableClassifier {
    async fn classify(&self, _tensor: &ImageTensor) -> Result<Classification, SimulationError> {
        Err(SimulationError::ModelUnavailable(
            "no classifier model configured for this host".to_string(),
        ))
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    if let Err(error) = run().await {
        eprintln!("simulation failed: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let mut scenario: Option<String> = None;
    let mut parameter: Option<String> = None;
    let mut timeout_ms: Option<u64> = None;
    let mut list_only = false;
    let mut json_output = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            "--list" => list_only = true,
            "--json" => json_output = true,
            "--scenario" => {
                scenario = Some(args.next().ok_or("--scenario requires a value")?);
            }
            "--parameter" => {
                parameter = Some(args.next().ok_or("--parameter requires a value")?);
            }
            "--timeout-ms" => {
                let raw = args.next().ok_or("--timeout-ms requires a value")?;
                timeout_ms = Some(
                    raw.parse()
                        .map_err(|_| format!("invalid --timeout-ms value '{raw}'"))?,
                );
            }
            other => return Err(format!("unknown argument '{other}'. See --help")),
        }
    }

    let registry = builtin_registry(Arc::new(UnavailableClassifier)).map_err(|e| e.to_string())?;
    let engine = DispatchEngine::new(Arc::new(registry));

    if list_only {
        for name in engine.registry().list_names() {
            let descriptor = engine.registry().get(&name).map_err(|e| e.to_string())?;
            println!(
                "{name} [{}]: {}",
                descriptor.provider_kind(),
                descriptor.parameter_choices.join(", ")
            );
        }
        return Ok(());
    }

    let scenario = scenario.ok_or("--scenario is required (or use --list)")?;
    let descriptor = engine.registry().get(&scenario).map_err(|e| e.to_string())?;
    // Default to the first declared choice, like the selector widget would.
    let parameter = match parameter {
        Some(value) => value,
        None => descriptor.parameter_choices[0].clone(),
    };

    let request = SimulationRequest::new(&scenario, &parameter);
    let result = match timeout_ms {
        Some(ms) => {
            engine
                .execute_with_timeout(&request, Duration::from_millis(ms))
                .await
        }
        None => engine.execute(&request).await,
    }
    .map_err(|e| e.to_string())?;

    if json_output {
        let payload = serde_json::json!({
            "completed_at": Utc::now().to_rfc3339(),
            "result": result,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&payload).map_err(|e| e.to_string())?
        );
    } else {
        println!("{}", result.rendered_text);
    }
    Ok(())
}

fn print_help() {
    println!(
        r#"simulate - run one scenario simulation from the built-in catalog

Usage:
  simulate --list
  simulate --scenario <name> [--parameter <choice>] [--timeout-ms <n>] [--json]

Options:
  --list              List scenarios with their parameter choices
  --scenario <name>   Scenario to run (as printed by --list)
  --parameter <name>  Parameter choice; defaults to the scenario's first choice
  --timeout-ms <n>    Bound the provider invocation
  --json              Print the full result record as JSON
  -h, --help          Show this help"#
    );
}
