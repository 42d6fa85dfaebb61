//! Built-in scenario catalog.
//!
//! This is the single source of truth for the demo's ten scenarios: their
//! parameter domains, outcome tables, random ranges, and result templates.
//! Outcome values are illustrative constants or uniform draws, not models of
//! biological processes.

use std::sync::Arc;

use crate::error::SimulationError;
use crate::provider::{
    BoundedRandomProvider, ImageClassifier, InferenceProvider, TableProvider,
};
use crate::scenario::registry::ScenarioRegistry;
use crate::scenario::types::ScenarioDescriptor;

/// Builds the registry with all built-in scenarios, in sidebar order, and runs
/// the startup self-check. The classifier is the externally supplied model
/// backing "AI in Diagnostics"; the catalog never loads model files itself.
pub fn builtin_registry(
    classifier: Arc<dyn ImageClassifier>,
) -> Result<ScenarioRegistry, SimulationError> {
    let mut registry = ScenarioRegistry::new();

    registry.register(ScenarioDescriptor::new(
        "Personalized Medicine",
        &["Marker A", "Marker B", "Marker C"],
        Arc::new(TableProvider::from_entries(&[
            ("Marker A", 0.8),
            ("Marker B", 0.5),
            ("Marker C", 0.2),
        ])),
        "Predicted Drug Response for {parameter}: {value}",
    ))?;

    registry.register(ScenarioDescriptor::new(
        "CRISPR-Cas9 Gene Editing",
        &["Gene 1", "Gene 2", "Gene 3"],
        Arc::new(TableProvider::from_entries(&[
            ("Gene 1", 0.95),
            ("Gene 2", 0.75),
            ("Gene 3", 0.65),
        ])),
        "Predicted Editing Success for {parameter}: {value}",
    ))?;

    registry.register(ScenarioDescriptor::new(
        "Cancer Immunotherapy",
        &["Checkpoint Inhibitor", "CAR-T Cells", "Cancer Vaccine"],
        Arc::new(TableProvider::from_entries(&[
            ("Checkpoint Inhibitor", 0.7),
            ("CAR-T Cells", 0.85),
            ("Cancer Vaccine", 0.6),
        ])),
        "Predicted Response Rate for {parameter}: {value}",
    ))?;

    registry.register(ScenarioDescriptor::new(
        "Organoids and Tissue Engineering",
        &["Liver", "Kidney", "Heart"],
        Arc::new(TableProvider::from_entries(&[
            ("Liver", 0.9),
            ("Kidney", 0.7),
            ("Heart", 0.8),
        ])),
        "Predicted Growth Success for {parameter} Organoids: {value}",
    ))?;

    registry.register(ScenarioDescriptor::new(
        "AI in Diagnostics",
        &["Uploaded Image"],
        Arc::new(InferenceProvider::new_with_classifier(classifier)),
        "Predicted Class: {value}",
    ))?;

    registry.register(ScenarioDescriptor::new(
        "Telemedicine and Remote Monitoring",
        &["Heart Rate", "Blood Pressure", "Blood Sugar"],
        Arc::new(BoundedRandomProvider::new(120, 180).with_range("Heart Rate", 60, 100)),
        "Simulated {parameter}: {value}",
    ))?;

    registry.register(ScenarioDescriptor::new(
        "3D Printing of Medical Devices",
        &["Prosthetic Hand", "Hip Implant", "Dental Crown"],
        Arc::new(TableProvider::from_entries(&[
            ("Prosthetic Hand", 0.95),
            ("Hip Implant", 0.85),
            ("Dental Crown", 0.9),
        ])),
        "Predicted Printing Success for {parameter}: {value}",
    ))?;

    registry.register(ScenarioDescriptor::new(
        "Nanomedicine",
        &["Chemotherapy", "Antibiotic", "Pain Relief"],
        Arc::new(TableProvider::from_entries(&[
            ("Chemotherapy", 0.8),
            ("Antibiotic", 0.7),
            ("Pain Relief", 0.9),
        ])),
        "Predicted Delivery Efficiency for {parameter}: {value}",
    ))?;

    registry.register(ScenarioDescriptor::new(
        "Stem Cell Therapy",
        &["Spinal Cord Injury", "Heart Disease", "Diabetes"],
        Arc::new(TableProvider::from_entries(&[
            ("Spinal Cord Injury", 0.6),
            ("Heart Disease", 0.75),
            ("Diabetes", 0.65),
        ])),
        "Predicted Success Rate for {parameter} Stem Cell Therapy: {value}",
    ))?;

    registry.register(ScenarioDescriptor::new(
        "Microbiome Research",
        &["Gut", "Skin", "Oral"],
        Arc::new(TableProvider::from_entries(&[
            ("Gut", 0.85),
            ("Skin", 0.75),
            ("Oral", 0.8),
        ])),
        "Predicted Health Impact for {parameter} Microbiome: {value}",
    ))?;

    registry.verify()?;
    Ok(registry)
}
