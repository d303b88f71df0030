//! End-to-end tests over the public API: dataset file in, ranking,
//! sensitivity and exports out.

use std::io::Write;

use saw_engine::adapters::{exporter_for, load_dataset, LocalExportStorage};
use saw_engine::domain::foundation::{CriterionType, EngineStatus, SawError};
use saw_engine::domain::saw::{
    Dataset, DatasetValidator, SawEngine, StabilityLevel, DEFAULT_WEIGHT_RANGE,
};
use saw_engine::ports::{ExportFormat, ExportedDocument};

const LAPTOPS: &str = r#"
alternatives: [Aurora, Breeze, Comet]
criteria: [Price, Performance, Battery]
weights: [4, 4, 2]
criteria_types: [cost, benefit, benefit]
decision_matrix:
  - [1200, 90, 8]
  - [800, 70, 10]
  - [1000, 80, 6]
"#;

fn write_dataset(content: &str, suffix: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn loaded_engine() -> SawEngine {
    let file = write_dataset(LAPTOPS, ".yaml");
    let dataset = load_dataset(file.path()).unwrap();
    let mut engine = SawEngine::new();
    engine.load(dataset);
    engine
}

#[test]
fn dataset_file_passes_validation_and_weights_are_rescaled() {
    let file = write_dataset(LAPTOPS, ".yaml");
    let dataset = load_dataset(file.path()).unwrap();

    // Raw weights above 1 are rejected by the validator; only rescaled ones pass.
    assert!(DatasetValidator::validate_complete(
        &dataset.alternatives,
        &dataset.criteria,
        &dataset.weights,
        &dataset.decision_matrix,
        &dataset.criteria_types,
    )
    .is_err());

    let mut engine = SawEngine::new();
    engine.load(dataset);
    assert_eq!(engine.dataset().weights, vec![0.4, 0.4, 0.2]);
    assert!(DatasetValidator::validate_complete(
        &engine.dataset().alternatives,
        &engine.dataset().criteria,
        &engine.dataset().weights,
        &engine.dataset().decision_matrix,
        &engine.dataset().criteria_types,
    )
    .is_ok());
}

#[test]
fn full_run_ranks_and_assesses_stability() {
    let mut engine = loaded_engine();

    // Price (cost): 800/1200, 1, 0.8. Performance: 1, 7/9, 8/9. Battery: 0.8, 1, 0.6.
    let ranking = engine.score().unwrap().clone();
    let names: Vec<&str> = ranking.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Breeze", "Aurora", "Comet"]);

    let records = engine.analyze(0, DEFAULT_WEIGHT_RANGE).unwrap().to_vec();
    assert_eq!(records.len(), 21);
    assert_eq!(engine.status(), EngineStatus::SensitivityComputed);

    let report = engine.calculate_stability(&records);
    assert_eq!(report.original_winner.as_deref(), Some("Breeze"));
    assert!(report.stability_percent > 0.0 && report.stability_percent <= 100.0);
    assert_eq!(report.winners.len(), records.len());
}

#[test]
fn heavy_performance_weight_flips_the_winner() {
    let mut engine = loaded_engine();
    engine.score().unwrap();

    let records = engine.analyze(1, 0.4).unwrap().to_vec();
    let last = records.last().unwrap();
    assert!(last.new_weight > 0.79);
    assert_eq!(last.winner, "Aurora");

    let report = engine.stability();
    assert!(report.distinct_winners().contains(&"Aurora"));
    assert!(report.level < StabilityLevel::VeryStable);
}

#[test]
fn scenario_two_by_two_end_to_end() {
    let mut engine = SawEngine::new();
    engine.load(
        Dataset::builder()
            .alternatives(vec!["A1", "A2"])
            .criterion("C1", 0.5, CriterionType::Benefit)
            .criterion("C2", 0.5, CriterionType::Cost)
            .row(vec![80.0, 20.0])
            .row(vec![60.0, 40.0])
            .build(),
    );

    let steps = engine.calculation_steps().unwrap();
    assert_eq!(steps.normalized_matrix.rows(), &[vec![1.0, 1.0], vec![0.75, 0.5]]);
    assert_eq!(steps.scores.winner().unwrap().score, 1.0);

    let records = engine.analyze(0, 0.2).unwrap().to_vec();
    let report = engine.calculate_stability(&records);
    assert_eq!(report.stability_percent, 100.0);
    assert_eq!(report.level, StabilityLevel::VeryStable);
}

#[test]
fn analyze_before_scoring_fails_without_side_effects() {
    let mut engine = loaded_engine();
    assert_eq!(engine.analyze(0, 0.2).unwrap_err(), SawError::NoResults);
    assert_eq!(engine.status(), EngineStatus::DataSet);
    assert!(engine.last_sensitivity().is_none());
}

#[test]
fn exports_are_written_to_disk() {
    let mut engine = loaded_engine();
    let ranking = engine.score().unwrap().clone();
    let records = engine.analyze(2, 0.1).unwrap().to_vec();
    let report = engine.calculate_stability(&records);
    let steps = engine.calculation_steps().unwrap();

    let dir = tempfile::TempDir::new().unwrap();
    let storage = LocalExportStorage::new(dir.path());

    let csv = exporter_for(ExportFormat::Csv).export_ranking(&ranking).unwrap();
    let ranking_path = storage
        .write(&ExportedDocument::new(csv, ExportFormat::Csv, "ranking"))
        .unwrap();
    let written = std::fs::read_to_string(ranking_path).unwrap();
    assert!(written.starts_with("Rank,Alternative,Score\n1,Breeze,"));

    let sensitivity = exporter_for(ExportFormat::Csv)
        .export_sensitivity("Battery", &records, &report)
        .unwrap();
    assert!(sensitivity.starts_with("# Sensitivity analysis - criterion: Battery\n"));

    let json = exporter_for(ExportFormat::Json).export_steps(&steps).unwrap();
    let path = storage
        .write(&ExportedDocument::new(json, ExportFormat::Json, "steps"))
        .unwrap();
    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(value["criteria"][0], "Price");
    assert_eq!(value["ranking"][0]["alternative"], "Breeze");
}

#[test]
fn json_dataset_files_are_supported() {
    let json = r#"{
        "alternatives": ["X", "Y"],
        "criteria": ["Cost"],
        "weights": [1],
        "criteria_types": ["cost"],
        "decision_matrix": [[5], [10]]
    }"#;
    let file = write_dataset(json, ".json");
    let mut engine = SawEngine::new();
    engine.load(load_dataset(file.path()).unwrap());

    let ranking = engine.score().unwrap();
    assert_eq!(ranking.winner().unwrap().name, "X");
    assert_eq!(ranking.entries()[1].score, 0.5);
}
