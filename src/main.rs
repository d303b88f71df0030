//! `saw-engine` - Scores a dataset file and reports ranking stability.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use saw_engine::adapters::terminal::{
    render_ranking_table, render_sensitivity_table, render_stability_summary,
};
use saw_engine::adapters::{
    exporter_for, load_dataset, resolve_filename, sensitivity_prefix, DatasetFileError,
    LocalExportStorage,
};
use saw_engine::config::{AppConfig, ConfigError, LoggingConfig};
use saw_engine::domain::foundation::{SawError, ValidationError};
use saw_engine::domain::saw::{Dataset, DatasetValidator, SawEngine};
use saw_engine::ports::{ExportError, ExportFormat, ExportedDocument};

#[derive(Debug, Parser)]
#[command(
    name = "saw-engine",
    about = "Rank alternatives with Simple Additive Weighting and test weight sensitivity"
)]
struct Cli {
    /// Dataset file (.yaml, .yml or .json)
    dataset: PathBuf,

    /// Criterion to perturb, by name or 0-based index (default: first)
    criterion: Option<String>,

    /// Half-width of the weight perturbation (default from config)
    range: Option<f64>,

    /// Write the ranking as CSV
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write the sensitivity run as CSV
    #[arg(long = "sensitivity-csv")]
    sensitivity_csv: Option<PathBuf>,

    /// Write all calculation steps as JSON
    #[arg(long = "steps-json")]
    steps_json: Option<PathBuf>,
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    DatasetFile(#[from] DatasetFileError),

    #[error("Invalid dataset: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Engine(#[from] SawError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("Unknown criterion: {0}")]
    UnknownCriterion(String),
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.log_level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if logging.log_json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn validate_dataset(dataset: &Dataset) -> Result<(), ValidationError> {
    DatasetValidator::validate_complete(
        &dataset.alternatives,
        &dataset.criteria,
        &dataset.weights,
        &dataset.decision_matrix,
        &dataset.criteria_types,
    )
}

fn resolve_criterion(dataset: &Dataset, requested: Option<&str>) -> Result<usize, AppError> {
    let Some(requested) = requested else {
        return Ok(0);
    };
    if let Some(index) = dataset.criterion_index(requested.trim()) {
        return Ok(index);
    }
    match requested.trim().parse::<usize>() {
        Ok(index) if index < dataset.criterion_count() => Ok(index),
        _ => Err(AppError::UnknownCriterion(requested.to_string())),
    }
}

fn write_export(
    target: &Path,
    content: String,
    format: ExportFormat,
    prefix: &str,
    config: &AppConfig,
) -> Result<PathBuf, AppError> {
    let requested = target.file_name().and_then(|n| n.to_str());
    let filename = resolve_filename(requested, prefix, &config.export.date_format, format)?;
    let directory = target
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let document = ExportedDocument::new(content, format, &filename);
    Ok(LocalExportStorage::new(directory).write(&document)?)
}

fn run(cli: Cli) -> Result<(), AppError> {
    let config = AppConfig::load_validated()?;
    init_tracing(&config.logging);

    let dataset = load_dataset(&cli.dataset)?;
    validate_dataset(&dataset)?;

    let weight_range = match cli.range {
        Some(range) => DatasetValidator::validate_sensitivity_range(range)?,
        None => config.analysis.default_weight_range,
    };
    let criterion_index = resolve_criterion(&dataset, cli.criterion.as_deref())?;

    let mut engine = SawEngine::with_settings(config.analysis.engine_settings());
    engine.load(dataset);

    let ranking = engine.score()?.clone();
    println!("{}", render_ranking_table(&ranking));

    let records = engine.analyze(criterion_index, weight_range)?.to_vec();
    let report = engine.calculate_stability(&records);
    let criterion = engine.dataset().criteria[criterion_index].clone();

    println!(
        "{}",
        render_sensitivity_table(&records, report.original_winner.as_deref())
    );
    println!("{}", render_stability_summary(&criterion, &report));

    info!(
        criterion = %criterion,
        weight_range,
        stability = report.stability_percent,
        level = %report.level,
        "Analysis complete"
    );

    if let Some(target) = &cli.csv {
        let content = exporter_for(ExportFormat::Csv).export_ranking(&ranking)?;
        let prefix = &config.export.filename_prefix;
        let path = write_export(target, content, ExportFormat::Csv, prefix, &config)?;
        println!("Ranking written to {}", path.display());
    }

    if let Some(target) = &cli.sensitivity_csv {
        let content =
            exporter_for(ExportFormat::Csv).export_sensitivity(&criterion, &records, &report)?;
        let prefix = sensitivity_prefix(&criterion);
        let path = write_export(target, content, ExportFormat::Csv, &prefix, &config)?;
        println!("Sensitivity run written to {}", path.display());
    }

    if let Some(target) = &cli.steps_json {
        let steps = engine.calculation_steps()?;
        let content = exporter_for(ExportFormat::Json).export_steps(&steps)?;
        let prefix = &config.export.filename_prefix;
        let path = write_export(target, content, ExportFormat::Json, prefix, &config)?;
        println!("Calculation steps written to {}", path.display());
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "saw-engine failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
