//! Dataset file adapter - Reads a dataset document from YAML or JSON.
//!
//! The document mirrors [`Dataset`]: `alternatives`, `criteria`, `weights`,
//! `criteria_types` and `decision_matrix`. Weights are taken as written;
//! rescaling happens when the dataset is handed to the engine.

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::domain::saw::Dataset;

/// Errors that can occur while reading a dataset file.
#[derive(Debug, Error)]
pub enum DatasetFileError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported dataset file extension: {0} (expected .yaml, .yml or .json)")]
    UnsupportedExtension(String),

    #[error("Invalid YAML dataset: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid JSON dataset: {0}")]
    Json(#[from] serde_json::Error),
}

/// Document formats a dataset can be read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    Yaml,
    Json,
}

impl DatasetFormat {
    /// Detects the format from a path's extension.
    pub fn from_path(path: &Path) -> Result<Self, DatasetFileError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "yaml" | "yml" => Ok(DatasetFormat::Yaml),
            "json" => Ok(DatasetFormat::Json),
            _ => Err(DatasetFileError::UnsupportedExtension(extension)),
        }
    }
}

/// Parses a dataset document.
pub fn parse_dataset(content: &str, format: DatasetFormat) -> Result<Dataset, DatasetFileError> {
    let dataset = match format {
        DatasetFormat::Yaml => serde_yaml::from_str(content)?,
        DatasetFormat::Json => serde_json::from_str(content)?,
    };
    Ok(dataset)
}

/// Reads a dataset file, choosing the parser by extension.
pub fn load_dataset(path: &Path) -> Result<Dataset, DatasetFileError> {
    let format = DatasetFormat::from_path(path)?;
    let content = fs::read_to_string(path).map_err(|source| DatasetFileError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let dataset = parse_dataset(&content, format)?;

    debug!(
        path = %path.display(),
        alternatives = dataset.alternative_count(),
        criteria = dataset.criterion_count(),
        "Dataset file loaded"
    );

    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::CriterionType;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const JSON: &str = r#"{
        "alternatives": ["A1", "A2"],
        "criteria": ["C1", "C2"],
        "weights": [3, 1],
        "criteria_types": ["benefit", "cost"],
        "decision_matrix": [[80, 20], [60, 40]]
    }"#;

    #[test]
    fn format_detection_by_extension() {
        assert_eq!(
            DatasetFormat::from_path(Path::new("data.YML")).unwrap(),
            DatasetFormat::Yaml
        );
        assert_eq!(
            DatasetFormat::from_path(Path::new("data.json")).unwrap(),
            DatasetFormat::Json
        );
        assert!(matches!(
            DatasetFormat::from_path(Path::new("data.xlsx")),
            Err(DatasetFileError::UnsupportedExtension(ext)) if ext == "xlsx"
        ));
    }

    #[test]
    fn json_weights_are_kept_as_written() {
        let dataset = parse_dataset(JSON, DatasetFormat::Json).unwrap();
        assert_eq!(dataset.weights, vec![3.0, 1.0]);
        assert_eq!(dataset.criteria_types[1], CriterionType::Cost);
    }

    #[test]
    fn load_reads_file_from_disk() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(JSON.as_bytes()).unwrap();

        let dataset = load_dataset(file.path()).unwrap();
        assert_eq!(dataset.alternatives, vec!["A1", "A2"]);
    }

    #[test]
    fn load_reports_missing_file() {
        let result = load_dataset(Path::new("/nonexistent/dataset.yaml"));
        assert!(matches!(result, Err(DatasetFileError::Io { .. })));
    }

    #[test]
    fn malformed_yaml_is_rejected() {
        let mut file: NamedTempFile = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(b"alternatives: [A1\n").unwrap();
        assert!(matches!(load_dataset(file.path()), Err(DatasetFileError::Yaml(_))));
    }
}
