//! Result Exporter Port - Rendering of scoring output for files and downloads.
//!
//! The domain produces rankings, sensitivity runs and calculation snapshots.
//! Adapters (`CsvResultExporter`, `JsonResultExporter`) turn them into text.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::saw::{CalculationSteps, RankedResult, SensitivityRecord, StabilityReport};

/// Port for rendering engine output.
///
/// # Contract
///
/// Implementations must:
/// - Keep ranking order exactly as given (rank 1 first)
/// - Keep sensitivity records in step order
/// - Refuse to render empty results with `ExportError::NothingToExport`
pub trait ResultExporter {
    /// The format this exporter produces.
    fn format(&self) -> ExportFormat;

    /// Render a ranking.
    fn export_ranking(&self, ranking: &RankedResult) -> Result<String, ExportError>;

    /// Render a sensitivity run for one criterion, with its stability summary.
    fn export_sensitivity(
        &self,
        criterion: &str,
        records: &[SensitivityRecord],
        report: &StabilityReport,
    ) -> Result<String, ExportError>;

    /// Render a full calculation snapshot.
    fn export_steps(&self, steps: &CalculationSteps) -> Result<String, ExportError>;
}

/// Export formats supported by the adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// Comma-separated values.
    Csv,
    /// Pretty-printed JSON.
    Json,
}

impl ExportFormat {
    /// Get the MIME content type for this format.
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv; charset=utf-8",
            ExportFormat::Json => "application/json",
        }
    }

    /// Get the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Rendered output ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedDocument {
    /// The rendered content.
    pub content: String,
    /// The MIME content type.
    pub content_type: String,
    /// Filename including extension.
    pub filename: String,
    /// The format that was used.
    pub format: ExportFormat,
}

impl ExportedDocument {
    /// Create a document, appending the format's extension when missing.
    pub fn new(content: String, format: ExportFormat, filename: &str) -> Self {
        let suffix = format!(".{}", format.extension());
        let filename = if filename.ends_with(&suffix) {
            filename.to_string()
        } else {
            format!("{}{}", filename, suffix)
        };
        Self {
            content,
            content_type: format.content_type().to_string(),
            filename,
            format,
        }
    }
}

/// Errors that can occur during export.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ExportError {
    /// Unsupported export format requested.
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    /// Nothing was computed yet.
    #[error("No {0} to export")]
    NothingToExport(&'static str),

    /// Encoding the output failed.
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),

    /// Writing the output failed.
    #[error("I/O error during export: {0}")]
    IoError(String),
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::IoError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_parses_case_insensitively() {
        assert_eq!("CSV".parse::<ExportFormat>(), Ok(ExportFormat::Csv));
        assert_eq!(" json ".parse::<ExportFormat>(), Ok(ExportFormat::Json));
        assert_eq!(
            "xlsx".parse::<ExportFormat>(),
            Err(ExportError::UnsupportedFormat("xlsx".to_string()))
        );
    }

    #[test]
    fn format_metadata() {
        assert_eq!(ExportFormat::Csv.extension(), "csv");
        assert_eq!(ExportFormat::Json.content_type(), "application/json");
        assert_eq!(ExportFormat::Json.to_string(), "json");
    }

    #[test]
    fn document_appends_missing_extension() {
        let doc = ExportedDocument::new("a,b\n".to_string(), ExportFormat::Csv, "results");
        assert_eq!(doc.filename, "results.csv");
        assert_eq!(doc.content_type, "text/csv; charset=utf-8");

        let doc = ExportedDocument::new(String::new(), ExportFormat::Csv, "results.csv");
        assert_eq!(doc.filename, "results.csv");
    }

    #[test]
    fn nothing_to_export_message() {
        assert_eq!(
            ExportError::NothingToExport("results").to_string(),
            "No results to export"
        );
    }
}
