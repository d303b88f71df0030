//! JSON Result Exporter - Pretty-printed JSON documents.

use serde::Serialize;

use crate::domain::saw::{
    CalculationSteps, RankedResult, SensitivityRecord, StabilityReport,
};
use crate::ports::{ExportError, ExportFormat, ResultExporter};

/// Renders engine output as pretty-printed JSON.
#[derive(Debug, Clone, Default)]
pub struct JsonResultExporter;

impl JsonResultExporter {
    pub fn new() -> Self {
        Self
    }
}

#[derive(Serialize)]
struct RankingEntry<'a> {
    rank: usize,
    alternative: &'a str,
    score: f64,
}

#[derive(Serialize)]
struct SensitivityDocument<'a> {
    criterion: &'a str,
    stability: &'a StabilityReport,
    records: &'a [SensitivityRecord],
}

#[derive(Serialize)]
struct StepsDocument<'a> {
    #[serde(flatten)]
    steps: &'a CalculationSteps,
    weighted_matrix: Vec<Vec<f64>>,
    ranking: Vec<RankingEntry<'a>>,
}

fn ranking_entries(ranking: &RankedResult) -> Vec<RankingEntry<'_>> {
    ranking
        .iter()
        .enumerate()
        .map(|(i, entry)| RankingEntry {
            rank: i + 1,
            alternative: &entry.name,
            score: entry.score,
        })
        .collect()
}

fn render<T: Serialize + ?Sized>(value: &T) -> Result<String, ExportError> {
    serde_json::to_string_pretty(value).map_err(|e| ExportError::EncodingFailed(e.to_string()))
}

impl ResultExporter for JsonResultExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Json
    }

    fn export_ranking(&self, ranking: &RankedResult) -> Result<String, ExportError> {
        if ranking.is_empty() {
            return Err(ExportError::NothingToExport("results"));
        }
        render(&ranking_entries(ranking))
    }

    fn export_sensitivity(
        &self,
        criterion: &str,
        records: &[SensitivityRecord],
        report: &StabilityReport,
    ) -> Result<String, ExportError> {
        if records.is_empty() {
            return Err(ExportError::NothingToExport("sensitivity results"));
        }
        render(&SensitivityDocument {
            criterion,
            stability: report,
            records,
        })
    }

    fn export_steps(&self, steps: &CalculationSteps) -> Result<String, ExportError> {
        if steps.scores.is_empty() {
            return Err(ExportError::NothingToExport("calculation steps"));
        }
        render(&StepsDocument {
            steps,
            weighted_matrix: steps.weighted_matrix(),
            ranking: ranking_entries(&steps.scores),
        })
    }
}
