//! CSV Result Exporter - Rankings and sensitivity runs as comma-separated values.

use std::io::Write;

use crate::domain::saw::{CalculationSteps, RankedResult, SensitivityRecord, StabilityReport};
use crate::ports::{ExportError, ExportFormat, ResultExporter};

/// Renders engine output as CSV.
///
/// - Ranking: `Rank, Alternative, Score` with 1-based ranks
/// - Sensitivity: `#` summary lines, then `Change, NewWeight, Winner, Score`
/// - Steps: titled sections for the original, normalized and weighted matrices
///   followed by the criteria and the ranking
#[derive(Debug, Clone, Default)]
pub struct CsvResultExporter;

impl CsvResultExporter {
    pub fn new() -> Self {
        Self
    }

    fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String, ExportError> {
        let data = writer
            .into_inner()
            .map_err(|e| ExportError::EncodingFailed(e.to_string()))?;
        Ok(String::from_utf8_lossy(&data).to_string())
    }

    fn write_matrix(
        writer: &mut csv::Writer<Vec<u8>>,
        title: &str,
        steps: &CalculationSteps,
        rows: &[Vec<f64>],
    ) -> Result<(), ExportError> {
        writer.write_record([title]).map_err(encoding)?;
        let mut header = vec!["Alternative".to_string()];
        header.extend(steps.criteria.iter().cloned());
        writer.write_record(&header).map_err(encoding)?;

        for (name, row) in steps.alternatives.iter().zip(rows) {
            let mut record = vec![name.clone()];
            record.extend(row.iter().map(|v| format!("{v:.4}")));
            writer.write_record(&record).map_err(encoding)?;
        }
        Ok(())
    }

    fn write_ranking(
        writer: &mut csv::Writer<Vec<u8>>,
        ranking: &RankedResult,
    ) -> Result<(), ExportError> {
        writer
            .write_record(["Rank", "Alternative", "Score"])
            .map_err(encoding)?;
        for (i, entry) in ranking.iter().enumerate() {
            writer
                .write_record([
                    (i + 1).to_string(),
                    entry.name.clone(),
                    format!("{:.4}", entry.score),
                ])
                .map_err(encoding)?;
        }
        Ok(())
    }
}

fn encoding(err: csv::Error) -> ExportError {
    ExportError::EncodingFailed(err.to_string())
}

impl ResultExporter for CsvResultExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Csv
    }

    fn export_ranking(&self, ranking: &RankedResult) -> Result<String, ExportError> {
        if ranking.is_empty() {
            return Err(ExportError::NothingToExport("results"));
        }
        let mut writer = csv::Writer::from_writer(vec![]);
        Self::write_ranking(&mut writer, ranking)?;
        Self::finish(writer)
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

        let mut preamble = Vec::new();
        writeln!(preamble, "# Sensitivity analysis - criterion: {criterion}")?;
        writeln!(
            preamble,
            "# Stability: {:.1}% ({})",
            report.stability_percent, report.level
        )?;
        writeln!(
            preamble,
            "# Original winner: {}",
            report.original_winner.as_deref().unwrap_or("-")
        )?;

        let mut writer = csv::Writer::from_writer(preamble);
        writer
            .write_record(["Change", "NewWeight", "Winner", "Score"])
            .map_err(encoding)?;
        for record in records {
            writer
                .write_record([
                    format!("{:.2}", record.change),
                    format!("{:.2}", record.new_weight),
                    record.winner.clone(),
                    format!("{:.4}", record.score),
                ])
                .map_err(encoding)?;
        }
        Self::finish(writer)
    }

    fn export_steps(&self, steps: &CalculationSteps) -> Result<String, ExportError> {
        if steps.scores.is_empty() {
            return Err(ExportError::NothingToExport("calculation steps"));
        }

        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_writer(vec![]);

        Self::write_matrix(&mut writer, "Original Matrix", steps, &steps.original_matrix)?;
        Self::write_matrix(
            &mut writer,
            "Normalized Matrix",
            steps,
            steps.normalized_matrix.rows(),
        )?;
        Self::write_matrix(&mut writer, "Weighted Matrix", steps, &steps.weighted_matrix())?;

        writer.write_record(["Criteria"]).map_err(encoding)?;
        writer
            .write_record(["Criterion", "Weight", "Type"])
            .map_err(encoding)?;
        for ((name, weight), kind) in steps
            .criteria
            .iter()
            .zip(&steps.weights)
            .zip(&steps.criteria_types)
        {
            writer
                .write_record([name.clone(), format!("{weight:.4}"), kind.to_string()])
                .map_err(encoding)?;
        }

        writer.write_record(["Ranking"]).map_err(encoding)?;
        Self::write_ranking(&mut writer, &steps.scores)?;
        Self::finish(writer)
    }
}
