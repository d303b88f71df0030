//! Export adapters - Implementations of `ResultExporter` and export file handling.
//!
//! - `CsvResultExporter` - Rankings, sensitivity runs and steps as CSV
//! - `JsonResultExporter` - The same documents as pretty-printed JSON
//! - `LocalExportStorage` - Atomic writes of exported documents
//! - `filename` helpers - Sanitized and timestamped export filenames

mod csv_exporter;
mod filename;
mod json_exporter;
mod local_export_storage;

pub use csv_exporter::CsvResultExporter;
pub use filename::{
    default_filename, resolve_filename, sanitize_filename, sensitivity_prefix, timestamped_filename,
};
pub use json_exporter::JsonResultExporter;
pub use local_export_storage::LocalExportStorage;

use crate::ports::{ExportFormat, ResultExporter};

/// Returns the exporter for a format.
pub fn exporter_for(format: ExportFormat) -> Box<dyn ResultExporter> {
    match format {
        ExportFormat::Csv => Box::new(CsvResultExporter::new()),
        ExportFormat::Json => Box::new(JsonResultExporter::new()),
    }
}
