//! Adapters - Implementations of port interfaces and outside-world I/O.
//!
//! - `export` - CSV/JSON result exporters and export file storage
//! - `dataset_file` - Dataset documents read from YAML or JSON
//! - `terminal` - Table rendering for the command line

pub mod dataset_file;
pub mod export;
pub mod terminal;

pub use dataset_file::{load_dataset, parse_dataset, DatasetFileError, DatasetFormat};
pub use export::{
    exporter_for, resolve_filename, sanitize_filename, sensitivity_prefix, CsvResultExporter,
    JsonResultExporter, LocalExportStorage,
};
