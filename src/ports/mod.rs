//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Export Ports
//!
//! - `ResultExporter` - Renders rankings, sensitivity runs and calculation steps

mod result_exporter;

pub use result_exporter::{ExportError, ExportFormat, ExportedDocument, ResultExporter};
