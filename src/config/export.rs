//! Export configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Settings for generated export filenames
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Prepended to generated filenames
    #[serde(default = "default_filename_prefix")]
    pub filename_prefix: String,

    /// `chrono` format string for the timestamp in generated filenames
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl ExportConfig {
    /// Validate export configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.date_format.trim().is_empty() {
            return Err(ValidationError::EmptyDateFormat);
        }
        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            filename_prefix: default_filename_prefix(),
            date_format: default_date_format(),
        }
    }
}

fn default_filename_prefix() -> String {
    "saw_results_".to_string()
}

fn default_date_format() -> String {
    "%Y%m%d_%H%M%S".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_config_defaults() {
        let config = ExportConfig::default();
        assert_eq!(config.filename_prefix, "saw_results_");
        assert_eq!(config.date_format, "%Y%m%d_%H%M%S");
        assert!(config.validate().is_ok());
    }
}
