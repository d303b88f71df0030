//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Sensitivity step must be within 0.001..=1, got {0}")]
    InvalidSensitivityStep(f64),

    #[error("Default weight range must be in (0, 1], got {0}")]
    InvalidWeightRange(f64),

    #[error("Stability thresholds must descend within 0..=100")]
    InvalidThresholds,

    #[error("Log level must not be empty")]
    EmptyLogLevel,

    #[error("Export date format must not be empty")]
    EmptyDateFormat,
}
