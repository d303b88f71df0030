//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors raised by the scoring engine when a precondition is violated.
///
/// Every variant is recoverable: the engine state is left exactly as it was
/// before the failing call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SawError {
    #[error("Decision matrix is empty")]
    EmptyMatrix,

    #[error("No data available for calculation")]
    NoData,

    #[error("No results available, calculate scores first")]
    NoResults,

    #[error("Shape mismatch in {what}: expected {expected}, got {actual}")]
    ShapeMismatch {
        what: String,
        expected: usize,
        actual: usize,
    },

    #[error("Criterion index {index} is out of range for {count} criteria")]
    InvalidCriterion { index: usize, count: usize },

    #[error("Weight range must be within 0..=1 with a step giving a bounded sweep, got {0}")]
    InvalidWeightRange(f64),
}

impl SawError {
    /// Creates a shape mismatch error.
    pub fn shape_mismatch(what: impl Into<String>, expected: usize, actual: usize) -> Self {
        SawError::ShapeMismatch {
            what: what.into(),
            expected,
            actual,
        }
    }

    /// Returns the stable error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            SawError::EmptyMatrix => ErrorCode::EmptyMatrix,
            SawError::NoData => ErrorCode::NoData,
            SawError::NoResults => ErrorCode::NoResults,
            SawError::ShapeMismatch { .. } => ErrorCode::ShapeMismatch,
            SawError::InvalidCriterion { .. } => ErrorCode::InvalidCriterion,
            SawError::InvalidWeightRange(_) => ErrorCode::InvalidWeightRange,
        }
    }
}

/// Errors produced while validating user-supplied dataset input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be at least {min} characters")]
    TooShort { field: String, min: usize },

    #[error("Field '{field}' must be at most {max} characters")]
    TooLong { field: String, max: usize },

    #[error("Field '{field}' must be within {min}..={max}, got {actual}")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        actual: f64,
    },

    #[error("Field '{field}' contains duplicate value '{value}'")]
    Duplicate { field: String, value: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, actual: f64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates a duplicate value validation error.
    pub fn duplicate(field: impl Into<String>, value: impl Into<String>) -> Self {
        ValidationError::Duplicate {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Returns the stable error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::EmptyField { .. } => ErrorCode::EmptyField,
            ValidationError::TooShort { .. } | ValidationError::TooLong { .. } => {
                ErrorCode::InvalidLength
            }
            ValidationError::OutOfRange { .. } => ErrorCode::OutOfRange,
            ValidationError::Duplicate { .. } => ErrorCode::Duplicate,
            ValidationError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    EmptyField,
    InvalidLength,
    OutOfRange,
    Duplicate,
    InvalidFormat,

    // Engine state errors
    EmptyMatrix,
    NoData,
    NoResults,

    // Shape errors
    ShapeMismatch,
    InvalidCriterion,
    InvalidWeightRange,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::InvalidLength => "INVALID_LENGTH",
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
            ErrorCode::Duplicate => "DUPLICATE",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::EmptyMatrix => "EMPTY_MATRIX",
            ErrorCode::NoData => "NO_DATA",
            ErrorCode::NoResults => "NO_RESULTS",
            ErrorCode::ShapeMismatch => "SHAPE_MISMATCH",
            ErrorCode::InvalidCriterion => "INVALID_CRITERION",
            ErrorCode::InvalidWeightRange => "INVALID_WEIGHT_RANGE",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saw_error_empty_matrix_displays_correctly() {
        assert_eq!(format!("{}", SawError::EmptyMatrix), "Decision matrix is empty");
    }

    #[test]
    fn saw_error_shape_mismatch_displays_correctly() {
        let err = SawError::shape_mismatch("weights", 3, 2);
        assert_eq!(
            format!("{}", err),
            "Shape mismatch in weights: expected 3, got 2"
        );
    }

    #[test]
    fn saw_error_maps_to_code() {
        assert_eq!(SawError::NoResults.code(), ErrorCode::NoResults);
        assert_eq!(
            SawError::InvalidCriterion { index: 4, count: 2 }.code(),
            ErrorCode::InvalidCriterion
        );
    }

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("alternative");
        assert_eq!(format!("{}", err), "Field 'alternative' cannot be empty");
    }

    #[test]
    fn validation_error_out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("weight", 0.0, 1.0, 1.5);
        assert_eq!(
            format!("{}", err),
            "Field 'weight' must be within 0..=1, got 1.5"
        );
    }

    #[test]
    fn validation_error_duplicate_maps_to_code() {
        let err = ValidationError::duplicate("criteria", "Price");
        assert_eq!(err.code(), ErrorCode::Duplicate);
        assert_eq!(
            format!("{}", err),
            "Field 'criteria' contains duplicate value 'Price'"
        );
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::ShapeMismatch), "SHAPE_MISMATCH");
        assert_eq!(format!("{}", ErrorCode::NoData), "NO_DATA");
    }
}
