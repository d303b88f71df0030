//! Dataset Validator - Input checks that must pass before data reaches the engine.
//!
//! The engine trusts its inputs. Front ends run these checks first so that
//! names are usable, weights and scores are in range, and shapes agree.

use crate::domain::foundation::{CriterionType, ValidationError};

/// Minimum length of an alternative or criterion name, after trimming.
pub const MIN_NAME_LENGTH: usize = 2;

/// Maximum length of an alternative name, after trimming.
pub const MAX_ALTERNATIVE_NAME_LENGTH: usize = 50;

/// Maximum length of a criterion name, after trimming.
pub const MAX_CRITERION_NAME_LENGTH: usize = 30;

/// Validation functions for dataset input.
pub struct DatasetValidator;

impl DatasetValidator {
    /// Checks an alternative name.
    pub fn validate_alternative_name(name: &str) -> Result<(), ValidationError> {
        Self::validate_name("alternative", name, MAX_ALTERNATIVE_NAME_LENGTH)
    }

    /// Checks a criterion name.
    pub fn validate_criterion_name(name: &str) -> Result<(), ValidationError> {
        Self::validate_name("criterion", name, MAX_CRITERION_NAME_LENGTH)
    }

    fn validate_name(field: &str, name: &str, max: usize) -> Result<(), ValidationError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field(field));
        }
        let length = trimmed.chars().count();
        if length < MIN_NAME_LENGTH {
            return Err(ValidationError::TooShort {
                field: field.to_string(),
                min: MIN_NAME_LENGTH,
            });
        }
        if length > max {
            return Err(ValidationError::TooLong {
                field: field.to_string(),
                max,
            });
        }
        Ok(())
    }

    /// Checks that a weight is in `(0, 1]`.
    pub fn validate_weight(weight: f64) -> Result<f64, ValidationError> {
        if !weight.is_finite() || weight <= 0.0 || weight > 1.0 {
            return Err(ValidationError::out_of_range("weight", 0.0, 1.0, weight));
        }
        Ok(weight)
    }

    /// Parses and checks a weight from text.
    pub fn parse_weight(raw: &str) -> Result<f64, ValidationError> {
        Self::validate_weight(Self::parse_number("weight", raw)?)
    }

    /// Checks that a decision matrix value is a non-negative number.
    pub fn validate_matrix_value(value: f64) -> Result<f64, ValidationError> {
        if !value.is_finite() || value < 0.0 {
            return Err(ValidationError::out_of_range(
                "matrix value",
                0.0,
                f64::MAX,
                value,
            ));
        }
        Ok(value)
    }

    /// Parses and checks a matrix value from text.
    pub fn parse_matrix_value(raw: &str) -> Result<f64, ValidationError> {
        Self::validate_matrix_value(Self::parse_number("matrix value", raw)?)
    }

    /// Parses a criterion type (`benefit` or `cost`).
    pub fn parse_criterion_type(raw: &str) -> Result<CriterionType, ValidationError> {
        raw.parse()
    }

    /// Checks that a sensitivity range is in `(0, 1]`.
    pub fn validate_sensitivity_range(range: f64) -> Result<f64, ValidationError> {
        if !range.is_finite() || range <= 0.0 || range > 1.0 {
            return Err(ValidationError::out_of_range("sensitivity range", 0.0, 1.0, range));
        }
        Ok(range)
    }

    /// Returns true if `candidate` matches an existing name after trimming.
    pub fn is_duplicate(existing: &[String], candidate: &str) -> bool {
        let candidate = candidate.trim();
        existing.iter().any(|name| name.trim() == candidate)
    }

    /// Checks a complete dataset before it is handed to the engine.
    ///
    /// Verifies names, duplicates, weight ranges, matrix values and that
    /// every count agrees with the alternative and criterion lists.
    pub fn validate_complete(
        alternatives: &[String],
        criteria: &[String],
        weights: &[f64],
        decision_matrix: &[Vec<f64>],
        criteria_types: &[CriterionType],
    ) -> Result<(), ValidationError> {
        if alternatives.is_empty() {
            return Err(ValidationError::empty_field("alternatives"));
        }
        if criteria.is_empty() {
            return Err(ValidationError::empty_field("criteria"));
        }

        Self::validate_names("alternatives", alternatives, Self::validate_alternative_name)?;
        Self::validate_names("criteria", criteria, Self::validate_criterion_name)?;

        if weights.len() != criteria.len() {
            return Err(ValidationError::invalid_format(
                "weights",
                format!("expected {} weights, got {}", criteria.len(), weights.len()),
            ));
        }
        for weight in weights {
            Self::validate_weight(*weight)?;
        }

        if criteria_types.len() != criteria.len() {
            return Err(ValidationError::invalid_format(
                "criteria_types",
                format!(
                    "expected {} criteria types, got {}",
                    criteria.len(),
                    criteria_types.len()
                ),
            ));
        }

        if decision_matrix.is_empty() {
            return Err(ValidationError::empty_field("decision_matrix"));
        }
        if decision_matrix.len() != alternatives.len() {
            return Err(ValidationError::invalid_format(
                "decision_matrix",
                format!(
                    "expected {} rows, got {}",
                    alternatives.len(),
                    decision_matrix.len()
                ),
            ));
        }
        for (i, row) in decision_matrix.iter().enumerate() {
            if row.len() != criteria.len() {
                return Err(ValidationError::invalid_format(
                    "decision_matrix",
                    format!(
                        "row {} has {} values, expected {}",
                        i + 1,
                        row.len(),
                        criteria.len()
                    ),
                ));
            }
            for value in row {
                Self::validate_matrix_value(*value)?;
            }
        }

        Ok(())
    }

    fn validate_names(
        field: &str,
        names: &[String],
        check: fn(&str) -> Result<(), ValidationError>,
    ) -> Result<(), ValidationError> {
        for (i, name) in names.iter().enumerate() {
            check(name)?;
            if Self::is_duplicate(&names[..i], name) {
                return Err(ValidationError::duplicate(field, name.trim()));
            }
        }
        Ok(())
    }

    fn parse_number(field: &str, raw: &str) -> Result<f64, ValidationError> {
        raw.trim()
            .parse::<f64>()
            .map_err(|_| ValidationError::invalid_format(field, "must be a number"))
    }
}
