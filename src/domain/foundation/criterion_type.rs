//! CriterionType enum: whether higher or lower raw values are preferred.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Direction of preference for a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CriterionType {
    /// Higher raw values are better.
    #[default]
    Benefit,
    /// Lower raw values are better.
    Cost,
}

impl CriterionType {
    /// Returns the canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            CriterionType::Benefit => "benefit",
            CriterionType::Cost => "cost",
        }
    }

    /// Returns true for benefit criteria.
    pub fn is_benefit(&self) -> bool {
        matches!(self, CriterionType::Benefit)
    }
}

impl fmt::Display for CriterionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CriterionType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "benefit" => Ok(CriterionType::Benefit),
            "cost" => Ok(CriterionType::Cost),
            _ => Err(ValidationError::invalid_format(
                "criterion_type",
                format!("must be one of: benefit, cost (got '{}')", s),
            )),
        }
    }
}
