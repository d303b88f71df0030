//! Calculation Steps - Read-only snapshot of every stage of a SAW run.

use serde::{Deserialize, Serialize};

use super::{NormalizedMatrix, RankedResult};
use crate::domain::foundation::CriterionType;

/// Everything a presentation or export layer needs to show how scores came about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationSteps {
    pub original_matrix: Vec<Vec<f64>>,
    pub normalized_matrix: NormalizedMatrix,
    pub weights: Vec<f64>,
    pub scores: RankedResult,
    pub alternatives: Vec<String>,
    pub criteria: Vec<String>,
    pub criteria_types: Vec<CriterionType>,
}

impl CalculationSteps {
    /// Per-criterion contribution of each alternative (`weight * normalized`),
    /// in original row order.
    pub fn weighted_matrix(&self) -> Vec<Vec<f64>> {
        self.normalized_matrix
            .rows()
            .iter()
            .map(|row| row.iter().zip(&self.weights).map(|(r, w)| r * w).collect())
            .collect()
    }
}
