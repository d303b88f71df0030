//! Normalizer - Benefit/cost normalization of the raw decision matrix.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::foundation::{CriterionType, SawError};

/// A decision matrix rescaled column-wise into comparable units.
///
/// Same shape as the raw matrix it was derived from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedMatrix(Vec<Vec<f64>>);

impl NormalizedMatrix {
    /// Wraps already-normalized rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        Self(rows)
    }

    /// Returns the rows.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.0
    }

    /// Returns a single cell.
    pub fn get(&self, row: usize, column: usize) -> Option<f64> {
        self.0.get(row).and_then(|r| r.get(column)).copied()
    }

    /// Returns the number of rows.
    pub fn row_count(&self) -> usize {
        self.0.len()
    }

    /// Returns the number of columns (0 for an empty matrix).
    pub fn column_count(&self) -> usize {
        self.0.first().map(Vec::len).unwrap_or(0)
    }

    /// Consumes the matrix, returning the rows.
    pub fn into_rows(self) -> Vec<Vec<f64>> {
        self.0
    }
}

/// Column-wise normalization for SAW.
pub struct Normalizer;

impl Normalizer {
    /// Normalizes the raw matrix column by column.
    ///
    /// # Algorithm
    /// - Benefit column: `r_ij = x_ij / max_i(x_ij)`
    /// - Cost column: `r_ij = min_i(x_ij) / x_ij`
    ///
    /// # Edge Cases
    /// - No rows: `EmptyMatrix`
    /// - Benefit column with max <= 0: whole column stays 0
    /// - Cost column with min <= 0: whole column stays 0, even when other cells are positive
    /// - Row length or type count disagreeing with the first row: `ShapeMismatch`
    pub fn normalize(
        matrix: &[Vec<f64>],
        criteria_types: &[CriterionType],
    ) -> Result<NormalizedMatrix, SawError> {
        if matrix.is_empty() {
            return Err(SawError::EmptyMatrix);
        }

        let columns = criteria_types.len();
        for (i, row) in matrix.iter().enumerate() {
            if row.len() != columns {
                return Err(SawError::shape_mismatch(
                    format!("decision matrix row {}", i + 1),
                    columns,
                    row.len(),
                ));
            }
        }

        let mut normalized = vec![vec![0.0; columns]; matrix.len()];

        for (j, criterion_type) in criteria_types.iter().enumerate() {
            match criterion_type {
                CriterionType::Benefit => {
                    let max = Self::column_max(matrix, j);
                    if max > 0.0 {
                        for (i, row) in matrix.iter().enumerate() {
                            normalized[i][j] = row[j] / max;
                        }
                    } else {
                        warn!(column = j, max, "Benefit column maximum is not positive, column left at 0");
                    }
                }
                CriterionType::Cost => {
                    let min = Self::column_min(matrix, j);
                    if min > 0.0 {
                        for (i, row) in matrix.iter().enumerate() {
                            normalized[i][j] = min / row[j];
                        }
                    } else {
                        warn!(column = j, min, "Cost column minimum is not positive, column left at 0");
                    }
                }
            }
        }

        debug!(
            rows = matrix.len(),
            columns, "Normalized decision matrix"
        );

        Ok(NormalizedMatrix(normalized))
    }

    fn column_max(matrix: &[Vec<f64>], column: usize) -> f64 {
        matrix
            .iter()
            .map(|row| row[column])
            .fold(f64::NEG_INFINITY, f64::max)
    }

    fn column_min(matrix: &[Vec<f64>], column: usize) -> f64 {
        matrix
            .iter()
            .map(|row| row[column])
            .fold(f64::INFINITY, f64::min)
    }
}
