//! Dataset - Alternatives scored against weighted criteria.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::foundation::{CriterionType, SawError};

/// The raw decision problem: alternatives x criteria with weights and types.
///
/// Row order of `decision_matrix` follows `alternatives`, column order follows
/// `criteria`. Both orders are meaningful and preserved everywhere downstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Ordered alternative names (row order).
    pub alternatives: Vec<String>,
    /// Ordered criterion names (column order).
    pub criteria: Vec<String>,
    /// One weight per criterion, rescaled to sum to 1 when the raw sum is positive.
    pub weights: Vec<f64>,
    /// One type per criterion.
    pub criteria_types: Vec<CriterionType>,
    /// Raw scores, rows = alternatives, columns = criteria.
    pub decision_matrix: Vec<Vec<f64>>,
}

impl Dataset {
    /// Creates an empty dataset.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a builder for constructing a dataset.
    pub fn builder() -> DatasetBuilder {
        DatasetBuilder::new()
    }

    /// Creates a dataset, rescaling weights so they sum to 1.
    ///
    /// Shapes are not checked here; see [`Dataset::check_shape`].
    pub fn new(
        alternatives: Vec<String>,
        criteria: Vec<String>,
        weights: Vec<f64>,
        decision_matrix: Vec<Vec<f64>>,
        criteria_types: Vec<CriterionType>,
    ) -> Self {
        Self {
            alternatives,
            criteria,
            weights: Self::rescale_weights(weights),
            criteria_types,
            decision_matrix,
        }
    }

    /// Rescales weights to sum to 1.
    ///
    /// A non-positive raw sum leaves the weights exactly as given.
    pub fn rescale_weights(weights: Vec<f64>) -> Vec<f64> {
        let total: f64 = weights.iter().sum();
        if total > 0.0 {
            weights.into_iter().map(|w| w / total).collect()
        } else {
            if !weights.is_empty() {
                warn!(total, "Weights sum to a non-positive value, leaving them unscaled");
            }
            weights
        }
    }

    /// Returns true if nothing has been set.
    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
            && self.criteria.is_empty()
            && self.weights.is_empty()
            && self.criteria_types.is_empty()
            && self.decision_matrix.is_empty()
    }

    /// Returns true if the decision matrix has no rows.
    pub fn has_empty_matrix(&self) -> bool {
        self.decision_matrix.is_empty()
    }

    /// Returns the number of alternatives.
    pub fn alternative_count(&self) -> usize {
        self.alternatives.len()
    }

    /// Returns the number of criteria.
    pub fn criterion_count(&self) -> usize {
        self.criteria.len()
    }

    /// Returns the column index of a criterion by name.
    pub fn criterion_index(&self, name: &str) -> Option<usize> {
        self.criteria.iter().position(|c| c == name)
    }

    /// Verifies that every per-criterion and per-alternative array agrees.
    pub fn check_shape(&self) -> Result<(), SawError> {
        let criteria = self.criteria.len();

        if self.weights.len() != criteria {
            return Err(SawError::shape_mismatch("weights", criteria, self.weights.len()));
        }
        if self.criteria_types.len() != criteria {
            return Err(SawError::shape_mismatch(
                "criteria types",
                criteria,
                self.criteria_types.len(),
            ));
        }
        if self.decision_matrix.len() != self.alternatives.len() {
            return Err(SawError::shape_mismatch(
                "decision matrix rows",
                self.alternatives.len(),
                self.decision_matrix.len(),
            ));
        }
        for (i, row) in self.decision_matrix.iter().enumerate() {
            if row.len() != criteria {
                return Err(SawError::shape_mismatch(
                    format!("decision matrix row {}", i + 1),
                    criteria,
                    row.len(),
                ));
            }
        }

        Ok(())
    }
}

/// Builder for constructing Dataset instances.
#[derive(Debug, Default)]
pub struct DatasetBuilder {
    alternatives: Vec<String>,
    criteria: Vec<String>,
    weights: Vec<f64>,
    criteria_types: Vec<CriterionType>,
    decision_matrix: Vec<Vec<f64>>,
}

impl DatasetBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the alternatives.
    pub fn alternatives(mut self, names: Vec<impl Into<String>>) -> Self {
        self.alternatives = names.into_iter().map(|s| s.into()).collect();
        self
    }

    /// Adds a criterion with its raw weight and type.
    pub fn criterion(
        mut self,
        name: impl Into<String>,
        weight: f64,
        criterion_type: CriterionType,
    ) -> Self {
        self.criteria.push(name.into());
        self.weights.push(weight);
        self.criteria_types.push(criterion_type);
        self
    }

    /// Adds a row of raw scores for the next alternative.
    pub fn row(mut self, values: Vec<f64>) -> Self {
        self.decision_matrix.push(values);
        self
    }

    /// Builds the dataset, rescaling weights.
    pub fn build(self) -> Dataset {
        Dataset::new(
            self.alternatives,
            self.criteria,
            self.weights,
            self.decision_matrix,
            self.criteria_types,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_by_two() -> Dataset {
        Dataset::builder()
            .alternatives(vec!["A1", "A2"])
            .criterion("C1", 0.5, CriterionType::Benefit)
            .criterion("C2", 0.5, CriterionType::Cost)
            .row(vec![80.0, 20.0])
            .row(vec![60.0, 40.0])
            .build()
    }

    #[test]
    fn empty_dataset_is_empty() {
        let dataset = Dataset::empty();
        assert!(dataset.is_empty());
        assert!(dataset.has_empty_matrix());
        assert_eq!(dataset.alternative_count(), 0);
        assert_eq!(dataset.criterion_count(), 0);
    }

    #[test]
    fn weights_are_rescaled_to_one() {
        let dataset = Dataset::builder()
            .alternatives(vec!["A"])
            .criterion("C1", 2.0, CriterionType::Benefit)
            .criterion("C2", 6.0, CriterionType::Cost)
            .row(vec![1.0, 1.0])
            .build();

        assert!((dataset.weights[0] - 0.25).abs() < 1e-12);
        assert!((dataset.weights[1] - 0.75).abs() < 1e-12);
    }

    #[test]
    fn zero_sum_weights_are_left_unscaled() {
        let dataset = Dataset::new(
            vec!["A1".into(), "A2".into()],
            vec!["C1".into(), "C2".into()],
            vec![0.0, 0.0],
            vec![vec![80.0, 20.0], vec![60.0, 40.0]],
            vec![CriterionType::Benefit, CriterionType::Cost],
        );
        assert_eq!(dataset.weights, vec![0.0, 0.0]);
    }

    #[test]
    fn criterion_index_finds_column() {
        let dataset = two_by_two();
        assert_eq!(dataset.criterion_index("C2"), Some(1));
        assert_eq!(dataset.criterion_index("C9"), None);
    }

    #[test]
    fn check_shape_accepts_consistent_dataset() {
        assert!(two_by_two().check_shape().is_ok());
    }

    #[test]
    fn check_shape_rejects_short_row() {
        let mut dataset = two_by_two();
        dataset.decision_matrix[1].pop();
        assert_eq!(
            dataset.check_shape(),
            Err(SawError::shape_mismatch("decision matrix row 2", 2, 1))
        );
    }

    #[test]
    fn check_shape_rejects_missing_weight() {
        let mut dataset = two_by_two();
        dataset.weights.pop();
        assert_eq!(
            dataset.check_shape(),
            Err(SawError::shape_mismatch("weights", 2, 1))
        );
    }

    #[test]
    fn check_shape_rejects_row_count_mismatch() {
        let mut dataset = two_by_two();
        dataset.alternatives.push("A3".into());
        assert!(matches!(
            dataset.check_shape(),
            Err(SawError::ShapeMismatch { expected: 3, actual: 2, .. })
        ));
    }

    #[test]
    fn dataset_deserializes_from_yaml() {
        let yaml = r#"
alternatives: [A1, A2]
criteria: [C1, C2]
weights: [0.5, 0.5]
criteria_types: [benefit, cost]
decision_matrix:
  - [80, 20]
  - [60, 40]
"#;
        let dataset: Dataset = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(dataset.criteria_types[1], CriterionType::Cost);
        assert_eq!(dataset.decision_matrix[1][0], 60.0);
    }
}
