//! Scorer - Weighted sums and stable ranking.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::debug;

use super::NormalizedMatrix;
use crate::domain::foundation::SawError;

/// One alternative and its weighted-sum score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAlternative {
    pub name: String,
    pub score: f64,
}

impl RankedAlternative {
    /// Creates a new ranked entry.
    pub fn new(name: impl Into<String>, score: f64) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

/// Alternatives ordered by score, highest first.
///
/// Ties keep the original alternative order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankedResult(Vec<RankedAlternative>);

impl RankedResult {
    /// Returns the entries in rank order.
    pub fn entries(&self) -> &[RankedAlternative] {
        &self.0
    }

    /// Returns the top-ranked alternative.
    pub fn winner(&self) -> Option<&RankedAlternative> {
        self.0.first()
    }

    /// Returns the 1-based rank of an alternative.
    pub fn rank_of(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|r| r.name == name).map(|i| i + 1)
    }

    /// Returns true if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over entries in rank order.
    pub fn iter(&self) -> std::slice::Iter<'_, RankedAlternative> {
        self.0.iter()
    }
}

impl From<Vec<RankedAlternative>> for RankedResult {
    /// Wraps entries that are already in rank order.
    fn from(entries: Vec<RankedAlternative>) -> Self {
        Self(entries)
    }
}

/// Weighted-sum scoring functions.
pub struct Scorer;

impl Scorer {
    /// Scores and ranks every alternative.
    ///
    /// # Algorithm
    /// `score_i = Σ_j weights[j] * normalized[i][j]`, then a stable descending sort.
    ///
    /// # Edge Cases
    /// - Row count differing from `alternatives`: `ShapeMismatch`
    /// - Row length differing from `weights`: `ShapeMismatch`
    pub fn score(
        normalized: &NormalizedMatrix,
        weights: &[f64],
        alternatives: &[String],
    ) -> Result<RankedResult, SawError> {
        let result = Self::rank(normalized, weights, alternatives)?;

        if let Some(winner) = result.winner() {
            debug!(
                alternatives = result.len(),
                winner = %winner.name,
                score = winner.score,
                "Computed SAW ranking"
            );
        }

        Ok(result)
    }

    /// Computes the ranking without logging.
    ///
    /// Used directly by sensitivity analysis, which ranks once per step.
    pub fn rank(
        normalized: &NormalizedMatrix,
        weights: &[f64],
        alternatives: &[String],
    ) -> Result<RankedResult, SawError> {
        if normalized.row_count() != alternatives.len() {
            return Err(SawError::shape_mismatch(
                "normalized matrix rows",
                alternatives.len(),
                normalized.row_count(),
            ));
        }

        let mut ranked = Vec::with_capacity(alternatives.len());
        for (name, row) in alternatives.iter().zip(normalized.rows()) {
            if row.len() != weights.len() {
                return Err(SawError::shape_mismatch("weights", row.len(), weights.len()));
            }
            let score: f64 = weights.iter().zip(row).map(|(w, r)| w * r).sum();
            ranked.push(RankedAlternative::new(name.clone(), score));
        }

        // `sort_by` is stable, so ties keep row order.
        ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        Ok(RankedResult(ranked))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn score_computes_weighted_sum() {
        let normalized = NormalizedMatrix::from_rows(vec![vec![1.0, 1.0], vec![0.75, 0.5]]);
        let result = Scorer::score(&normalized, &[0.5, 0.5], &names(&["A1", "A2"])).unwrap();

        assert_eq!(
            result.entries(),
            &[
                RankedAlternative::new("A1", 1.0),
                RankedAlternative::new("A2", 0.625)
            ]
        );
    }

    #[test]
    fn score_sorts_descending() {
        let normalized = NormalizedMatrix::from_rows(vec![vec![0.2], vec![0.9], vec![0.5]]);
        let result = Scorer::score(&normalized, &[1.0], &names(&["A", "B", "C"])).unwrap();

        let order: Vec<_> = result.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(order, vec!["B", "C", "A"]);
        assert_eq!(result.rank_of("A"), Some(3));
    }

    #[test]
    fn ties_keep_original_order() {
        let normalized =
            NormalizedMatrix::from_rows(vec![vec![0.5], vec![0.9], vec![0.5], vec![0.5]]);
        let result = Scorer::score(&normalized, &[1.0], &names(&["W", "X", "Y", "Z"])).unwrap();

        let order: Vec<_> = result.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(order, vec!["X", "W", "Y", "Z"]);
    }

    #[test]
    fn row_count_mismatch_fails() {
        let normalized = NormalizedMatrix::from_rows(vec![vec![1.0]]);
        let result = Scorer::score(&normalized, &[1.0], &names(&["A", "B"]));
        assert!(matches!(result, Err(SawError::ShapeMismatch { .. })));
    }

    #[test]
    fn weight_count_mismatch_fails() {
        let normalized = NormalizedMatrix::from_rows(vec![vec![1.0, 0.5]]);
        let result = Scorer::score(&normalized, &[1.0], &names(&["A"]));
        assert_eq!(result, Err(SawError::shape_mismatch("weights", 2, 1)));
    }

    #[test]
    fn ranked_result_serializes_as_list() {
        let normalized = NormalizedMatrix::from_rows(vec![vec![1.0]]);
        let result = Scorer::score(&normalized, &[1.0], &names(&["A"])).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"[{"name":"A","score":1.0}]"#);
    }

    proptest! {
        #[test]
        fn scoring_is_deterministic(
            rows in proptest::collection::vec(
                proptest::collection::vec(prop_oneof![Just(0.0_f64), Just(0.5), Just(1.0)], 3),
                1..8,
            ),
        ) {
            let alternatives: Vec<String> = (0..rows.len()).map(|i| format!("A{i}")).collect();
            let normalized = NormalizedMatrix::from_rows(rows);
            let weights = [0.2, 0.3, 0.5];

            let first = Scorer::score(&normalized, &weights, &alternatives).unwrap();
            let second = Scorer::score(&normalized, &weights, &alternatives).unwrap();
            prop_assert_eq!(&first, &second);

            for pair in first.entries().windows(2) {
                prop_assert!(pair[0].score >= pair[1].score);
            }
        }
    }
}
