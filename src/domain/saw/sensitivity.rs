//! Sensitivity Analyzer - Ranking robustness under one-criterion weight perturbation.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{NormalizedMatrix, RankedResult, Scorer};
use crate::domain::foundation::SawError;

/// Default distance between consecutive weight perturbations.
pub const DEFAULT_SENSITIVITY_STEP: f64 = 0.02;

/// Default half-width of the perturbation range.
pub const DEFAULT_WEIGHT_RANGE: f64 = 0.2;

/// Smallest step accepted from configuration.
pub const MIN_SENSITIVITY_STEP: f64 = 0.001;

/// Upper bound on the number of offsets in one sweep.
pub const MAX_PERTURBATION_STEPS: usize = 10_000;

/// Absorbs representation error when counting steps, so that `0.4 / 0.02`
/// counts as 20 even if it evaluates to 19.999...
const STEP_COUNT_EPSILON: f64 = 1e-9;

/// Outcome of ranking at one perturbed weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityRecord {
    /// Offset applied to the original weight.
    pub change: f64,
    /// Perturbed weight of the analyzed criterion.
    pub new_weight: f64,
    /// Top alternative at this step.
    pub winner: String,
    /// Score of the top alternative at this step.
    pub score: f64,
    /// Complete ranking at this step.
    pub full_results: RankedResult,
}

/// Parameters of a sensitivity scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensitivityRequest {
    pub criterion_index: usize,
    pub weight_range: f64,
    pub step: f64,
}

impl SensitivityRequest {
    /// Creates a request using the default step.
    pub fn new(criterion_index: usize, weight_range: f64) -> Self {
        Self {
            criterion_index,
            weight_range,
            step: DEFAULT_SENSITIVITY_STEP,
        }
    }

    /// Overrides the step.
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }
}

/// Weight-perturbation sensitivity functions.
pub struct SensitivityAnalyzer;

impl SensitivityAnalyzer {
    /// Returns the ascending offsets `-range, -range + step, ..., +range`.
    ///
    /// The count is `floor(2 * range / step) + 1`. Offsets are computed from
    /// the index rather than accumulated, so rounding error does not drift.
    ///
    /// # Edge Cases
    /// - Range outside `0..=1` or non-finite: `InvalidWeightRange(range)`
    /// - Non-positive step, or one giving more than [`MAX_PERTURBATION_STEPS`]
    ///   offsets: `InvalidWeightRange(step)`
    pub fn perturbation_deltas(weight_range: f64, step: f64) -> Result<Vec<f64>, SawError> {
        if !weight_range.is_finite() || !(0.0..=1.0).contains(&weight_range) {
            return Err(SawError::InvalidWeightRange(weight_range));
        }
        if !step.is_finite() || step <= 0.0 {
            return Err(SawError::InvalidWeightRange(step));
        }

        let intervals = (2.0 * weight_range / step + STEP_COUNT_EPSILON).floor();
        if intervals >= MAX_PERTURBATION_STEPS as f64 {
            return Err(SawError::InvalidWeightRange(step));
        }

        let count = intervals as usize + 1;
        Ok((0..count)
            .map(|k| -weight_range + k as f64 * step)
            .collect())
    }

    /// Builds the weight vector for one perturbation.
    ///
    /// The analyzed criterion gets `new_weight`; every other weight is scaled by
    /// `(1 - new_weight) / sum(others)`. When the other weights sum to a
    /// non-positive value they are left untouched and the result does not sum to 1.
    ///
    /// An index past the last weight is `InvalidCriterion`.
    pub fn perturb_weights(
        weights: &[f64],
        criterion_index: usize,
        new_weight: f64,
    ) -> Result<Vec<f64>, SawError> {
        if criterion_index >= weights.len() {
            return Err(SawError::InvalidCriterion {
                index: criterion_index,
                count: weights.len(),
            });
        }

        let others_sum: f64 = weights
            .iter()
            .enumerate()
            .filter(|(k, _)| *k != criterion_index)
            .map(|(_, w)| w)
            .sum();

        let mut perturbed = weights.to_vec();
        perturbed[criterion_index] = new_weight;

        if others_sum > 0.0 {
            let factor = (1.0 - new_weight) / others_sum;
            for (k, weight) in perturbed.iter_mut().enumerate() {
                if k != criterion_index {
                    *weight *= factor;
                }
            }
        } else {
            warn!(
                criterion_index,
                others_sum, "Other weights sum to a non-positive value, skipping renormalization"
            );
        }

        Ok(perturbed)
    }

    /// Re-ranks alternatives across a sweep of one criterion's weight.
    ///
    /// # Algorithm
    /// For each offset `d` from [`Self::perturbation_deltas`]:
    /// 1. `new_weight = weights[i] + d`; skip the step if `new_weight <= 0` or `>= 1`
    /// 2. Rescale the other weights (see [`Self::perturb_weights`])
    /// 3. Rank against the given normalized matrix, which is never recomputed
    ///
    /// Records come back in ascending offset order; skipped steps leave gaps.
    ///
    /// # Edge Cases
    /// - Criterion index out of range: `InvalidCriterion`
    /// - Range outside `0..=1`, non-finite, or too fine a step: `InvalidWeightRange`
    /// - No alternatives: `NoResults`
    pub fn analyze(
        normalized: &NormalizedMatrix,
        weights: &[f64],
        alternatives: &[String],
        request: SensitivityRequest,
    ) -> Result<Vec<SensitivityRecord>, SawError> {
        let index = request.criterion_index;
        if index >= weights.len() {
            return Err(SawError::InvalidCriterion {
                index,
                count: weights.len(),
            });
        }
        if alternatives.is_empty() {
            return Err(SawError::NoResults);
        }

        let deltas = Self::perturbation_deltas(request.weight_range, request.step)?;
        let original_weight = weights[index];
        let mut records = Vec::with_capacity(deltas.len());

        for change in deltas {
            let new_weight = original_weight + change;
            if new_weight <= 0.0 || new_weight >= 1.0 {
                continue;
            }

            let perturbed = Self::perturb_weights(weights, index, new_weight)?;
            let full_results = Scorer::rank(normalized, &perturbed, alternatives)?;
            let Some(top) = full_results.winner() else {
                return Err(SawError::NoResults);
            };

            records.push(SensitivityRecord {
                change,
                new_weight,
                winner: top.name.clone(),
                score: top.score,
                full_results: full_results.clone(),
            });
        }

        debug!(
            criterion_index = index,
            weight_range = request.weight_range,
            feasible_steps = records.len(),
            "Completed sensitivity scan"
        );

        Ok(records)
    }
}
