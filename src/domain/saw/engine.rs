//! SAW Engine - Dataset plus cached derived state, driven through a status machine.
//!
//! The engine owns one dataset and the results derived from it. Every operation
//! computes into locals first and commits only on success, so a failing call
//! leaves the engine exactly as it was.

use tracing::{debug, warn};

use super::{
    CalculationSteps, Dataset, NormalizedMatrix, Normalizer, RankedResult, Scorer,
    SensitivityAnalyzer, SensitivityRecord, SensitivityRequest, StabilityClassifier,
    StabilityReport, StabilityThresholds, DEFAULT_SENSITIVITY_STEP,
};
use crate::domain::foundation::{CriterionType, EngineStatus, SawError, StateMachine};

/// Tunables for sensitivity analysis and stability classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineSettings {
    pub sensitivity_step: f64,
    pub thresholds: StabilityThresholds,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            sensitivity_step: DEFAULT_SENSITIVITY_STEP,
            thresholds: StabilityThresholds::default(),
        }
    }
}

/// Simple Additive Weighting engine.
///
/// Lifecycle: `Empty -> DataSet -> Normalized -> Scored -> SensitivityComputed`.
/// Moving back to an earlier status discards the derived state of later ones.
#[derive(Debug, Clone, Default)]
pub struct SawEngine {
    settings: EngineSettings,
    status: EngineStatus,
    dataset: Dataset,
    normalized: Option<NormalizedMatrix>,
    results: Option<RankedResult>,
    sensitivity: Option<Vec<SensitivityRecord>>,
    /// Set when raw data changed under a cached normalized matrix.
    dirty: bool,
}

impl SawEngine {
    /// Creates an empty engine with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty engine with custom settings.
    pub fn with_settings(settings: EngineSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    /// Returns the current status.
    pub fn status(&self) -> EngineStatus {
        self.status
    }

    /// Returns the settings.
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Returns the dataset.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Returns the cached normalized matrix.
    pub fn normalized_matrix(&self) -> Option<&NormalizedMatrix> {
        self.normalized.as_ref()
    }

    /// Returns the last ranking.
    pub fn results(&self) -> Option<&RankedResult> {
        self.results.as_ref()
    }

    /// Returns the last sensitivity run.
    pub fn last_sensitivity(&self) -> Option<&[SensitivityRecord]> {
        self.sensitivity.as_deref()
    }

    /// Returns true if raw data changed since the cached matrix was normalized.
    pub fn is_stale(&self) -> bool {
        self.dirty && self.normalized.is_some()
    }

    /// Returns the column index of a criterion by name.
    pub fn criterion_index(&self, name: &str) -> Option<usize> {
        self.dataset.criterion_index(name)
    }

    // ───────────────────────────────────────────────────────────────
    // Data Lifecycle
    // ───────────────────────────────────────────────────────────────

    /// Replaces the whole dataset at once, rescaling weights to sum to 1.
    ///
    /// All derived state is discarded. Shapes are not checked here.
    pub fn set_data(
        &mut self,
        alternatives: Vec<String>,
        criteria: Vec<String>,
        weights: Vec<f64>,
        decision_matrix: Vec<Vec<f64>>,
        criteria_types: Vec<CriterionType>,
    ) {
        self.install(Dataset::new(
            alternatives,
            criteria,
            weights,
            decision_matrix,
            criteria_types,
        ));
    }

    /// Replaces the whole dataset with an existing one, rescaling its weights.
    pub fn load(&mut self, dataset: Dataset) {
        let Dataset {
            alternatives,
            criteria,
            weights,
            criteria_types,
            decision_matrix,
        } = dataset;
        self.set_data(alternatives, criteria, weights, decision_matrix, criteria_types);
    }

    fn install(&mut self, dataset: Dataset) {
        self.dataset = dataset;
        self.clear_derived();
        self.status = EngineStatus::DataSet;

        debug!(
            alternatives = self.dataset.alternative_count(),
            criteria = self.dataset.criterion_count(),
            "Dataset set"
        );
    }

    /// Swaps in a new raw matrix without touching the cache.
    ///
    /// The cached normalized matrix, if any, is kept and marked stale: scoring
    /// keeps using it until [`Self::invalidate`] or [`Self::normalize`] is called.
    ///
    /// An empty engine has no dataset to patch and reports `NoData`.
    pub fn replace_decision_matrix(
        &mut self,
        decision_matrix: Vec<Vec<f64>>,
    ) -> Result<(), SawError> {
        if self.status == EngineStatus::Empty {
            return Err(SawError::NoData);
        }
        self.dataset.decision_matrix = decision_matrix;
        if self.normalized.is_some() {
            self.dirty = true;
        }
        Ok(())
    }

    /// Drops all derived state, keeping the dataset.
    pub fn invalidate(&mut self) {
        if self.status == EngineStatus::Empty {
            return;
        }
        self.clear_derived();
        self.status = EngineStatus::DataSet;
    }

    /// Clears the dataset and all derived state.
    pub fn reset(&mut self) {
        self.dataset = Dataset::empty();
        self.clear_derived();
        self.status = EngineStatus::Empty;
    }

    fn clear_derived(&mut self) {
        self.normalized = None;
        self.results = None;
        self.sensitivity = None;
        self.dirty = false;
    }

    // ───────────────────────────────────────────────────────────────
    // Computation
    // ───────────────────────────────────────────────────────────────

    /// Normalizes the raw matrix and caches the result.
    ///
    /// Any cached ranking and sensitivity run are discarded.
    pub fn normalize(&mut self) -> Result<&NormalizedMatrix, SawError> {
        let normalized = self.compute_normalized()?;
        let status = self
            .status
            .transition_to(EngineStatus::Normalized)
            .map_err(|_| SawError::EmptyMatrix)?;

        self.results = None;
        self.sensitivity = None;
        self.dirty = false;
        self.status = status;

        Ok(self.normalized.insert(normalized))
    }

    fn compute_normalized(&self) -> Result<NormalizedMatrix, SawError> {
        if self.dataset.has_empty_matrix() {
            return Err(SawError::EmptyMatrix);
        }
        self.dataset.check_shape()?;
        Normalizer::normalize(&self.dataset.decision_matrix, &self.dataset.criteria_types)
    }

    /// Scores and ranks alternatives, normalizing first only if nothing is cached.
    ///
    /// A cached matrix is reused as-is, even if raw data changed since
    /// (see [`Self::is_stale`]).
    pub fn score(&mut self) -> Result<&RankedResult, SawError> {
        let normalized = match self.normalized.take() {
            Some(cached) => {
                if self.dirty {
                    warn!("Scoring against a stale normalized matrix");
                }
                cached
            }
            None => self.compute_normalized()?,
        };

        let ranked = match Scorer::score(&normalized, &self.dataset.weights, &self.dataset.alternatives)
        {
            Ok(ranked) => ranked,
            Err(err) => {
                // Put back only what was cached before the call.
                if self.status.has_normalized() {
                    self.normalized = Some(normalized);
                }
                return Err(err);
            }
        };

        self.normalized = Some(normalized);
        self.sensitivity = None;
        self.status = EngineStatus::Scored;

        Ok(self.results.insert(ranked))
    }

    /// Builds a full snapshot of the run, re-normalizing and re-scoring first.
    ///
    /// Re-normalizing means a stale cache is refreshed here.
    pub fn calculation_steps(&mut self) -> Result<CalculationSteps, SawError> {
        if self.dataset.has_empty_matrix() {
            return Err(SawError::NoData);
        }

        let normalized = self.compute_normalized()?;
        let scores = Scorer::score(&normalized, &self.dataset.weights, &self.dataset.alternatives)?;

        self.normalized = Some(normalized.clone());
        self.results = Some(scores.clone());
        self.sensitivity = None;
        self.dirty = false;
        self.status = EngineStatus::Scored;

        Ok(CalculationSteps {
            original_matrix: self.dataset.decision_matrix.clone(),
            normalized_matrix: normalized,
            weights: self.dataset.weights.clone(),
            scores,
            alternatives: self.dataset.alternatives.clone(),
            criteria: self.dataset.criteria.clone(),
            criteria_types: self.dataset.criteria_types.clone(),
        })
    }

    /// Scans one criterion's weight over `±weight_range` and re-ranks at each step.
    ///
    /// Requires a ranking; scores are recomputed against the cached normalized matrix.
    pub fn analyze(
        &mut self,
        criterion_index: usize,
        weight_range: f64,
    ) -> Result<&[SensitivityRecord], SawError> {
        let status = self
            .status
            .transition_to(EngineStatus::SensitivityComputed)
            .map_err(|_| SawError::NoResults)?;
        let normalized = self.normalized.as_ref().ok_or(SawError::NoResults)?;

        let request = SensitivityRequest::new(criterion_index, weight_range)
            .with_step(self.settings.sensitivity_step);
        let records = SensitivityAnalyzer::analyze(
            normalized,
            &self.dataset.weights,
            &self.dataset.alternatives,
            request,
        )?;

        self.status = status;

        Ok(self.sensitivity.insert(records).as_slice())
    }

    /// Runs [`Self::analyze`] for a criterion given by name.
    ///
    /// An unknown name reports `InvalidCriterion` with `index == count`.
    pub fn analyze_criterion(
        &mut self,
        criterion: &str,
        weight_range: f64,
    ) -> Result<&[SensitivityRecord], SawError> {
        let index = self
            .criterion_index(criterion)
            .ok_or(SawError::InvalidCriterion {
                index: self.dataset.criterion_count(),
                count: self.dataset.criterion_count(),
            })?;
        self.analyze(index, weight_range)
    }

    /// Assesses a sensitivity run against the current ranking's winner.
    pub fn calculate_stability(&self, records: &[SensitivityRecord]) -> StabilityReport {
        let original_winner = self
            .results
            .as_ref()
            .and_then(|r| r.winner())
            .map(|w| w.name.as_str());
        StabilityClassifier::assess(original_winner, records, &self.settings.thresholds)
    }

    /// Assesses the last sensitivity run.
    pub fn stability(&self) -> StabilityReport {
        self.calculate_stability(self.last_sensitivity().unwrap_or_default())
    }
}
