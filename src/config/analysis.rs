//! Analysis configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::saw::{
    EngineSettings, StabilityThresholds, DEFAULT_SENSITIVITY_STEP, DEFAULT_WEIGHT_RANGE,
    MIN_SENSITIVITY_STEP,
};

/// Sensitivity and stability tunables
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// Distance between consecutive weight perturbations
    #[serde(default = "default_sensitivity_step")]
    pub sensitivity_step: f64,

    /// Half-width of the perturbation range when none is given
    #[serde(default = "default_weight_range")]
    pub default_weight_range: f64,

    /// Lower bounds (percent) of each stability level
    #[serde(default)]
    pub thresholds: StabilityThresholds,
}

impl AnalysisConfig {
    /// Engine settings derived from this section
    pub fn engine_settings(&self) -> EngineSettings {
        EngineSettings {
            sensitivity_step: self.sensitivity_step,
            thresholds: self.thresholds,
        }
    }

    /// Validate analysis configuration
    ///
    /// The step must be at least `MIN_SENSITIVITY_STEP` and at most 1.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let step = self.sensitivity_step;
        if !step.is_finite() || !(MIN_SENSITIVITY_STEP..=1.0).contains(&step) {
            return Err(ValidationError::InvalidSensitivityStep(self.sensitivity_step));
        }
        let range = self.default_weight_range;
        if !range.is_finite() || range <= 0.0 || range > 1.0 {
            return Err(ValidationError::InvalidWeightRange(range));
        }
        if !self.thresholds.is_valid() {
            return Err(ValidationError::InvalidThresholds);
        }
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            sensitivity_step: default_sensitivity_step(),
            default_weight_range: default_weight_range(),
            thresholds: StabilityThresholds::default(),
        }
    }
}

fn default_sensitivity_step() -> f64 {
    DEFAULT_SENSITIVITY_STEP
}

fn default_weight_range() -> f64 {
    DEFAULT_WEIGHT_RANGE
}
