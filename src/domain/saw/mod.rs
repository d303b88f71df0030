//! SAW Module - Simple Additive Weighting scoring and sensitivity analysis.
//!
//! # Components
//!
//! - `Dataset` - Alternatives, criteria, weights, types and the raw matrix
//! - `Normalizer` - Benefit/cost normalization into `[0, 1]`
//! - `Scorer` - Weighted sums and stable descending ranking
//! - `SensitivityAnalyzer` - Re-ranking across a sweep of one criterion's weight
//! - `StabilityClassifier` - Share of steps the original winner survives
//! - `DatasetValidator` - Input checks run before data reaches the engine
//! - `SawEngine` - Holds one dataset and the results derived from it
//!
//! Everything except `SawEngine` is pure and stateless. The engine only adds
//! caching and lifecycle tracking on top of these functions.

mod calculation_steps;
mod dataset;
mod engine;
mod normalizer;
mod scorer;
mod sensitivity;
mod stability;
mod validator;

pub use calculation_steps::CalculationSteps;
pub use dataset::{Dataset, DatasetBuilder};
pub use engine::{EngineSettings, SawEngine};
pub use normalizer::{NormalizedMatrix, Normalizer};
pub use scorer::{RankedAlternative, RankedResult, Scorer};
pub use sensitivity::{
    SensitivityAnalyzer, SensitivityRecord, SensitivityRequest, DEFAULT_SENSITIVITY_STEP,
    DEFAULT_WEIGHT_RANGE, MAX_PERTURBATION_STEPS, MIN_SENSITIVITY_STEP,
};
pub use stability::{StabilityClassifier, StabilityLevel, StabilityReport, StabilityThresholds};
pub use validator::{
    DatasetValidator, MAX_ALTERNATIVE_NAME_LENGTH, MAX_CRITERION_NAME_LENGTH, MIN_NAME_LENGTH,
};
