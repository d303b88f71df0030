//! Stability Classifier - How often the original winner survives perturbation.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::SensitivityRecord;

/// Classification of a stability percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StabilityLevel {
    Unstable,
    ModeratelyStable,
    Stable,
    VeryStable,
}

impl StabilityLevel {
    /// Returns the display label for this level.
    pub fn label(&self) -> &'static str {
        match self {
            StabilityLevel::VeryStable => "VERY STABLE",
            StabilityLevel::Stable => "STABLE",
            StabilityLevel::ModeratelyStable => "MODERATELY STABLE",
            StabilityLevel::Unstable => "UNSTABLE",
        }
    }
}

impl fmt::Display for StabilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Inclusive lower bounds (percent) for each stability level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StabilityThresholds {
    #[serde(default = "default_very_stable")]
    pub very_stable: f64,
    #[serde(default = "default_stable")]
    pub stable: f64,
    #[serde(default = "default_moderate")]
    pub moderate: f64,
}

impl Default for StabilityThresholds {
    fn default() -> Self {
        Self {
            very_stable: default_very_stable(),
            stable: default_stable(),
            moderate: default_moderate(),
        }
    }
}

impl StabilityThresholds {
    /// Returns true if bounds are within 0..=100 and strictly descending.
    pub fn is_valid(&self) -> bool {
        let in_range = |v: f64| (0.0..=100.0).contains(&v);
        in_range(self.very_stable)
            && in_range(self.stable)
            && in_range(self.moderate)
            && self.very_stable > self.stable
            && self.stable > self.moderate
    }
}

fn default_very_stable() -> f64 {
    80.0
}

fn default_stable() -> f64 {
    60.0
}

fn default_moderate() -> f64 {
    40.0
}

/// Summary of a sensitivity run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StabilityReport {
    /// Share of steps won by the original winner, 0..=100.
    pub stability_percent: f64,
    pub level: StabilityLevel,
    /// Top alternative of the ranking the run perturbed.
    pub original_winner: Option<String>,
    /// Winner at each recorded step, in step order.
    pub winners: Vec<String>,
}

impl StabilityReport {
    /// The report for a run that cannot be assessed.
    pub fn unassessable() -> Self {
        Self {
            stability_percent: 0.0,
            level: StabilityLevel::Unstable,
            original_winner: None,
            winners: Vec::new(),
        }
    }

    /// Number of steps where the original winner stayed on top.
    pub fn retained_count(&self) -> usize {
        match &self.original_winner {
            Some(original) => self.winners.iter().filter(|w| *w == original).count(),
            None => 0,
        }
    }

    /// Distinct winners in order of first appearance.
    pub fn distinct_winners(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for winner in &self.winners {
            if !seen.contains(&winner.as_str()) {
                seen.push(winner.as_str());
            }
        }
        seen
    }
}

/// Stability assessment functions.
pub struct StabilityClassifier;

impl StabilityClassifier {
    /// Maps a percentage to a level using inclusive lower bounds.
    pub fn classify(stability_percent: f64, thresholds: &StabilityThresholds) -> StabilityLevel {
        if stability_percent >= thresholds.very_stable {
            StabilityLevel::VeryStable
        } else if stability_percent >= thresholds.stable {
            StabilityLevel::Stable
        } else if stability_percent >= thresholds.moderate {
            StabilityLevel::ModeratelyStable
        } else {
            StabilityLevel::Unstable
        }
    }

    /// Assesses a sensitivity run against the winner of the unperturbed ranking.
    ///
    /// # Edge Cases
    /// - No original winner or no records: 0% and `Unstable`, nothing else filled in
    pub fn assess(
        original_winner: Option<&str>,
        records: &[SensitivityRecord],
        thresholds: &StabilityThresholds,
    ) -> StabilityReport {
        let Some(original) = original_winner else {
            return StabilityReport::unassessable();
        };
        if records.is_empty() {
            return StabilityReport::unassessable();
        }

        let winners: Vec<String> = records.iter().map(|r| r.winner.clone()).collect();
        let retained = winners.iter().filter(|w| *w == original).count();
        let stability_percent = retained as f64 / winners.len() as f64 * 100.0;

        StabilityReport {
            stability_percent,
            level: Self::classify(stability_percent, thresholds),
            original_winner: Some(original.to_string()),
            winners,
        }
    }
}
