//! EngineStatus enum for tracking which derived state the engine holds.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StateMachine;

/// Lifecycle status of a scoring engine.
///
/// Each status implies all of the derived state of the statuses before it:
/// `Scored` means a normalized matrix and a ranking are cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EngineStatus {
    #[default]
    Empty,
    DataSet,
    Normalized,
    Scored,
    SensitivityComputed,
}

impl EngineStatus {
    /// Returns true if a normalized matrix is cached.
    pub fn has_normalized(&self) -> bool {
        matches!(
            self,
            EngineStatus::Normalized | EngineStatus::Scored | EngineStatus::SensitivityComputed
        )
    }

    /// Returns true if a ranking is cached.
    pub fn has_results(&self) -> bool {
        matches!(self, EngineStatus::Scored | EngineStatus::SensitivityComputed)
    }
}

impl StateMachine for EngineStatus {
    /// Valid transitions:
    /// - any -> Empty (reset), any -> DataSet (set data)
    /// - DataSet | Normalized | Scored | SensitivityComputed -> Normalized
    /// - Normalized | Scored | SensitivityComputed -> Scored
    /// - Scored | SensitivityComputed -> SensitivityComputed
    fn can_transition_to(&self, target: &Self) -> bool {
        use EngineStatus::*;
        match target {
            Empty | DataSet => true,
            Normalized => !matches!(self, Empty),
            Scored => self.has_normalized(),
            SensitivityComputed => self.has_results(),
        }
    }

    fn valid_transitions(&self) -> Vec<Self> {
        [
            EngineStatus::Empty,
            EngineStatus::DataSet,
            EngineStatus::Normalized,
            EngineStatus::Scored,
            EngineStatus::SensitivityComputed,
        ]
        .into_iter()
        .filter(|target| self.can_transition_to(target))
        .collect()
    }
}

impl fmt::Display for EngineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EngineStatus::Empty => "Empty",
            EngineStatus::DataSet => "DataSet",
            EngineStatus::Normalized => "Normalized",
            EngineStatus::Scored => "Scored",
            EngineStatus::SensitivityComputed => "SensitivityComputed",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        assert_eq!(EngineStatus::default(), EngineStatus::Empty);
    }

    #[test]
    fn reset_and_set_data_allowed_from_every_state() {
        for status in EngineStatus::SensitivityComputed.valid_transitions() {
            assert!(status.can_transition_to(&EngineStatus::Empty));
            assert!(status.can_transition_to(&EngineStatus::DataSet));
        }
    }

    #[test]
    fn empty_cannot_normalize() {
        assert!(!EngineStatus::Empty.can_transition_to(&EngineStatus::Normalized));
    }

    #[test]
    fn sensitivity_requires_scored() {
        assert!(!EngineStatus::DataSet.can_transition_to(&EngineStatus::SensitivityComputed));
        assert!(!EngineStatus::Normalized.can_transition_to(&EngineStatus::SensitivityComputed));
        assert!(EngineStatus::Scored.can_transition_to(&EngineStatus::SensitivityComputed));
        assert!(EngineStatus::SensitivityComputed
            .can_transition_to(&EngineStatus::SensitivityComputed));
    }

    #[test]
    fn scoring_requires_normalized_matrix() {
        assert!(!EngineStatus::DataSet.can_transition_to(&EngineStatus::Scored));
        assert!(EngineStatus::Normalized.can_transition_to(&EngineStatus::Scored));
    }

    #[test]
    fn no_state_is_terminal() {
        assert!(!EngineStatus::Empty.is_terminal());
        assert!(!EngineStatus::SensitivityComputed.is_terminal());
    }

    #[test]
    fn displays_name() {
        assert_eq!(format!("{}", EngineStatus::DataSet), "DataSet");
    }
}
