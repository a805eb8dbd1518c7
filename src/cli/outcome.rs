//! Command outcomes and their process exit statuses

use std::process::ExitCode;

/// Result of a command that ran to completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Success, no drift, or a new champion
    Success,
    /// Drift score crossed the threshold
    DriftDetected,
    /// No verdict, insufficient data, or an empty registry
    NothingToEvaluate,
    /// Model was registered but did not beat the previous best
    NotChampion,
    /// External training script exited unsuccessfully
    TrainingFailed { code: Option<i32> },
}

impl Outcome {
    /// Status reported to the calling pipeline
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Success => 0,
            Outcome::DriftDetected => 2,
            Outcome::NothingToEvaluate => 3,
            Outcome::NotChampion => 4,
            // killed by a signal, or a code outside the u8 range
            Outcome::TrainingFailed { code } => code
                .and_then(|c| u8::try_from(c).ok())
                .filter(|c| *c != 0)
                .unwrap_or(1),
        }
    }
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        ExitCode::from(outcome.exit_code())
    }
}
