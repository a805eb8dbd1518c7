//! Live Feature Drift Scoring
//!
//! Compares the mean of each feature over a batch of live observations with
//! the training baseline, in units of the training standard deviation. The
//! largest per-feature z-score is the batch's overall drift, so a single badly
//! drifted feature is enough to trip the threshold.
//!
//! ## Example
//!
//! ```no_run
//! use vigia::baseline::{BaselineStore, JsonFileBaselineStore};
//! use vigia::eval::drift::{DriftScorer, PredictionLog, ThresholdMode};
//!
//! let stats = JsonFileBaselineStore::new("metrics/training_stats.json").load()?.unwrap();
//! let batch = PredictionLog::new("logs/predictions.csv").read_batch()?;
//! let outcome = DriftScorer::new(0.5, ThresholdMode::Inclusive).score(&stats, &batch)?;
//! println!("drift detected: {}", outcome.drift_detected());
//! # Ok::<(), vigia::Error>(())
//! ```

mod observation;
mod scorer;
mod types;

#[cfg(test)]
mod tests;

pub use observation::{
    parse_feature_vector, Observation, ObservationBatch, PredictionLog, DEFAULT_FEATURES_COLUMN,
};
pub use scorer::{z_score, DriftScorer};
pub use types::{DriftOutcome, DriftReport, FeatureDrift, ThresholdMode};
