//! Z-score drift scorer.

use tracing::debug;

use super::observation::ObservationBatch;
use super::types::{DriftOutcome, DriftReport, FeatureDrift, ThresholdMode};
use crate::baseline::{running_mean, FeatureStats};
use crate::error::{Error, Result};

/// Scores a live batch against a baseline snapshot.
///
/// Holds no mutable state: the same scorer can be shared across threads and
/// applied to independent (snapshot, batch) pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct DriftScorer {
    threshold: f64,
    mode: ThresholdMode,
    min_batch: usize,
}

impl DriftScorer {
    /// Create a scorer. Any non-empty batch is scored until
    /// [`with_min_batch`](Self::with_min_batch) raises the minimum.
    pub fn new(threshold: f64, mode: ThresholdMode) -> Self {
        Self { threshold, mode, min_batch: 1 }
    }

    /// Skip scoring batches smaller than `min_batch`
    pub fn with_min_batch(mut self, min_batch: usize) -> Self {
        self.min_batch = min_batch.max(1);
        self
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn mode(&self) -> ThresholdMode {
        self.mode
    }

    pub fn min_batch(&self) -> usize {
        self.min_batch
    }

    /// Score a batch.
    ///
    /// Values beyond the baseline's feature count are ignored. A row with
    /// fewer values fails the whole pass with `MalformedObservation`.
    pub fn score(&self, stats: &FeatureStats, batch: &ObservationBatch) -> Result<DriftOutcome> {
        let dropped_rows = batch.dropped_rows();
        if batch.is_empty() {
            return Ok(DriftOutcome::NoVerdict { dropped_rows });
        }

        let expected = stats.len();
        if let Some(short) = batch.observations().iter().find(|o| o.values.len() < expected) {
            return Err(Error::MalformedObservation {
                row: short.row,
                expected,
                found: short.values.len(),
            });
        }

        if batch.len() < self.min_batch {
            return Ok(DriftOutcome::InsufficientData {
                observed: batch.len(),
                required: self.min_batch,
                dropped_rows,
            });
        }

        let features: Vec<FeatureDrift> = stats
            .feature_order
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let live_mean = running_mean(batch.observations().iter().map(|o| o.values[i]));
                let train_mean = stats.mean(name).unwrap_or(0.0);
                let train_std = stats.std(name).unwrap_or(0.0);
                FeatureDrift {
                    feature: name.clone(),
                    train_mean,
                    train_std,
                    live_mean,
                    z_score: z_score(live_mean, train_mean, train_std),
                }
            })
            .collect();

        let overall_drift = features.iter().map(|f| f.z_score).fold(0.0, f64::max);
        let exceeds_threshold = self.mode.exceeds(overall_drift, self.threshold);
        debug!(overall_drift, threshold = self.threshold, mode = %self.mode, "batch scored");

        Ok(DriftOutcome::Scored(DriftReport {
            features,
            overall_drift,
            threshold: self.threshold,
            mode: self.mode,
            exceeds_threshold,
            observations: batch.len(),
            dropped_rows,
        }))
    }

    /// Score in-memory rows that are already parsed.
    pub fn score_rows(&self, stats: &FeatureStats, rows: &[Vec<f64>]) -> Result<DriftOutcome> {
        self.score(stats, &ObservationBatch::from_rows(rows.iter().cloned()))
    }
}

/// |live - train| / std, defined as 0 when the training std is 0 or NaN.
pub fn z_score(live_mean: f64, train_mean: f64, train_std: f64) -> f64 {
    if train_std == 0.0 || train_std.is_nan() {
        return 0.0;
    }
    (live_mean - train_mean).abs() / train_std
}
