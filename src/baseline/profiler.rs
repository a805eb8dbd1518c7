//! Baseline profiler

use std::path::Path;

use tracing::{debug, info, warn};

use super::stats::FeatureStats;
use super::store::BaselineStore;
use super::table::Table;
use crate::error::{Error, Result};

/// Label column excluded from the baseline when none is configured.
pub const DEFAULT_LABEL_COLUMN: &str = "target";

/// Computes `FeatureStats` from a training table.
#[derive(Debug, Clone)]
pub struct BaselineProfiler {
    label_column: String,
}

impl Default for BaselineProfiler {
    fn default() -> Self {
        Self::new(DEFAULT_LABEL_COLUMN)
    }
}

impl BaselineProfiler {
    /// Create a profiler that excludes `label_column` from the statistics.
    pub fn new(label_column: impl Into<String>) -> Self {
        Self { label_column: label_column.into() }
    }

    /// Name of the excluded label column
    pub fn label_column(&self) -> &str {
        &self.label_column
    }

    /// Profile a CSV file on disk.
    pub fn profile_path(&self, path: impl AsRef<Path>) -> Result<FeatureStats> {
        let path = path.as_ref();
        let table = Table::from_path(path)?;
        let mut stats = self.profile_table(&table, path)?;
        stats.source = Some(path.display().to_string());
        Ok(stats)
    }

    /// Profile a CSV file and persist the snapshot, replacing any previous one.
    pub fn profile_to_store<S: BaselineStore + ?Sized>(
        &self,
        path: impl AsRef<Path>,
        store: &mut S,
    ) -> Result<FeatureStats> {
        let stats = self.profile_path(path)?;
        store.save(&stats)?;
        Ok(stats)
    }

    /// Profile an already loaded table. `source` is only used in diagnostics.
    pub fn profile_table(&self, table: &Table, source: &Path) -> Result<FeatureStats> {
        let label_idx = table.column_index(&self.label_column);
        if label_idx.is_none() {
            warn!(
                label = %self.label_column,
                table = %source.display(),
                "label column not present; profiling every numeric column"
            );
        }

        let mut features = Vec::new();
        for (idx, name) in table.headers().iter().enumerate() {
            if Some(idx) == label_idx {
                continue;
            }
            match table.numeric_column(idx) {
                Some(values) => {
                    let (mean, std) = mean_and_population_std(&values);
                    if !mean.is_finite() || !std.is_finite() {
                        return Err(Error::NonFiniteStatistic {
                            column: name.clone(),
                            path: source.to_path_buf(),
                        });
                    }
                    features.push((name.clone(), mean, std));
                }
                None => debug!(column = %name, "skipping non-numeric column"),
            }
        }

        if features.is_empty() {
            return Err(Error::NoNumericFeatures {
                path: source.to_path_buf(),
                label: self.label_column.clone(),
            });
        }

        let mut stats = FeatureStats::from_features(features);
        stats.row_count = Some(table.row_count());
        info!(features = stats.len(), rows = table.row_count(), "baseline profiled");
        Ok(stats)
    }
}

/// Mean and population standard deviation (divisor = number of values).
///
/// Two passes over the data; `values` must be non-empty. Deviations are
/// halved and rescaled by their largest magnitude, so finite inputs near
/// `f64::MAX` never overflow.
pub(crate) fn mean_and_population_std(values: &[f64]) -> (f64, f64) {
    let mean = running_mean(values.iter().copied());

    let half_devs: Vec<f64> = values.iter().map(|v| v / 2.0 - mean / 2.0).collect();
    let scale = half_devs.iter().fold(0.0f64, |m, d| m.max(d.abs()));
    if scale == 0.0 {
        return (mean, 0.0);
    }
    let n = values.len() as f64;
    let ratio = half_devs.iter().map(|d| (d / scale).powi(2)).sum::<f64>() / n;
    (mean, 2.0 * scale * ratio.sqrt())
}

/// Incremental mean; exact when every value is identical.
///
/// The step is taken on halved values so `v - mean` cannot overflow.
pub(crate) fn running_mean(values: impl Iterator<Item = f64>) -> f64 {
    values
        .enumerate()
        .fold(0.0, |mean, (k, v)| mean + (v / 2.0 - mean / 2.0) / (k + 1) as f64 * 2.0)
}
