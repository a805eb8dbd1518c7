//! Drift scoring result types.

use serde::{Deserialize, Serialize};

/// How `overall_drift` is compared against the threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThresholdMode {
    /// Drift when `overall_drift >= threshold`
    #[default]
    Inclusive,
    /// Drift when `overall_drift > threshold`
    Strict,
}

impl ThresholdMode {
    /// Check if `value` trips `threshold` under this mode
    pub fn exceeds(&self, value: f64, threshold: f64) -> bool {
        match self {
            ThresholdMode::Inclusive => value >= threshold,
            ThresholdMode::Strict => value > threshold,
        }
    }

    /// Get the comparison operator
    pub fn as_str(&self) -> &'static str {
        match self {
            ThresholdMode::Inclusive => ">=",
            ThresholdMode::Strict => ">",
        }
    }
}

impl std::str::FromStr for ThresholdMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "inclusive" | ">=" => Ok(ThresholdMode::Inclusive),
            "strict" | ">" => Ok(ThresholdMode::Strict),
            _ => Err(format!("Unknown threshold mode: {s}. Valid modes: inclusive, strict")),
        }
    }
}

impl std::fmt::Display for ThresholdMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThresholdMode::Inclusive => write!(f, "inclusive"),
            ThresholdMode::Strict => write!(f, "strict"),
        }
    }
}

/// Drift of a single feature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureDrift {
    /// Feature name
    pub feature: String,
    /// Training mean
    pub train_mean: f64,
    /// Training population standard deviation
    pub train_std: f64,
    /// Mean over the live batch
    pub live_mean: f64,
    /// |live_mean - train_mean| / train_std, 0 when train_std is 0 or NaN
    pub z_score: f64,
}

/// Drift of a live batch against the baseline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriftReport {
    /// Per-feature drift in baseline feature order
    pub features: Vec<FeatureDrift>,
    /// Maximum per-feature z-score
    pub overall_drift: f64,
    /// Threshold the report was judged against
    pub threshold: f64,
    /// Comparison used against the threshold
    pub mode: ThresholdMode,
    /// Whether `overall_drift` trips the threshold
    pub exceeds_threshold: bool,
    /// Observations scored
    pub observations: usize,
    /// Log rows dropped because they did not parse
    pub dropped_rows: usize,
}

impl DriftReport {
    /// z-score of a named feature
    pub fn z_score(&self, feature: &str) -> Option<f64> {
        self.features.iter().find(|f| f.feature == feature).map(|f| f.z_score)
    }

    /// Feature with the highest z-score
    pub fn worst_feature(&self) -> Option<&FeatureDrift> {
        self.features.iter().max_by(|a, b| a.z_score.total_cmp(&b.z_score))
    }
}

/// Result of a scoring pass.
///
/// Only `Scored` carries a verdict. The other two variants mean there was
/// nothing trustworthy to evaluate and must not be read as "no drift".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DriftOutcome {
    /// Batch was scored
    Scored(DriftReport),
    /// No parseable observations
    NoVerdict { dropped_rows: usize },
    /// Fewer observations than the configured minimum batch
    InsufficientData { observed: usize, required: usize, dropped_rows: usize },
}

impl DriftOutcome {
    /// The report, if the batch was scored
    pub fn report(&self) -> Option<&DriftReport> {
        match self {
            DriftOutcome::Scored(report) => Some(report),
            _ => None,
        }
    }

    /// Whether a scored report tripped the threshold
    pub fn drift_detected(&self) -> bool {
        self.report().is_some_and(|r| r.exceeds_threshold)
    }

    /// Rows dropped while parsing the batch
    pub fn dropped_rows(&self) -> usize {
        match self {
            DriftOutcome::Scored(report) => report.dropped_rows,
            DriftOutcome::NoVerdict { dropped_rows }
            | DriftOutcome::InsufficientData { dropped_rows, .. } => *dropped_rows,
        }
    }
}
