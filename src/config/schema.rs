//! YAML schema for the monitoring configuration
//!
//! Every field is optional in the file; missing fields fall back to the same
//! defaults the CLI uses.
//!
//! ```yaml
//! baseline:
//!   data: data/data.csv
//!   out: metrics/training_stats.json
//!   label_column: target
//! drift:
//!   stats: metrics/training_stats.json
//!   logs: logs/predictions.csv
//!   threshold: 3.0
//!   mode: strict
//!   min_batch: 30
//! registry:
//!   path: metrics/model_registry.json
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::baseline::DEFAULT_LABEL_COLUMN;
use crate::error::{Error, Result};
use crate::eval::drift::{ThresholdMode, DEFAULT_FEATURES_COLUMN};
use crate::storage::registry::DEFAULT_REGISTRY_PATH;

/// Default training table
pub const DEFAULT_DATA_PATH: &str = "data/data.csv";
/// Default baseline snapshot location
pub const DEFAULT_STATS_PATH: &str = "metrics/training_stats.json";
/// Default prediction log location
pub const DEFAULT_LOGS_PATH: &str = "logs/predictions.csv";
/// Default drift threshold (inclusive mode)
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Complete monitoring configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VigiaConfig {
    /// Baseline profiling
    pub baseline: BaselineConfig,
    /// Drift scoring
    pub drift: DriftConfig,
    /// Model registry
    pub registry: RegistryConfig,
}

/// Baseline profiling configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BaselineConfig {
    /// Training table (CSV)
    pub data: PathBuf,
    /// Snapshot output path
    pub out: PathBuf,
    /// Column excluded from the statistics
    pub label_column: String,
}

impl Default for BaselineConfig {
    fn default() -> Self {
        Self {
            data: PathBuf::from(DEFAULT_DATA_PATH),
            out: PathBuf::from(DEFAULT_STATS_PATH),
            label_column: DEFAULT_LABEL_COLUMN.to_string(),
        }
    }
}

/// Drift scoring configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DriftConfig {
    /// Baseline snapshot to score against
    pub stats: PathBuf,
    /// Prediction log (CSV)
    pub logs: PathBuf,
    /// Column holding the serialized feature vector
    pub features_column: String,
    /// Overall drift threshold
    pub threshold: f64,
    /// Threshold comparison
    pub mode: ThresholdMode,
    /// Smallest batch that is scored
    pub min_batch: usize,
    /// Optional JSON report written after scoring
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<PathBuf>,
}

impl Default for DriftConfig {
    fn default() -> Self {
        Self {
            stats: PathBuf::from(DEFAULT_STATS_PATH),
            logs: PathBuf::from(DEFAULT_LOGS_PATH),
            features_column: DEFAULT_FEATURES_COLUMN.to_string(),
            threshold: DEFAULT_THRESHOLD,
            mode: ThresholdMode::Inclusive,
            min_batch: 1,
            report: None,
        }
    }
}

/// Model registry configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
    /// Registry history file
    pub path: PathBuf,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self { path: PathBuf::from(DEFAULT_REGISTRY_PATH) }
    }
}

/// Load the configuration file, or the defaults when no file is given.
pub fn load_config(path: Option<&Path>) -> Result<VigiaConfig> {
    let Some(path) = path else {
        return Ok(VigiaConfig::default());
    };
    if !path.exists() {
        return Err(Error::InputNotFound { path: path.to_path_buf() });
    }
    let yaml = fs::read_to_string(path)
        .map_err(|e| Error::io(format!("reading config {}", path.display()), e))?;
    parse_config(&yaml)
}

/// Parse configuration YAML
pub fn parse_config(yaml: &str) -> Result<VigiaConfig> {
    if yaml.trim().is_empty() {
        return Ok(VigiaConfig::default());
    }
    Ok(serde_yaml::from_str(yaml)?)
}
