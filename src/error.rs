//! Error types with actionable diagnostics.
//!
//! Every variant names the offending path or value so a failing pipeline step
//! can be fixed without reading the source.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for vigia operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the profiler, the drift scorer, and the registry.
#[derive(Error, Debug)]
pub enum Error {
    /// A required input file does not exist.
    #[error("Input not found: {path}\n  → Check the path or run the step that produces it")]
    InputNotFound { path: PathBuf },

    /// A value could not be parsed into the expected shape.
    #[error("Malformed input: {message}")]
    MalformedInput { message: String },

    /// A live observation has fewer values than the baseline has features.
    #[error("Malformed observation at row {row}: expected {expected} values, found {found}\n  → The prediction log does not match the baseline feature order")]
    MalformedObservation { row: usize, expected: usize, found: usize },

    /// A required column is absent from a CSV header.
    #[error("Column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },

    /// Every non-label column was non-numeric.
    #[error("No numeric feature columns in {path} (label column: '{label}')\n  → Drift can only be scored on numeric features")]
    NoNumericFeatures { path: PathBuf, label: String },

    /// A column's mean or standard deviation does not fit in an f64.
    #[error("Column '{column}' in {path} has statistics outside the f64 range\n  → Rescale the column before profiling")]
    NonFiniteStatistic { column: String, path: PathBuf },

    /// A persisted snapshot or registry exists but cannot be parsed.
    #[error("Corrupt persisted state in {path}: {message}")]
    CorruptPersistedState { path: PathBuf, message: String },

    /// Accuracy must be a finite number.
    #[error("Invalid accuracy {value}: must be a finite number")]
    InvalidAccuracy { value: f64 },

    /// Configuration value is invalid.
    #[error("Invalid configuration value for '{field}': {message}")]
    Config { field: String, message: String },

    /// External training script failed or could not be started.
    #[error("Training script {script} failed: {message}")]
    TrainingScript { script: PathBuf, message: String },

    /// IO error with context.
    #[error("IO error: {context}\n  Cause: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl Error {
    /// Create an IO error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io { context: context.into(), source }
    }

    /// Create a config error for a named field.
    pub fn config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Config { field: field.into(), message: message.into() }
    }

    /// Get the error code for structured output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InputNotFound { .. } => "E001",
            Self::MalformedInput { .. } => "E010",
            Self::MalformedObservation { .. } => "E011",
            Self::MissingColumn { .. } => "E012",
            Self::NoNumericFeatures { .. } => "E020",
            Self::NonFiniteStatistic { .. } => "E021",
            Self::CorruptPersistedState { .. } => "E030",
            Self::InvalidAccuracy { .. } => "E040",
            Self::Config { .. } => "E041",
            Self::TrainingScript { .. } => "E050",
            Self::Io { .. } => "E060",
            Self::Json(_) | Self::Yaml(_) | Self::Csv(_) => "E061",
        }
    }
}
