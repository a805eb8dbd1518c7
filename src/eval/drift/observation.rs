//! Live observations and the prediction log they are read from.
//!
//! The log is a CSV file with a header row. One column (by default
//! `features`) holds each request's feature vector as a JSON array, e.g.
//! `"[5.1, 3.5, 1.4, 0.2]"`.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::debug;

use crate::error::{Error, Result};

/// Default name of the feature vector column
pub const DEFAULT_FEATURES_COLUMN: &str = "features";

/// One live feature vector, positionally aligned to the baseline feature order
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    /// 1-based data row in the source log
    pub row: usize,
    /// Feature values
    pub values: Vec<f64>,
}

/// Parsed observations plus the number of rows that failed to parse
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObservationBatch {
    observations: Vec<Observation>,
    dropped_rows: usize,
}

impl ObservationBatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Batch from in-memory rows, numbered from 1
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = Vec<f64>>,
    {
        let observations = rows
            .into_iter()
            .enumerate()
            .map(|(idx, values)| Observation { row: idx + 1, values })
            .collect();
        Self { observations, dropped_rows: 0 }
    }

    pub fn push(&mut self, observation: Observation) {
        self.observations.push(observation);
    }

    /// Record a row that could not be parsed
    pub fn record_dropped(&mut self) {
        self.dropped_rows += 1;
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn dropped_rows(&self) -> usize {
        self.dropped_rows
    }
}

/// Parse a serialized feature vector such as `"[5.1, 3.5]"`.
///
/// The value must be a JSON array of numbers. Anything else, including
/// nested arrays, strings, or non-finite literals, is `MalformedInput`.
pub fn parse_feature_vector(raw: &str) -> Result<Vec<f64>> {
    serde_json::from_str::<Vec<f64>>(raw.trim()).map_err(|e| Error::MalformedInput {
        message: format!("'{raw}' is not a numeric vector: {e}"),
    })
}

/// Rolling prediction log on disk.
#[derive(Debug, Clone)]
pub struct PredictionLog {
    path: PathBuf,
    features_column: String,
}

impl PredictionLog {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            features_column: DEFAULT_FEATURES_COLUMN.to_string(),
        }
    }

    /// Use a different column for the feature vector
    pub fn with_features_column(mut self, column: impl Into<String>) -> Self {
        self.features_column = column.into();
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every row into a batch.
    ///
    /// Rows whose feature vector does not parse are dropped and counted. A
    /// log with no header is an empty batch; a header without the feature
    /// column is `MissingColumn`.
    pub fn read_batch(&self) -> Result<ObservationBatch> {
        if !self.path.exists() {
            return Err(Error::InputNotFound { path: self.path.clone() });
        }
        let file = File::open(&self.path)
            .map_err(|e| Error::io(format!("opening {}", self.path.display()), e))?;
        let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(file);

        let headers = rdr.headers()?.clone();
        let mut batch = ObservationBatch::new();
        if headers.is_empty() {
            return Ok(batch);
        }
        let column = headers.iter().position(|h| h.trim() == self.features_column).ok_or_else(
            || Error::MissingColumn {
                column: self.features_column.clone(),
                path: self.path.clone(),
            },
        )?;

        for (idx, record) in rdr.records().enumerate() {
            let row = idx + 1;
            let parsed = match record {
                Ok(record) => match record.get(column) {
                    Some(raw) => parse_feature_vector(raw),
                    None => Err(Error::MalformedInput { message: "missing feature column".into() }),
                },
                Err(e) => Err(Error::from(e)),
            };
            match parsed {
                Ok(values) => batch.push(Observation { row, values }),
                Err(e) => {
                    debug!(row, error = %e, "dropping prediction log row");
                    batch.record_dropped();
                }
            }
        }
        Ok(batch)
    }

    /// Append one prediction to the log, writing the header on first use.
    pub fn append(&self, features: &[f64], prediction: &str) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::io(format!("creating directory {}", parent.display()), e))?;
        }
        let is_new = !self.path.exists()
            || std::fs::metadata(&self.path).map(|m| m.len() == 0).unwrap_or(true);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| Error::io(format!("opening {}", self.path.display()), e))?;

        let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(file);
        if is_new {
            wtr.write_record(["timestamp", self.features_column.as_str(), "prediction"])?;
        }
        let vector = serde_json::to_string(features)?;
        wtr.write_record([Utc::now().to_rfc3339().as_str(), vector.as_str(), prediction])?;
        wtr.flush().map_err(|e| Error::io(format!("appending to {}", self.path.display()), e))?;
        Ok(())
    }
}
