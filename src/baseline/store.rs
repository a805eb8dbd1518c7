//! Baseline snapshot persistence

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use super::stats::FeatureStats;
use crate::error::{Error, Result};
use crate::storage::write_atomic;

/// Persistence for the single current baseline snapshot.
pub trait BaselineStore {
    /// Load the snapshot, `None` if none has been written yet.
    ///
    /// A snapshot that exists but cannot be parsed, or lists a feature without
    /// a mean or std, is logged and treated as absent.
    fn load(&self) -> Result<Option<FeatureStats>>;

    /// Replace the snapshot.
    fn save(&mut self, stats: &FeatureStats) -> Result<()>;
}

/// JSON file snapshot store.
#[derive(Debug, Clone)]
pub struct JsonFileBaselineStore {
    path: PathBuf,
}

impl JsonFileBaselineStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn discard_corrupt(&self, message: impl std::fmt::Display) -> Option<FeatureStats> {
        warn!(path = %self.path.display(), error = %message, "ignoring corrupt baseline snapshot");
        None
    }
}

impl BaselineStore for JsonFileBaselineStore {
    fn load(&self) -> Result<Option<FeatureStats>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let json = fs::read_to_string(&self.path)
            .map_err(|e| Error::io(format!("reading {}", self.path.display()), e))?;
        let stats: FeatureStats = match serde_json::from_str(&json) {
            Ok(stats) => stats,
            Err(e) => return Ok(self.discard_corrupt(e)),
        };

        let missing = stats.missing_entries();
        if !missing.is_empty() {
            let message = format!("no mean/std for features {missing:?}");
            return Ok(self.discard_corrupt(message));
        }
        Ok(Some(stats))
    }

    fn save(&mut self, stats: &FeatureStats) -> Result<()> {
        let json = serde_json::to_string_pretty(stats)?;
        write_atomic(&self.path, json.as_bytes())
    }
}

/// In-memory snapshot store for testing.
#[derive(Debug, Default, Clone)]
pub struct InMemoryBaselineStore {
    stats: Option<FeatureStats>,
}

impl InMemoryBaselineStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a snapshot
    #[must_use]
    pub fn with_stats(stats: FeatureStats) -> Self {
        Self { stats: Some(stats) }
    }
}

impl BaselineStore for InMemoryBaselineStore {
    fn load(&self) -> Result<Option<FeatureStats>> {
        Ok(self.stats.clone())
    }

    fn save(&mut self, stats: &FeatureStats) -> Result<()> {
        self.stats = Some(stats.clone());
        Ok(())
    }
}
