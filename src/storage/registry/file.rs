//! JSON file registry store

use std::fs;
use std::path::{Path, PathBuf};

use super::traits::RegistryStore;
use super::version::RegistryRecord;
use crate::error::{Error, Result};
use crate::storage::write_atomic;

/// Default location of the registry file
pub const DEFAULT_REGISTRY_PATH: &str = "metrics/model_registry.json";

/// Registry persisted as a pretty-printed JSON array.
///
/// Every save rewrites the whole file through a temp file and rename, so a
/// crash mid-write leaves the previous history intact. Assumes a single
/// writer at a time.
#[derive(Debug, Clone)]
pub struct JsonFileRegistryStore {
    path: PathBuf,
}

impl JsonFileRegistryStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonFileRegistryStore {
    fn default() -> Self {
        Self::new(DEFAULT_REGISTRY_PATH)
    }
}

impl RegistryStore for JsonFileRegistryStore {
    fn load(&self) -> Result<Vec<RegistryRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let bytes = fs::read(&self.path)
            .map_err(|e| Error::io(format!("reading {}", self.path.display()), e))?;
        serde_json::from_slice(&bytes).map_err(|e| Error::CorruptPersistedState {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    fn location(&self) -> &Path {
        &self.path
    }

    fn save(&mut self, history: &[RegistryRecord]) -> Result<()> {
        let json = serde_json::to_string_pretty(history)?;
        write_atomic(&self.path, json.as_bytes())
    }
}
