//! In-memory registry store

use std::path::{Path, PathBuf};

use super::traits::RegistryStore;
use super::version::RegistryRecord;
use crate::error::{Error, Result};

/// In-memory registry store for testing
#[derive(Debug, Default, Clone)]
pub struct InMemoryRegistryStore {
    records: Vec<RegistryRecord>,
    corrupt: bool,
}

impl InMemoryRegistryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a history
    #[must_use]
    pub fn with_records(records: Vec<RegistryRecord>) -> Self {
        Self { records, corrupt: false }
    }

    /// Store whose history reads as corrupt until the next save
    #[must_use]
    pub fn corrupted() -> Self {
        Self { records: Vec::new(), corrupt: true }
    }

    pub fn records(&self) -> &[RegistryRecord] {
        &self.records
    }
}

impl RegistryStore for InMemoryRegistryStore {
    fn load(&self) -> Result<Vec<RegistryRecord>> {
        if self.corrupt {
            return Err(Error::CorruptPersistedState {
                path: PathBuf::from(self.location()),
                message: "simulated corruption".to_string(),
            });
        }
        Ok(self.records.clone())
    }

    fn location(&self) -> &Path {
        Path::new("<memory>")
    }

    fn save(&mut self, history: &[RegistryRecord]) -> Result<()> {
        self.records = history.to_vec();
        self.corrupt = false;
        Ok(())
    }
}
