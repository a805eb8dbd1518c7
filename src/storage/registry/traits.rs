//! Registry persistence trait

use std::path::Path;

use super::version::RegistryRecord;
use crate::error::Result;

/// Storage for the full registry history.
pub trait RegistryStore {
    /// Load every record, oldest first. An absent history is empty.
    ///
    /// Fails with `CorruptPersistedState` when a history exists but cannot be
    /// parsed.
    fn load(&self) -> Result<Vec<RegistryRecord>>;

    /// Where the history lives, for diagnostics.
    fn location(&self) -> &Path;

    /// Replace the persisted history.
    fn save(&mut self, history: &[RegistryRecord]) -> Result<()>;
}
