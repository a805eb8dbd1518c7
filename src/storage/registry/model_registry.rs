//! Champion-tracking model registry

use std::path::Path;

use serde::Serialize;
use tracing::{info, warn};

use super::traits::RegistryStore;
use super::version::RegistryRecord;
use crate::error::{Error, Result};

/// Outcome of registering an evaluated model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Registration {
    /// The appended record
    pub record: RegistryRecord,
    /// Best accuracy among the records before this one (0.0 for an empty history)
    pub previous_best: f64,
}

impl Registration {
    pub fn is_champion(&self) -> bool {
        self.record.is_champion
    }
}

/// Best accuracy in a history, 0.0 when the history is empty.
pub fn best_accuracy(history: &[RegistryRecord]) -> f64 {
    history.iter().map(|r| r.accuracy).reduce(f64::max).unwrap_or(0.0)
}

/// Version number following `prior` records.
pub(crate) fn next_version(prior: usize, location: &Path) -> Result<u32> {
    prior
        .checked_add(1)
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| Error::CorruptPersistedState {
            path: location.to_path_buf(),
            message: format!("{prior} records exceed the version range"),
        })
}

/// Append-only registry of evaluated model versions.
///
/// Each record's `is_champion` flag is fixed when it is written: it says the
/// record was the best so far at that moment. Later records never revise
/// earlier flags, so several records may carry `is_champion = true`. Use
/// [`current_champion`](Self::current_champion) for the best record now.
#[derive(Debug)]
pub struct ModelRegistry<S> {
    store: S,
}

impl<S: RegistryStore> ModelRegistry<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Append a record for an evaluated model.
    ///
    /// The version is the history length plus one. The model is champion when
    /// its accuracy is at least the best prior accuracy, so ties go to the
    /// newer model.
    pub fn register(&mut self, accuracy: f64, run_id: &str) -> Result<Registration> {
        if !accuracy.is_finite() {
            return Err(Error::InvalidAccuracy { value: accuracy });
        }

        let mut history = self.load_history()?;
        let previous_best = best_accuracy(&history);
        let is_champion = accuracy >= previous_best;
        let version = next_version(history.len(), self.store.location())?;

        let record = RegistryRecord::new(version, accuracy, run_id, is_champion);
        history.push(record.clone());
        self.store.save(&history)?;

        info!(version = %record.version, accuracy, run_id, is_champion, "model registered");
        Ok(Registration { record, previous_best })
    }

    /// Every record, oldest first.
    pub fn history(&self) -> Result<Vec<RegistryRecord>> {
        self.load_history()
    }

    /// Most recently written record
    pub fn latest(&self) -> Result<Option<RegistryRecord>> {
        Ok(self.load_history()?.pop())
    }

    /// Record with the highest accuracy now; the newest wins ties.
    pub fn current_champion(&self) -> Result<Option<RegistryRecord>> {
        let history = self.load_history()?;
        Ok(history.into_iter().reduce(|best, r| if r.accuracy >= best.accuracy { r } else { best }))
    }

    fn load_history(&self) -> Result<Vec<RegistryRecord>> {
        match self.store.load() {
            Ok(history) => Ok(history),
            Err(Error::CorruptPersistedState { path, message }) => {
                warn!(
                    path = %path.display(),
                    error = %message,
                    "registry history is unreadable; continuing with an empty history"
                );
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }
}
