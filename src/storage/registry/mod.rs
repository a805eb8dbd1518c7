//! Model Registry with Champion Tracking
//!
//! Append-only history of evaluated model versions. Each new version is
//! compared against every prior accuracy and flagged as champion when it is at
//! least as good as the best so far.
//!
//! # Example
//!
//! ```no_run
//! use vigia::storage::registry::{JsonFileRegistryStore, ModelRegistry};
//!
//! let mut registry = ModelRegistry::new(JsonFileRegistryStore::new("metrics/model_registry.json"));
//! let registration = registry.register(0.91, "run-42")?;
//! if registration.is_champion() {
//!     println!("{} is the new champion", registration.record.version);
//! }
//! # Ok::<(), vigia::Error>(())
//! ```

mod file;
mod memory;
mod model_registry;
mod traits;
mod version;


pub use file::{JsonFileRegistryStore, DEFAULT_REGISTRY_PATH};
pub use memory::InMemoryRegistryStore;
pub use model_registry::{best_accuracy, ModelRegistry, Registration};
pub use traits::RegistryStore;
pub use version::{RegistryRecord, VersionTag};
