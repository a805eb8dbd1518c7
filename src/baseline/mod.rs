//! Training Baseline Profiling
//!
//! Computes the reference distribution of the training features: one mean and
//! one population standard deviation per numeric column, plus the column order
//! that live observations are aligned against.
//!
//! # Example
//!
//! ```no_run
//! use vigia::baseline::{BaselineProfiler, JsonFileBaselineStore};
//!
//! let mut store = JsonFileBaselineStore::new("metrics/training_stats.json");
//! let stats = BaselineProfiler::default().profile_to_store("data/data.csv", &mut store)?;
//! println!("features: {:?}", stats.feature_order);
//! # Ok::<(), vigia::Error>(())
//! ```

mod profiler;
mod stats;
mod store;
mod table;


pub(crate) use profiler::running_mean;
pub use profiler::{BaselineProfiler, DEFAULT_LABEL_COLUMN};
pub use stats::FeatureStats;
pub use store::{BaselineStore, InMemoryBaselineStore, JsonFileBaselineStore};
pub use table::Table;
