//! vigia: training baselines, live feature drift, and champion model tracking
//!
//! Three independent pieces that only communicate through persisted files:
//!
//! - [`baseline`]: profiles a training table into a [`baseline::FeatureStats`]
//!   snapshot (per-feature mean and population standard deviation).
//! - [`eval::drift`]: scores a batch of live feature vectors against that
//!   snapshot and reports per-feature and overall z-scores.
//! - [`storage::registry`]: an append-only history of evaluated models that
//!   decides whether each new model is the champion.
//!
//! The `vigia` binary wires them into pipeline steps with distinct exit
//! statuses (see [`cli::Outcome`]).

pub mod baseline;
pub mod cli;
pub mod config;
pub mod error;
pub mod eval;
pub mod storage;

pub use error::{Error, Result};
