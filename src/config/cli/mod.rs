//! CLI argument parsing
//!
//! # Usage
//!
//! ```bash
//! vigia baseline --data data/data.csv --out metrics/training_stats.json
//! vigia drift --threshold 3.0 --mode strict --min-batch 30
//! vigia register --accuracy 0.91 --run-id "$GITHUB_RUN_ID"
//! vigia champion --format json
//! ```

mod core;
mod types;

#[cfg(test)]
mod tests;

pub use core::{
    apply_overrides, parse_args, BaselineArgs, Cli, Command, DriftArgs, RegisterArgs,
    RegistryQueryArgs, TrainArgs,
};
pub use types::OutputFormat;
