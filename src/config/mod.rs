//! Configuration: YAML schema, validation, and command-line parsing
//!
//! Values resolve in three layers: built-in defaults, an optional YAML file
//! passed with `--config`, then command-line flags.

mod cli;
mod schema;
mod validate;

pub use cli::{
    apply_overrides, parse_args, BaselineArgs, Cli, Command, DriftArgs, OutputFormat,
    RegisterArgs, RegistryQueryArgs, TrainArgs,
};
pub use schema::{
    load_config, parse_config, BaselineConfig, DriftConfig, RegistryConfig, VigiaConfig,
    DEFAULT_DATA_PATH, DEFAULT_LOGS_PATH, DEFAULT_STATS_PATH, DEFAULT_THRESHOLD,
};
pub use validate::{validate_config, ValidationError};
