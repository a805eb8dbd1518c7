//! CLI command implementations

mod baseline;
mod champion;
mod drift;
mod history;
mod register;
mod train;


use tracing::debug;

use crate::cli::{LogLevel, Outcome};
use crate::config::{apply_overrides, load_config, validate_config, Cli, Command};
use crate::error::Result;

/// Execute a CLI command based on the parsed arguments.
///
/// Defaults, the optional YAML file, and command-line flags are merged and
/// validated before the command runs.
pub fn run_command(cli: Cli) -> Result<Outcome> {
    let log_level = LogLevel::from_flags(cli.quiet, cli.verbose);

    let mut config = load_config(cli.config.as_deref())?;
    apply_overrides(&mut config, &cli.command);
    validate_config(&config)?;
    debug!(?config, "resolved configuration");

    match cli.command {
        Command::Baseline(_) => baseline::run_baseline(&config.baseline, log_level),
        Command::Drift(args) => drift::run_drift(&config.drift, args.format, log_level),
        Command::Register(args) => register::run_register(&args, &config.registry, log_level),
        Command::Champion(args) => champion::run_champion(args.format, &config.registry, log_level),
        Command::History(args) => history::run_history(args.format, &config.registry, log_level),
        Command::Train(args) => train::run_train(&args, log_level),
    }
}
