//! Core CLI types - Cli, Command, and argument structs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::types::OutputFormat;
use crate::config::schema::VigiaConfig;
use crate::eval::drift::ThresholdMode;

/// vigia: training baselines, drift scoring, and champion tracking
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "vigia")]
#[command(version)]
#[command(about = "Profile training baselines, score live feature drift, and track champion models")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// YAML configuration file
    #[arg(short, long, global = true, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Compute the training baseline snapshot
    Baseline(BaselineArgs),

    /// Score the prediction log against the baseline
    Drift(DriftArgs),

    /// Register an evaluated model and report champion status
    Register(RegisterArgs),

    /// Show the current champion (best accuracy now)
    Champion(RegistryQueryArgs),

    /// List every registered model version
    History(RegistryQueryArgs),

    /// Run an external training script
    Train(TrainArgs),
}

/// Arguments for the baseline command
#[derive(Parser, Debug, Clone, PartialEq, Default)]
pub struct BaselineArgs {
    /// Training table (CSV with header)
    #[arg(long, value_name = "CSV")]
    pub data: Option<PathBuf>,

    /// Where to write the snapshot
    #[arg(short, long, value_name = "JSON")]
    pub out: Option<PathBuf>,

    /// Label column excluded from the statistics
    #[arg(long)]
    pub label_column: Option<String>,
}

/// Arguments for the drift command
#[derive(Parser, Debug, Clone, PartialEq, Default)]
pub struct DriftArgs {
    /// Baseline snapshot
    #[arg(long, value_name = "JSON")]
    pub stats: Option<PathBuf>,

    /// Prediction log (CSV)
    #[arg(long, value_name = "CSV")]
    pub logs: Option<PathBuf>,

    /// Overall drift threshold
    #[arg(short, long)]
    pub threshold: Option<f64>,

    /// Threshold comparison: inclusive (>=) or strict (>)
    #[arg(short, long)]
    pub mode: Option<ThresholdMode>,

    /// Skip scoring when fewer observations are available
    #[arg(long)]
    pub min_batch: Option<usize>,

    /// Prediction log column holding the feature vector
    #[arg(long)]
    pub features_column: Option<String>,

    /// Also write the outcome as JSON to this path
    #[arg(long, value_name = "JSON")]
    pub report: Option<PathBuf>,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the register command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct RegisterArgs {
    /// Evaluation accuracy of the new model
    #[arg(short, long, allow_negative_numbers = true)]
    pub accuracy: f64,

    /// Training run identifier
    #[arg(long, default_value = "manual_run")]
    pub run_id: String,

    /// Registry history file
    #[arg(long, value_name = "JSON")]
    pub registry: Option<PathBuf>,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the champion and history commands
#[derive(Parser, Debug, Clone, PartialEq, Default)]
pub struct RegistryQueryArgs {
    /// Registry history file
    #[arg(long, value_name = "JSON")]
    pub registry: Option<PathBuf>,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the train command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct TrainArgs {
    /// Training script to run
    #[arg(long)]
    pub script: PathBuf,

    /// Training data passed to the script as --data
    #[arg(long)]
    pub data: PathBuf,

    /// Model output path passed to the script as --out
    #[arg(long)]
    pub out: PathBuf,

    /// Interpreter used to run the script
    #[arg(long, default_value = "python3")]
    pub interpreter: String,
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}

/// Apply command-line overrides to the loaded configuration
pub fn apply_overrides(config: &mut VigiaConfig, command: &Command) {
    match command {
        Command::Baseline(args) => {
            if let Some(data) = &args.data {
                config.baseline.data = data.clone();
            }
            if let Some(out) = &args.out {
                config.baseline.out = out.clone();
            }
            if let Some(label) = &args.label_column {
                config.baseline.label_column = label.clone();
            }
        }
        Command::Drift(args) => {
            let drift = &mut config.drift;
            if let Some(stats) = &args.stats {
                drift.stats = stats.clone();
            }
            if let Some(logs) = &args.logs {
                drift.logs = logs.clone();
            }
            if let Some(threshold) = args.threshold {
                drift.threshold = threshold;
            }
            if let Some(mode) = args.mode {
                drift.mode = mode;
            }
            if let Some(min_batch) = args.min_batch {
                drift.min_batch = min_batch;
            }
            if let Some(column) = &args.features_column {
                drift.features_column = column.clone();
            }
            if args.report.is_some() {
                drift.report = args.report.clone();
            }
        }
        Command::Register(RegisterArgs { registry, .. })
        | Command::Champion(RegistryQueryArgs { registry, .. })
        | Command::History(RegistryQueryArgs { registry, .. }) => {
            if let Some(path) = registry {
                config.registry.path = path.clone();
            }
        }
        // Training paths are CLI-only and not part of the config file
        Command::Train(_) => {}
    }
}
