//! vigia CLI
//!
//! # Usage
//!
//! ```bash
//! # Snapshot the training distribution
//! vigia baseline --data data/data.csv --out metrics/training_stats.json
//!
//! # Score the live prediction log (exit 2 on drift, 3 when nothing to score)
//! vigia drift --threshold 0.5
//!
//! # Register an evaluated model (exit 4 when it is not the champion)
//! vigia register --accuracy 0.91 --run-id nightly-42
//!
//! # Inspect the registry
//! vigia champion
//! vigia history --format json
//! ```

use clap::Parser;
use std::process::ExitCode;
use vigia::cli::{init_tracing, run_command, Cli, LogLevel};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(LogLevel::from_flags(cli.quiet, cli.verbose));

    match run_command(cli) {
        Ok(outcome) => outcome.into(),
        Err(e) => {
            eprintln!("Error [{}]: {e}", e.code());
            ExitCode::FAILURE
        }
    }
}
