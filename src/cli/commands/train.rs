//! Train command implementation
//!
//! Training itself happens in an external script; this only runs it and
//! forwards its exit status.

use std::process::Command;

use tracing::info;

use crate::cli::logging::log;
use crate::cli::{LogLevel, Outcome};
use crate::config::TrainArgs;
use crate::error::{Error, Result};

pub fn run_train(args: &TrainArgs, level: LogLevel) -> Result<Outcome> {
    if !args.script.exists() {
        return Err(Error::InputNotFound { path: args.script.clone() });
    }

    log(
        level,
        LogLevel::Normal,
        &format!("Training: {} {}", args.interpreter, args.script.display()),
    );
    log(level, LogLevel::Verbose, &format!("  Data: {}", args.data.display()));
    log(level, LogLevel::Verbose, &format!("  Output: {}", args.out.display()));

    let status = Command::new(&args.interpreter)
        .arg(&args.script)
        .arg("--data")
        .arg(&args.data)
        .arg("--out")
        .arg(&args.out)
        .status()
        .map_err(|e| Error::TrainingScript {
            script: args.script.clone(),
            message: format!("could not start '{}': {e}", args.interpreter),
        })?;

    info!(script = %args.script.display(), %status, "training script finished");

    if status.success() {
        log(level, LogLevel::Normal, &format!("Model written to {}", args.out.display()));
        Ok(Outcome::Success)
    } else {
        eprintln!("Training script {} failed: {status}", args.script.display());
        Ok(Outcome::TrainingFailed { code: status.code() })
    }
}
