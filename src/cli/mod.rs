//! CLI module for vigia
//!
//! This module contains all CLI command handlers and utilities.

mod commands;
mod logging;
mod outcome;

pub use commands::run_command;
pub use logging::{init_tracing, log, LogLevel, LOG_ENV};
pub use outcome::Outcome;

// Re-export Cli from config for convenience
pub use crate::config::Cli;
