//! Drift command implementation

use std::path::Path;

use tracing::warn;

use crate::baseline::{BaselineStore, JsonFileBaselineStore};
use crate::cli::logging::log;
use crate::cli::{LogLevel, Outcome};
use crate::config::{DriftConfig, OutputFormat};
use crate::error::{Error, Result};
use crate::eval::drift::{DriftOutcome, DriftScorer, PredictionLog};
use crate::storage::write_atomic;

pub fn run_drift(config: &DriftConfig, format: OutputFormat, level: LogLevel) -> Result<Outcome> {
    let stats = JsonFileBaselineStore::new(&config.stats)
        .load()?
        .ok_or_else(|| Error::InputNotFound { path: config.stats.clone() })?;

    let batch = PredictionLog::new(&config.logs)
        .with_features_column(config.features_column.as_str())
        .read_batch()?;

    let scorer = DriftScorer::new(config.threshold, config.mode).with_min_batch(config.min_batch);
    let outcome = scorer.score(&stats, &batch)?;

    if let Some(path) = &config.report {
        write_report(path, &outcome, level);
    }

    match format.render(&outcome)? {
        Some(rendered) => println!("{rendered}"),
        None => print_text(&outcome, level),
    }

    Ok(match &outcome {
        DriftOutcome::Scored(report) if report.exceeds_threshold => Outcome::DriftDetected,
        DriftOutcome::Scored(_) => Outcome::Success,
        DriftOutcome::NoVerdict { .. } | DriftOutcome::InsufficientData { .. } => {
            Outcome::NothingToEvaluate
        }
    })
}

/// Side-channel report; a failed write never changes the verdict.
fn write_report(path: &Path, outcome: &DriftOutcome, level: LogLevel) {
    let written = serde_json::to_vec_pretty(outcome)
        .map_err(Error::from)
        .and_then(|bytes| write_atomic(path, &bytes));

    match written {
        Ok(()) => log(level, LogLevel::Verbose, &format!("Report written to {}", path.display())),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to write drift report");
            eprintln!("Warning: drift report not written to {}: {e}", path.display());
        }
    }
}

fn print_text(outcome: &DriftOutcome, level: LogLevel) {
    match outcome {
        DriftOutcome::Scored(report) => {
            log(level, LogLevel::Normal, "Drift Results:");
            for feature in &report.features {
                log(
                    level,
                    LogLevel::Normal,
                    &format!(
                        "  {}: z={:.4} (train mean {:.4}, std {:.4}; live mean {:.4})",
                        feature.feature,
                        feature.z_score,
                        feature.train_mean,
                        feature.train_std,
                        feature.live_mean
                    ),
                );
            }
            log(
                level,
                LogLevel::Normal,
                &format!(
                    "  Overall drift: {:.4} (threshold {} {}, {} observations)",
                    report.overall_drift,
                    report.mode.as_str(),
                    report.threshold,
                    report.observations
                ),
            );
            if report.dropped_rows > 0 {
                log(
                    level,
                    LogLevel::Normal,
                    &format!("  Dropped rows: {}", report.dropped_rows),
                );
            }
            let status = if report.exceeds_threshold { "DRIFT DETECTED" } else { "NO DRIFT" };
            log(level, LogLevel::Normal, &format!("  Status: {status}"));
        }
        DriftOutcome::NoVerdict { dropped_rows } => {
            log(
                level,
                LogLevel::Normal,
                &format!(
                    "No verdict: the prediction log has no usable observations ({dropped_rows} rows dropped)"
                ),
            );
        }
        DriftOutcome::InsufficientData { observed, required, dropped_rows } => {
            log(
                level,
                LogLevel::Normal,
                &format!(
                    "Insufficient data: {observed} observations, {required} required ({dropped_rows} rows dropped)"
                ),
            );
        }
    }
}
