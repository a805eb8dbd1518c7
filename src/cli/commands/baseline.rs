//! Baseline command implementation

use crate::baseline::{BaselineProfiler, JsonFileBaselineStore};
use crate::cli::logging::log;
use crate::cli::{LogLevel, Outcome};
use crate::config::BaselineConfig;
use crate::error::Result;

pub fn run_baseline(config: &BaselineConfig, level: LogLevel) -> Result<Outcome> {
    log(level, LogLevel::Normal, &format!("Profiling: {}", config.data.display()));

    let profiler = BaselineProfiler::new(config.label_column.as_str());
    let mut store = JsonFileBaselineStore::new(&config.out);
    let stats = profiler.profile_to_store(&config.data, &mut store)?;

    for name in &stats.feature_order {
        let mean = stats.mean(name).unwrap_or(0.0);
        let std = stats.std(name).unwrap_or(0.0);
        log(level, LogLevel::Verbose, &format!("  {name}: mean={mean:.4} std={std:.4}"));
    }

    log(
        level,
        LogLevel::Normal,
        &format!(
            "Baseline written to {} ({} features, {} rows)",
            config.out.display(),
            stats.len(),
            stats.row_count.unwrap_or(0)
        ),
    );

    Ok(Outcome::Success)
}
