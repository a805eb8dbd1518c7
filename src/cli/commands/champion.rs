//! Champion command implementation

use crate::cli::logging::log;
use crate::cli::{LogLevel, Outcome};
use crate::config::{OutputFormat, RegistryConfig};
use crate::error::Result;
use crate::storage::registry::{JsonFileRegistryStore, ModelRegistry};

pub fn run_champion(format: OutputFormat, config: &RegistryConfig, level: LogLevel) -> Result<Outcome> {
    let registry = ModelRegistry::new(JsonFileRegistryStore::new(&config.path));
    let champion = registry.current_champion()?;

    match format.render(&champion)? {
        Some(rendered) => println!("{rendered}"),
        None => match &champion {
            Some(record) => log(
                level,
                LogLevel::Normal,
                &format!(
                    "Champion: {} (accuracy {:.4}, run {}, registered {})",
                    record.version,
                    record.accuracy,
                    record.run_id,
                    record.timestamp.to_rfc3339()
                ),
            ),
            None => log(
                level,
                LogLevel::Normal,
                &format!("No models registered in {}", config.path.display()),
            ),
        },
    }

    Ok(if champion.is_some() { Outcome::Success } else { Outcome::NothingToEvaluate })
}
