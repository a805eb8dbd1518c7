//! History command implementation

use crate::cli::logging::log;
use crate::cli::{LogLevel, Outcome};
use crate::config::{OutputFormat, RegistryConfig};
use crate::error::Result;
use crate::storage::registry::{JsonFileRegistryStore, ModelRegistry};

pub fn run_history(format: OutputFormat, config: &RegistryConfig, level: LogLevel) -> Result<Outcome> {
    let registry = ModelRegistry::new(JsonFileRegistryStore::new(&config.path));
    let history = registry.history()?;

    if let Some(rendered) = format.render(&history)? {
        println!("{rendered}");
        return Ok(Outcome::Success);
    }

    if history.is_empty() {
        log(
            level,
            LogLevel::Normal,
            &format!("No models registered in {}", config.path.display()),
        );
        return Ok(Outcome::Success);
    }

    let header = format!(
        "{:<8} {:<10} {:<8} {:<25} RUN",
        "VERSION", "ACCURACY", "CHAMPION", "TIMESTAMP"
    );
    log(level, LogLevel::Normal, &header);
    for record in &history {
        let champion = if record.is_champion { "yes" } else { "no" };
        log(
            level,
            LogLevel::Normal,
            &format!(
                "{:<8} {:<10.4} {:<8} {:<25} {}",
                record.version.to_string(),
                record.accuracy,
                champion,
                record.timestamp.to_rfc3339(),
                record.run_id
            ),
        );
    }

    Ok(Outcome::Success)
}
