//! Register command implementation

use crate::cli::logging::log;
use crate::cli::{LogLevel, Outcome};
use crate::config::{RegisterArgs, RegistryConfig};
use crate::error::Result;
use crate::storage::registry::{JsonFileRegistryStore, ModelRegistry};

pub fn run_register(
    args: &RegisterArgs,
    config: &RegistryConfig,
    level: LogLevel,
) -> Result<Outcome> {
    let mut registry = ModelRegistry::new(JsonFileRegistryStore::new(&config.path));
    let registration = registry.register(args.accuracy, &args.run_id)?;

    match args.format.render(&registration)? {
        Some(rendered) => println!("{rendered}"),
        None => {
            let record = &registration.record;
            log(
                level,
                LogLevel::Normal,
                &format!(
                    "Registered {} (accuracy {:.4}, run {})",
                    record.version, record.accuracy, record.run_id
                ),
            );
            let verdict = if registration.is_champion() {
                "New champion"
            } else {
                "Not champion"
            };
            log(
                level,
                LogLevel::Normal,
                &format!("  {verdict} (previous best {:.4})", registration.previous_best),
            );
        }
    }

    Ok(if registration.is_champion() { Outcome::Success } else { Outcome::NotChampion })
}
