//! Configuration validation logic

use super::error::ValidationError;
use crate::config::schema::VigiaConfig;

/// Validate a monitoring configuration
///
/// Checks:
/// - The drift threshold is a finite, non-negative number
/// - The minimum batch size is positive
/// - Column names and paths are non-empty
pub fn validate_config(config: &VigiaConfig) -> Result<(), ValidationError> {
    let drift = &config.drift;
    if !drift.threshold.is_finite() || drift.threshold < 0.0 {
        return Err(ValidationError::InvalidThreshold(drift.threshold));
    }

    if drift.min_batch == 0 {
        return Err(ValidationError::InvalidMinBatch(drift.min_batch));
    }

    if drift.features_column.trim().is_empty() {
        return Err(ValidationError::EmptyColumnName("drift.features_column"));
    }

    if config.baseline.label_column.trim().is_empty() {
        return Err(ValidationError::EmptyColumnName("baseline.label_column"));
    }

    let paths = [
        ("baseline.data", &config.baseline.data),
        ("baseline.out", &config.baseline.out),
        ("drift.stats", &drift.stats),
        ("drift.logs", &drift.logs),
        ("registry.path", &config.registry.path),
    ];
    for (field, path) in paths {
        if path.as_os_str().is_empty() {
            return Err(ValidationError::EmptyPath(field));
        }
    }

    Ok(())
}
