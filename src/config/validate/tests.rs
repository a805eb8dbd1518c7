//! Tests for configuration validation

use super::*;
use crate::config::schema::VigiaConfig;
use std::path::PathBuf;

#[test]
fn test_default_config_is_valid() {
    assert!(validate_config(&VigiaConfig::default()).is_ok());
}

#[test]
fn test_negative_threshold() {
    let mut config = VigiaConfig::default();
    config.drift.threshold = -0.1;
    assert_eq!(validate_config(&config), Err(ValidationError::InvalidThreshold(-0.1)));
}

#[test]
fn test_nan_threshold() {
    let mut config = VigiaConfig::default();
    config.drift.threshold = f64::NAN;
    assert!(matches!(validate_config(&config), Err(ValidationError::InvalidThreshold(_))));
}

#[test]
fn test_zero_threshold_is_allowed() {
    let mut config = VigiaConfig::default();
    config.drift.threshold = 0.0;
    assert!(validate_config(&config).is_ok());
}

#[test]
fn test_zero_min_batch() {
    let mut config = VigiaConfig::default();
    config.drift.min_batch = 0;
    assert_eq!(validate_config(&config), Err(ValidationError::InvalidMinBatch(0)));
}

#[test]
fn test_empty_features_column() {
    let mut config = VigiaConfig::default();
    config.drift.features_column = "  ".to_string();
    let err = validate_config(&config).unwrap_err();
    assert_eq!(err.field(), "drift.features_column");
}

#[test]
fn test_empty_registry_path() {
    let mut config = VigiaConfig::default();
    config.registry.path = PathBuf::new();
    assert_eq!(validate_config(&config), Err(ValidationError::EmptyPath("registry.path")));
}

#[test]
fn test_converts_into_config_error() {
    let err: crate::error::Error = ValidationError::InvalidMinBatch(0).into();
    assert!(matches!(err, crate::error::Error::Config { ref field, .. } if field == "drift.min_batch"));
}
