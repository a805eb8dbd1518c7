//! Tests for CLI argument parsing and config overrides

use super::*;
use crate::config::VigiaConfig;
use crate::eval::drift::ThresholdMode;
use std::path::PathBuf;

#[test]
fn test_parse_baseline_defaults() {
    let cli = parse_args(["vigia", "baseline"]).unwrap();
    match cli.command {
        Command::Baseline(args) => {
            assert_eq!(args, BaselineArgs::default());
        }
        _ => panic!("Expected Baseline command"),
    }
    assert!(!cli.verbose);
    assert!(!cli.quiet);
    assert!(cli.config.is_none());
}

#[test]
fn test_parse_baseline_with_paths() {
    let cli = parse_args([
        "vigia",
        "baseline",
        "--data",
        "train.csv",
        "--out",
        "stats.json",
        "--label-column",
        "species",
    ])
    .unwrap();

    match cli.command {
        Command::Baseline(args) => {
            assert_eq!(args.data, Some(PathBuf::from("train.csv")));
            assert_eq!(args.out, Some(PathBuf::from("stats.json")));
            assert_eq!(args.label_column.as_deref(), Some("species"));
        }
        _ => panic!("Expected Baseline command"),
    }
}

#[test]
fn test_parse_drift_with_threshold_and_mode() {
    let cli = parse_args([
        "vigia",
        "drift",
        "--threshold",
        "3.0",
        "--mode",
        "strict",
        "--min-batch",
        "30",
        "--format",
        "json",
    ])
    .unwrap();

    match cli.command {
        Command::Drift(args) => {
            assert_eq!(args.threshold, Some(3.0));
            assert_eq!(args.mode, Some(ThresholdMode::Strict));
            assert_eq!(args.min_batch, Some(30));
            assert_eq!(args.format, OutputFormat::Json);
        }
        _ => panic!("Expected Drift command"),
    }
}

#[test]
fn test_parse_drift_rejects_unknown_mode() {
    let result = parse_args(["vigia", "drift", "--mode", "sometimes"]);
    assert!(result.is_err());
}

#[test]
fn test_parse_register_requires_accuracy() {
    assert!(parse_args(["vigia", "register"]).is_err());

    let cli = parse_args(["vigia", "register", "--accuracy", "0.91"]).unwrap();
    match cli.command {
        Command::Register(args) => {
            assert!((args.accuracy - 0.91).abs() < 1e-12);
            assert_eq!(args.run_id, "manual_run");
            assert!(args.registry.is_none());
            assert_eq!(args.format, OutputFormat::Text);
        }
        _ => panic!("Expected Register command"),
    }
}

#[test]
fn test_parse_register_with_run_id() {
    let cli = parse_args([
        "vigia",
        "register",
        "--accuracy",
        "0.88",
        "--run-id",
        "gh-4242",
        "--registry",
        "r.json",
    ])
    .unwrap();

    match cli.command {
        Command::Register(args) => {
            assert_eq!(args.run_id, "gh-4242");
            assert_eq!(args.registry, Some(PathBuf::from("r.json")));
        }
        _ => panic!("Expected Register command"),
    }
}

#[test]
fn test_parse_champion_and_history() {
    let cli = parse_args(["vigia", "champion", "--format", "yaml"]).unwrap();
    assert!(matches!(
        cli.command,
        Command::Champion(RegistryQueryArgs { format: OutputFormat::Yaml, .. })
    ));

    let cli = parse_args(["vigia", "history"]).unwrap();
    assert!(matches!(cli.command, Command::History(_)));
}

#[test]
fn test_parse_train_command() {
    let cli = parse_args([
        "vigia", "train", "--script", "train.py", "--data", "d.csv", "--out", "model.pkl",
    ])
    .unwrap();

    match cli.command {
        Command::Train(args) => {
            assert_eq!(args.script, PathBuf::from("train.py"));
            assert_eq!(args.data, PathBuf::from("d.csv"));
            assert_eq!(args.out, PathBuf::from("model.pkl"));
            assert_eq!(args.interpreter, "python3");
        }
        _ => panic!("Expected Train command"),
    }
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = parse_args(["vigia", "history", "-v", "--config", "vigia.yaml"]).unwrap();
    assert!(cli.verbose);
    assert_eq!(cli.config, Some(PathBuf::from("vigia.yaml")));

    let cli = parse_args(["vigia", "-q", "champion"]).unwrap();
    assert!(cli.quiet);
}

#[test]
fn test_output_format_from_str() {
    assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
    assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    assert_eq!("yaml".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
    assert!("xml".parse::<OutputFormat>().is_err());
    assert_eq!(OutputFormat::Json.to_string(), "json");
}

#[test]
fn test_output_format_render_text_is_none() {
    assert!(OutputFormat::Text.render(&vec![1, 2]).unwrap().is_none());
    let json = OutputFormat::Json.render(&vec![1, 2]).unwrap().unwrap();
    assert!(json.contains('1'));
}

#[test]
fn test_apply_drift_overrides() {
    let mut config = VigiaConfig::default();
    let cli = parse_args([
        "vigia",
        "drift",
        "--threshold",
        "2.5",
        "--logs",
        "live.csv",
        "--features-column",
        "inputs",
        "--report",
        "out/report.json",
    ])
    .unwrap();

    apply_overrides(&mut config, &cli.command);

    assert_eq!(config.drift.threshold, 2.5);
    assert_eq!(config.drift.logs, PathBuf::from("live.csv"));
    assert_eq!(config.drift.features_column, "inputs");
    assert_eq!(config.drift.report, Some(PathBuf::from("out/report.json")));
    // untouched values keep their defaults
    assert_eq!(config.drift.mode, ThresholdMode::Inclusive);
    assert_eq!(config.drift.min_batch, 1);
}

#[test]
fn test_apply_overrides_keeps_config_when_flag_absent() {
    let mut config = VigiaConfig::default();
    config.baseline.label_column = "species".to_string();
    config.registry.path = PathBuf::from("custom/registry.json");

    let cli = parse_args(["vigia", "baseline", "--data", "x.csv"]).unwrap();
    apply_overrides(&mut config, &cli.command);
    assert_eq!(config.baseline.label_column, "species");
    assert_eq!(config.baseline.data, PathBuf::from("x.csv"));

    let cli = parse_args(["vigia", "champion"]).unwrap();
    apply_overrides(&mut config, &cli.command);
    assert_eq!(config.registry.path, PathBuf::from("custom/registry.json"));
}

#[test]
fn test_apply_registry_override() {
    let mut config = VigiaConfig::default();
    let cli = parse_args(["vigia", "register", "--accuracy", "0.5", "--registry", "r.json"]).unwrap();
    apply_overrides(&mut config, &cli.command);
    assert_eq!(config.registry.path, PathBuf::from("r.json"));
}
