//! Tests for drift scoring.

use super::*;
use crate::baseline::FeatureStats;
use crate::error::Error;
use approx::assert_abs_diff_eq;
use proptest::prelude::*;
use tempfile::TempDir;

fn xy_stats() -> FeatureStats {
    FeatureStats::from_features([("x", 10.0, 2.0), ("y", 5.0, 0.0)])
}

fn xy_batch() -> Vec<Vec<f64>> {
    // mean x = 14.0, mean y = 99.0
    vec![vec![13.0, 98.0], vec![15.0, 100.0]]
}

fn scored(outcome: DriftOutcome) -> DriftReport {
    match outcome {
        DriftOutcome::Scored(report) => report,
        other => panic!("Expected a scored report, got {other:?}"),
    }
}

#[test]
fn test_threshold_mode_exceeds() {
    assert!(ThresholdMode::Inclusive.exceeds(0.5, 0.5));
    assert!(!ThresholdMode::Strict.exceeds(0.5, 0.5));
    assert!(ThresholdMode::Strict.exceeds(0.51, 0.5));
}

#[test]
fn test_threshold_mode_parse() {
    assert_eq!("inclusive".parse::<ThresholdMode>().unwrap(), ThresholdMode::Inclusive);
    assert_eq!("STRICT".parse::<ThresholdMode>().unwrap(), ThresholdMode::Strict);
    assert_eq!(">=".parse::<ThresholdMode>().unwrap(), ThresholdMode::Inclusive);
    assert!("sometimes".parse::<ThresholdMode>().is_err());
    assert_eq!(ThresholdMode::Strict.as_str(), ">");
}

#[test]
fn test_scenario_zero_std_feature() {
    let scorer = DriftScorer::new(0.5, ThresholdMode::Inclusive);
    let report = scored(scorer.score_rows(&xy_stats(), &xy_batch()).unwrap());

    assert_abs_diff_eq!(report.z_score("x").unwrap(), 2.0);
    assert_eq!(report.z_score("y"), Some(0.0));
    assert_abs_diff_eq!(report.overall_drift, 2.0);
    assert_eq!(report.worst_feature().map(|f| f.feature.as_str()), Some("x"));
    assert_eq!(report.observations, 2);
}

#[test]
fn test_scenario_strict_high_threshold() {
    let scorer = DriftScorer::new(3.0, ThresholdMode::Strict);
    let outcome = scorer.score_rows(&xy_stats(), &xy_batch()).unwrap();
    assert!(!outcome.drift_detected());
    assert!(!scored(outcome).exceeds_threshold);
}

#[test]
fn test_scenario_inclusive_low_threshold() {
    let scorer = DriftScorer::new(0.5, ThresholdMode::Inclusive);
    let outcome = scorer.score_rows(&xy_stats(), &xy_batch()).unwrap();
    assert!(outcome.drift_detected());
}

#[test]
fn test_threshold_equal_to_drift_depends_on_mode() {
    let stats = xy_stats();
    let rows = xy_batch();
    assert!(DriftScorer::new(2.0, ThresholdMode::Inclusive)
        .score_rows(&stats, &rows)
        .unwrap()
        .drift_detected());
    assert!(!DriftScorer::new(2.0, ThresholdMode::Strict)
        .score_rows(&stats, &rows)
        .unwrap()
        .drift_detected());
}

#[test]
fn test_nan_std_scores_zero() {
    let stats = FeatureStats::from_features([("x", 1.0, f64::NAN)]);
    let report = scored(DriftScorer::new(0.5, ThresholdMode::Inclusive)
        .score_rows(&stats, &[vec![1000.0]])
        .unwrap());
    assert_eq!(report.overall_drift, 0.0);
}

#[test]
fn test_negative_shift_is_non_negative_z() {
    let stats = FeatureStats::from_features([("x", 10.0, 2.0)]);
    let report = scored(DriftScorer::new(0.5, ThresholdMode::Inclusive)
        .score_rows(&stats, &[vec![4.0]])
        .unwrap());
    assert_abs_diff_eq!(report.overall_drift, 3.0);
}

#[test]
fn test_extra_trailing_values_are_ignored() {
    let scorer = DriftScorer::new(0.5, ThresholdMode::Inclusive);
    let report =
        scored(scorer.score_rows(&xy_stats(), &[vec![10.0, 5.0, 1e9, -1e9]]).unwrap());
    assert_eq!(report.features.len(), 2);
    assert_eq!(report.overall_drift, 0.0);
}

#[test]
fn test_short_row_is_malformed_observation() {
    let scorer = DriftScorer::new(0.5, ThresholdMode::Inclusive);
    let err = scorer.score_rows(&xy_stats(), &[vec![10.0, 5.0], vec![10.0]]).unwrap_err();
    assert!(matches!(err, Error::MalformedObservation { row: 2, expected: 2, found: 1 }));
}

#[test]
fn test_empty_batch_is_no_verdict() {
    let scorer = DriftScorer::new(0.5, ThresholdMode::Inclusive);
    let outcome = scorer.score_rows(&xy_stats(), &[]).unwrap();
    assert_eq!(outcome, DriftOutcome::NoVerdict { dropped_rows: 0 });
    assert!(!outcome.drift_detected());
    assert!(outcome.report().is_none());
}

#[test]
fn test_min_batch_returns_insufficient_data() {
    let scorer = DriftScorer::new(0.5, ThresholdMode::Inclusive).with_min_batch(5);
    let outcome = scorer.score_rows(&xy_stats(), &xy_batch()).unwrap();
    assert_eq!(
        outcome,
        DriftOutcome::InsufficientData { observed: 2, required: 5, dropped_rows: 0 }
    );
}

#[test]
fn test_min_batch_zero_is_clamped() {
    assert_eq!(DriftScorer::new(0.5, ThresholdMode::Strict).with_min_batch(0).min_batch(), 1);
}

#[test]
fn test_no_features_scores_zero() {
    let stats = FeatureStats::from_features(Vec::<(String, f64, f64)>::new());
    let report = scored(DriftScorer::new(0.0, ThresholdMode::Strict)
        .score_rows(&stats, &[vec![1.0]])
        .unwrap());
    assert_eq!(report.overall_drift, 0.0);
    assert!(!report.exceeds_threshold);
}

#[test]
fn test_parse_feature_vector() {
    assert_eq!(parse_feature_vector("[5.1, 3.5]").unwrap(), vec![5.1, 3.5]);
    assert_eq!(parse_feature_vector(" [1e-05,2] ").unwrap(), vec![1e-5, 2.0]);
    assert!(parse_feature_vector("[]").unwrap().is_empty());
}

#[test]
fn test_parse_feature_vector_rejects_non_numeric() {
    for raw in ["", "5.1, 3.5", "[\"a\", 1]", "[[1.0]]", "[NaN]", "{\"x\": 1}", "[1.0,"] {
        assert!(
            matches!(parse_feature_vector(raw), Err(Error::MalformedInput { .. })),
            "{raw} should be rejected"
        );
    }
}

fn write_log(dir: &TempDir, contents: &str) -> PredictionLog {
    let path = dir.path().join("predictions.csv");
    std::fs::write(&path, contents).unwrap();
    PredictionLog::new(path)
}

#[test]
fn test_read_batch_counts_dropped_rows() {
    let dir = TempDir::new().unwrap();
    let log = write_log(
        &dir,
        "timestamp,features,prediction\nt1,\"[1.0, 2.0]\",0\nt2,garbage,1\nt3,\"[3.0, 4.0]\",1\n",
    );

    let batch = log.read_batch().unwrap();
    assert_eq!(batch.len(), 2);
    assert_eq!(batch.dropped_rows(), 1);
    assert_eq!(batch.observations()[1].row, 3);
    assert_eq!(batch.observations()[1].values, vec![3.0, 4.0]);
}

#[test]
fn test_all_rows_malformed_is_no_verdict() {
    let dir = TempDir::new().unwrap();
    let log = write_log(&dir, "features\nbad\nworse\n");
    let batch = log.read_batch().unwrap();

    let outcome = DriftScorer::new(0.5, ThresholdMode::Inclusive).score(&xy_stats(), &batch).unwrap();
    assert_eq!(outcome, DriftOutcome::NoVerdict { dropped_rows: 2 });
}

#[test]
fn test_empty_log_is_empty_batch() {
    let dir = TempDir::new().unwrap();
    assert!(write_log(&dir, "").read_batch().unwrap().is_empty());
    assert!(write_log(&dir, "timestamp,features\n").read_batch().unwrap().is_empty());
}

#[test]
fn test_missing_log_is_input_not_found() {
    let dir = TempDir::new().unwrap();
    let err = PredictionLog::new(dir.path().join("none.csv")).read_batch().unwrap_err();
    assert!(matches!(err, Error::InputNotFound { .. }));
}

#[test]
fn test_missing_features_column() {
    let dir = TempDir::new().unwrap();
    let err = write_log(&dir, "timestamp,inputs\nt1,\"[1.0]\"\n").read_batch().unwrap_err();
    assert!(matches!(err, Error::MissingColumn { ref column, .. } if column == "features"));
}

#[test]
fn test_custom_features_column() {
    let dir = TempDir::new().unwrap();
    let log = write_log(&dir, "timestamp,inputs\nt1,\"[1.0]\"\n").with_features_column("inputs");
    assert_eq!(log.read_batch().unwrap().len(), 1);
}

#[test]
fn test_append_then_read() {
    let dir = TempDir::new().unwrap();
    let log = PredictionLog::new(dir.path().join("logs").join("predictions.csv"));

    log.append(&[5.1, 3.5], "0").unwrap();
    log.append(&[6.2, 2.9], "1").unwrap();

    let batch = log.read_batch().unwrap();
    assert_eq!(batch.len(), 2);
    assert_eq!(batch.dropped_rows(), 0);
    assert_eq!(batch.observations()[0].values, vec![5.1, 3.5]);
}

#[test]
fn test_outcome_serializes_with_status_tag() {
    let json = serde_json::to_value(DriftOutcome::NoVerdict { dropped_rows: 3 }).unwrap();
    assert_eq!(json["status"], "no_verdict");
    assert_eq!(json["dropped_rows"], 3);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_batch_at_means_has_zero_drift(
        features in proptest::collection::vec((-1e3f64..1e3, 0.0f64..1e2), 1..10),
        rows in 1usize..20,
    ) {
        let stats = FeatureStats::from_features(
            features.iter().enumerate().map(|(i, (m, s))| (format!("f{i}"), *m, *s)),
        );
        let row: Vec<f64> = features.iter().map(|(m, _)| *m).collect();
        let batch = vec![row; rows];

        let outcome = DriftScorer::new(0.5, ThresholdMode::Inclusive).score_rows(&stats, &batch).unwrap();
        prop_assert_eq!(outcome.report().unwrap().overall_drift, 0.0);
    }

    #[test]
    fn prop_zero_std_never_drifts(mean in -1e6f64..1e6, live in -1e6f64..1e6) {
        let stats = FeatureStats::from_features([("x", mean, 0.0)]);
        let outcome = DriftScorer::new(0.0, ThresholdMode::Strict).score_rows(&stats, &[vec![live]]).unwrap();
        let z = outcome.report().unwrap().z_score("x").unwrap();
        prop_assert_eq!(z, 0.0);
    }

    #[test]
    fn prop_overall_is_max_feature(
        features in proptest::collection::vec((-1e3f64..1e3, 0.1f64..1e2, -1e3f64..1e3), 1..10),
    ) {
        let stats = FeatureStats::from_features(
            features.iter().enumerate().map(|(i, (m, s, _))| (format!("f{i}"), *m, *s)),
        );
        let row: Vec<f64> = features.iter().map(|(_, _, live)| *live).collect();
        let report = DriftScorer::new(1.0, ThresholdMode::Inclusive)
            .score_rows(&stats, &[row])
            .unwrap()
            .report()
            .cloned()
            .unwrap();
        let max = report.features.iter().map(|f| f.z_score).fold(0.0, f64::max);
        prop_assert_eq!(report.overall_drift, max);
        prop_assert!(report.features.iter().all(|f| f.z_score >= 0.0 && f.z_score.is_finite()));
    }
}
