//! Model evaluation against live traffic
//!
//! - `drift`: z-score drift of live feature means against the training baseline

pub mod drift;

pub use drift::{DriftOutcome, DriftReport, DriftScorer, FeatureDrift, ThresholdMode};
