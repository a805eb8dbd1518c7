//! Baseline statistics snapshot

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-feature training statistics.
///
/// Maps are ordered so that serializing the same snapshot twice yields the
/// same bytes. Unknown keys in a persisted snapshot are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureStats {
    /// Feature names in column order (label column excluded)
    pub feature_order: Vec<String>,
    /// Mean per feature
    pub means: BTreeMap<String, f64>,
    /// Population standard deviation per feature
    pub stds: BTreeMap<String, f64>,
    /// Number of rows profiled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_count: Option<usize>,
    /// Table the snapshot was computed from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl FeatureStats {
    /// Build a snapshot from `(name, mean, std)` triples, keeping their order.
    pub fn from_features<I, S>(features: I) -> Self
    where
        I: IntoIterator<Item = (S, f64, f64)>,
        S: Into<String>,
    {
        let mut stats = Self {
            feature_order: Vec::new(),
            means: BTreeMap::new(),
            stds: BTreeMap::new(),
            row_count: None,
            source: None,
        };
        for (name, mean, std) in features {
            let name = name.into();
            stats.means.insert(name.clone(), mean);
            stats.stds.insert(name.clone(), std);
            stats.feature_order.push(name);
        }
        stats
    }

    /// Number of features
    pub fn len(&self) -> usize {
        self.feature_order.len()
    }

    /// Whether the snapshot has no features
    pub fn is_empty(&self) -> bool {
        self.feature_order.is_empty()
    }

    /// Training mean of a feature
    pub fn mean(&self, feature: &str) -> Option<f64> {
        self.means.get(feature).copied()
    }

    /// Training standard deviation of a feature
    pub fn std(&self, feature: &str) -> Option<f64> {
        self.stds.get(feature).copied()
    }

    /// Features listed in `feature_order` that lack a mean or a std.
    pub fn missing_entries(&self) -> Vec<&str> {
        self.feature_order
            .iter()
            .filter(|f| !self.means.contains_key(*f) || !self.stds.contains_key(*f))
            .map(String::as_str)
            .collect()
    }
}
