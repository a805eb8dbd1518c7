//! Registry record and version tag

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// 1-based registry version, written as `"v<N>"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VersionTag(u32);

impl VersionTag {
    pub fn new(number: u32) -> Self {
        Self(number)
    }

    pub fn number(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for VersionTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl std::str::FromStr for VersionTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('v').unwrap_or(s);
        digits.parse().map(VersionTag).map_err(|_| format!("Invalid version tag: {s}"))
    }
}

impl Serialize for VersionTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Accept `"v3"`, `"3"`, or `3`.
impl<'de> Deserialize<'de> for VersionTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum NumberOrString {
            Number(u32),
            Str(String),
        }

        match NumberOrString::deserialize(deserializer)? {
            NumberOrString::Number(n) => Ok(VersionTag(n)),
            NumberOrString::Str(s) => s.parse().map_err(serde::de::Error::custom),
        }
    }
}

/// Deserialize RFC 3339 timestamps, or naive ISO 8601 timestamps taken as UTC.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if let Ok(ts) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|e| serde::de::Error::custom(format!("invalid timestamp '{raw}': {e}")))
}

/// One evaluated model version. Never mutated once written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistryRecord {
    /// Position in the registry, 1-based
    pub version: VersionTag,
    /// When the record was written
    #[serde(alias = "date", deserialize_with = "deserialize_timestamp")]
    pub timestamp: DateTime<Utc>,
    /// Evaluation accuracy
    pub accuracy: f64,
    /// Training run that produced the model
    pub run_id: String,
    /// Whether this was the best accuracy at the time it was written
    pub is_champion: bool,
}

impl RegistryRecord {
    /// Create a record stamped with the current time
    pub fn new(version: u32, accuracy: f64, run_id: &str, is_champion: bool) -> Self {
        Self {
            version: VersionTag(version),
            timestamp: Utc::now(),
            accuracy,
            run_id: run_id.to_string(),
            is_champion,
        }
    }
}
