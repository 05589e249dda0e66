//! Run configuration.
//!
//! The configuration is an explicit value handed to the orchestrator at
//! call time; there is no process-wide mutable state.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::rules::CleanupRule;

/// Sentinel string the upstream format uses for "value intentionally
/// absent".
pub const DEFAULT_NULL_TOKEN: &str = "<Null>";

fn default_null_token() -> String {
    DEFAULT_NULL_TOKEN.to_string()
}

fn default_progress_interval() -> usize {
    10_000
}

/// Everything a batch run needs: where the partitions live, which partition
/// keys to load, the sentinel marker, and the ordered cleanup rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Directory holding the partition files.
    pub data_dir: PathBuf,
    /// Partition keys to load (postal codes), in load order.
    pub partitions: Vec<String>,
    /// Sentinel null marker of the source format.
    #[serde(default = "default_null_token")]
    pub null_token: String,
    /// Cleanup rules, applied strictly in this order.
    #[serde(default)]
    pub rules: Vec<CleanupRule>,
    /// Emit a progress log line every this many rows.
    #[serde(default = "default_progress_interval")]
    pub progress_interval: usize,
}

impl RunConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            partitions: Vec::new(),
            null_token: default_null_token(),
            rules: Vec::new(),
            progress_interval: default_progress_interval(),
        }
    }

    #[must_use]
    pub fn with_partitions(mut self, partitions: impl IntoIterator<Item = String>) -> Self {
        self.partitions = partitions.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_rules(mut self, rules: impl IntoIterator<Item = CleanupRule>) -> Self {
        self.rules = rules.into_iter().collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_omitted() {
        let config: RunConfig = serde_json::from_str(
            r#"{"data_dir": "data", "partitions": ["80015", "80016"]}"#,
        )
        .expect("deserialize config");
        assert_eq!(config.null_token, DEFAULT_NULL_TOKEN);
        assert_eq!(config.progress_interval, 10_000);
        assert!(config.rules.is_empty());
        assert_eq!(config.partitions, vec!["80015", "80016"]);
    }

    #[test]
    fn rules_keep_declared_order() {
        let config: RunConfig = serde_json::from_str(
            r#"{
                "data_dir": "data",
                "partitions": [],
                "rules": [
                    {"field": "PlaceName", "match": "SPRINGS", "replacement": "Springs"},
                    {"field": "PlaceName", "match": "Springs"}
                ]
            }"#,
        )
        .expect("deserialize config");
        assert_eq!(config.rules[0].field(), "PlaceName");
        assert!(matches!(config.rules[0], CleanupRule::Replace { .. }));
        assert!(matches!(config.rules[1], CleanupRule::Exclude { .. }));
    }
}
