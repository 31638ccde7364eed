// glossia-core/src/domain/registry/configuration.rs

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// What to do when one version directory yields several source files.
/// `Overwrite` reproduces the historical behavior (last one visited wins,
/// silently); `Warn` keeps that outcome but says so; `Error` aborts.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ConflictPolicy {
    Overwrite,
    #[default]
    Warn,
    Error,
}

#[derive(Debug, Deserialize, Serialize, Clone, Validate)]
pub struct CensusConfig {
    /// Directory name marking authoritative source content (e.g. `<ver>/src/`).
    #[serde(rename = "marker-segment", default = "default_marker_segment")]
    #[validate(length(min = 1))]
    pub marker_segment: String,

    #[serde(rename = "source-extension", default = "default_source_extension")]
    #[validate(length(min = 1))]
    pub source_extension: String,

    /// Substituted when a source file carries no last-modified line.
    /// 2003-10-01 assumes the CF 1.0 era; the first script generation used
    /// 2000-01-01 instead, so both remain one config line away.
    #[serde(rename = "placeholder-date", default = "default_placeholder_date")]
    pub placeholder_date: NaiveDate,

    #[serde(rename = "conflict-policy", default)]
    pub conflict_policy: ConflictPolicy,

    /// Per-version cleanups applied to the raw date string before parsing.
    #[serde(rename = "date-patches", default = "default_date_patches")]
    pub date_patches: HashMap<String, DatePatch>,

    #[serde(rename = "target-path", default = "default_target_path")]
    pub target_path: String,

    #[serde(rename = "clean-targets", default = "default_clean_targets")]
    pub clean_targets: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatePatch {
    /// Characters trimmed from both ends of the raw date string.
    pub trim: String,
}

impl DatePatch {
    pub fn apply(&self, raw: &str) -> String {
        raw.trim_matches(|c| self.trim.contains(c)).to_string()
    }
}

impl Default for CensusConfig {
    fn default() -> Self {
        Self {
            marker_segment: default_marker_segment(),
            source_extension: default_source_extension(),
            placeholder_date: default_placeholder_date(),
            conflict_policy: ConflictPolicy::default(),
            date_patches: default_date_patches(),
            target_path: default_target_path(),
            clean_targets: default_clean_targets(),
        }
    }
}

fn default_marker_segment() -> String {
    "src".to_string()
}
fn default_source_extension() -> String {
    "xml".to_string()
}
fn default_placeholder_date() -> NaiveDate {
    // The fallback only triggers for tables predating embedded timestamps.
    NaiveDate::from_ymd_opt(2003, 10, 1).unwrap_or_default()
}
fn default_date_patches() -> HashMap<String, DatePatch> {
    // Version 23 ships a stray ':' at the end of its date string.
    HashMap::from([(
        "23".to_string(),
        DatePatch {
            trim: ":".to_string(),
        },
    )])
}
fn default_target_path() -> String {
    "target".to_string()
}
fn default_clean_targets() -> Vec<String> {
    vec!["target".to_string()]
}

// --- UNIT TESTS ---
#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CensusConfig::default();

        assert_eq!(config.marker_segment, "src");
        assert_eq!(config.source_extension, "xml");
        assert_eq!(
            config.placeholder_date,
            NaiveDate::from_ymd_opt(2003, 10, 1).unwrap()
        );
        assert_eq!(config.conflict_policy, ConflictPolicy::Warn);
        assert!(config.date_patches.contains_key("23"));
    }

    #[test]
    fn test_partial_yaml_keeps_remaining_defaults() {
        let yaml = r#"
placeholder-date: 2000-01-01
conflict-policy: error
"#;
        let config: CensusConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(
            config.placeholder_date,
            NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()
        );
        assert_eq!(config.conflict_policy, ConflictPolicy::Error);
        assert_eq!(config.marker_segment, "src");
        assert_eq!(config.target_path, "target");
    }

    #[test]
    fn test_date_patch_trims_stray_characters() {
        let patch = DatePatch {
            trim: ":".to_string(),
        };
        assert_eq!(patch.apply("2007-03-27:"), "2007-03-27");
        assert_eq!(patch.apply("2007-03-27"), "2007-03-27");
    }

    #[test]
    fn test_custom_patch_table_from_yaml() {
        let yaml = r#"
date-patches:
  "7":
    trim: ";"
"#;
        let config: CensusConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.date_patches.get("7").unwrap().trim, ";");
        // An explicit table replaces the default one entirely.
        assert!(!config.date_patches.contains_key("23"));
    }

    #[test]
    fn test_blank_marker_segment_fails_validation() {
        let yaml = "marker-segment: \"\"";
        let config: CensusConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(config.validate().is_err());
    }
}
