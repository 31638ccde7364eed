// glossia-core/src/domain/registry/entries.rs

use std::collections::HashSet;

/// Names present in `newer` but absent from `older`.
///
/// Both sides are treated as sets, so duplicated identifiers collapse here
/// even though extraction preserves them. The result order is unspecified
/// (set iteration); callers requiring determinism must sort explicitly.
pub fn new_names(newer: &[String], older: &[String]) -> Vec<String> {
    let older_set: HashSet<&str> = older.iter().map(String::as_str).collect();
    let newer_set: HashSet<&str> = newer.iter().map(String::as_str).collect();

    newer_set
        .difference(&older_set)
        .map(|name| (*name).to_string())
        .collect()
}

/// Presentation transform: `air_temperature` -> `air temperature`.
/// No semantic effect on the data model.
pub fn spaced_phrases(names: &[String]) -> Vec<String> {
    names.iter().map(|name| name.replace('_', " ")).collect()
}
