// glossia-core/src/domain/registry/version.rs

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

/// One release of the vocabulary registry.
///
/// `Current` is the floating label of the in-development release and sorts
/// after every numbered one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VersionLabel {
    Release(u32),
    Current,
}

impl FromStr for VersionLabel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "current" {
            return Ok(VersionLabel::Current);
        }
        s.parse::<u32>()
            .map(VersionLabel::Release)
            .map_err(|_| DomainError::UnknownVersionLabel(s.to_string()))
    }
}

impl fmt::Display for VersionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionLabel::Release(n) => write!(f, "{n}"),
            VersionLabel::Current => write!(f, "current"),
        }
    }
}

/// Re-key a per-label table by release number.
///
/// Convention: `current` becomes (highest release + 1) so versions stay
/// numerically sortable. With no numbered release present it becomes 1.
pub fn remap_current<T>(table: BTreeMap<VersionLabel, T>) -> BTreeMap<u32, T> {
    let mut by_release = BTreeMap::new();
    let mut current_value = None;

    for (label, value) in table {
        match label {
            VersionLabel::Release(n) => {
                by_release.insert(n, value);
            }
            VersionLabel::Current => current_value = Some(value),
        }
    }

    if let Some(value) = current_value {
        let assumed = by_release.keys().next_back().map_or(0, |n| *n) + 1;
        by_release.insert(assumed, value);
    }

    by_release
}
