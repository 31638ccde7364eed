// glossia-core/src/domain/registry/summary.rs

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::error::DomainError;

/// Raw per-version figures, before diffs are computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VersionFigures {
    pub total: usize,
    pub last_modified: NaiveDate,
}

/// One row of the census: total count, last-modified date, signed change
/// relative to the nearest available earlier version.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VersionSummary {
    pub version: u32,
    pub total: usize,
    pub last_modified: NaiveDate,
    pub diff: i64,
}

/// The census, keyed by (remapped) release number.
pub type CensusTable = BTreeMap<u32, VersionSummary>;

/// Attach diffs to a table of per-version figures.
///
/// diff(N) = total(N) - total(N-1). If N-1 is absent, fall back to N-2
/// (registries occasionally skip one release). A wider gap is fatal: it
/// signals corrupted data, and must never silently default to zero.
/// The lowest version present gets diff 0.
pub fn compute_diffs(figures: &BTreeMap<u32, VersionFigures>) -> Result<CensusTable, DomainError> {
    let lowest = figures.keys().next().copied();

    let mut table = BTreeMap::new();
    for (&version, &VersionFigures { total, last_modified }) in figures {
        let diff = if Some(version) == lowest {
            0
        } else {
            let step_back = |n: u32| figures.get(&n).map(|f| f.total);
            let previous_total = step_back(version - 1)
                .or_else(|| version.checked_sub(2).and_then(step_back))
                .ok_or(DomainError::VersionGap { version })?;
            total as i64 - previous_total as i64
        };

        table.insert(
            version,
            VersionSummary {
                version,
                total,
                last_modified,
                diff,
            },
        );
    }

    Ok(table)
}
