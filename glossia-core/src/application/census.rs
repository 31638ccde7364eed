// glossia-core/src/application/census.rs

use std::collections::BTreeMap;
use std::path::Path;

use chrono::NaiveDate;
use tracing::{debug, info, instrument};

use crate::domain::ports::{EntryExtractor, SourceLocator};
use crate::domain::registry::configuration::CensusConfig;
use crate::domain::registry::summary::{CensusTable, VersionFigures, compute_diffs};
use crate::domain::registry::version::{VersionLabel, remap_current};
use crate::error::GlossiaError;
use crate::infrastructure::error::InfrastructureError;

/// Per-version identifier lists ('names' mode).
///
/// The names and totals modes are separate entry points: one call produces
/// one or the other, never both.
pub fn collect_names<L, X>(
    locator: &L,
    extractor: &X,
    root: &Path,
    config: &CensusConfig,
) -> Result<BTreeMap<VersionLabel, Vec<String>>, GlossiaError>
where
    L: SourceLocator,
    X: EntryExtractor,
{
    let sources = locator.locate(root, config)?;

    let mut names = BTreeMap::new();
    for (label, path) in sources {
        let entries = extractor.entries(&path)?;
        debug!(version = %label, count = entries.len(), "Extracted entries");
        names.insert(label, entries);
    }
    Ok(names)
}

/// Full census ('totals' mode): per-version total, last-modified date and
/// signed diff, keyed by release number with 'current' remapped to
/// (highest release + 1).
#[instrument(skip_all, fields(root = ?root))]
pub fn run_census<L, X>(
    locator: &L,
    extractor: &X,
    root: &Path,
    config: &CensusConfig,
) -> Result<CensusTable, GlossiaError>
where
    L: SourceLocator,
    X: EntryExtractor,
{
    info!("🔎 Locating registry sources...");
    let sources = locator.locate(root, config)?;
    info!(versions = sources.len(), "Sources located");

    let mut figures = BTreeMap::new();
    for (label, path) in sources {
        let entries = extractor.entries(&path)?;
        let last_modified = resolve_date(extractor, label, &path, config)?;
        figures.insert(
            label,
            VersionFigures {
                total: entries.len(),
                last_modified,
            },
        );
    }

    // 'current' devient (plus haute version + 1) pour le tri numérique.
    let by_release = remap_current(figures);

    Ok(compute_diffs(&by_release)?)
}

fn resolve_date<X: EntryExtractor>(
    extractor: &X,
    label: VersionLabel,
    path: &Path,
    config: &CensusConfig,
) -> Result<NaiveDate, GlossiaError> {
    let Some(raw) = extractor.last_modified(path)? else {
        // The one graceful-degradation path: no timestamp line at all.
        debug!(version = %label, "No last-modified line, substituting placeholder date");
        return Ok(config.placeholder_date);
    };

    let patched = match config.date_patches.get(&label.to_string()) {
        Some(patch) => patch.apply(&raw),
        None => raw.clone(),
    };

    patched.parse().map_err(|source| {
        GlossiaError::Infrastructure(InfrastructureError::DateParse {
            version: label.to_string(),
            raw,
            source,
        })
    })
}

// --- UNIT TESTS ---
#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::infrastructure::extract::LineScanner;
    use crate::infrastructure::locator::RegistryDiscovery;
    use anyhow::Result;
    use std::fs;
    use tempfile::tempdir;

    fn seed_version(
        root: &Path,
        label: &str,
        entry_count: usize,
        last_modified: Option<&str>,
    ) -> Result<()> {
        let src_dir = root.join(label).join("src");
        fs::create_dir_all(&src_dir)?;

        let mut xml = String::from("<?xml version=\"1.0\"?>\n<standard_name_table>\n");
        if let Some(stamp) = last_modified {
            xml.push_str(&format!("  <last_modified>{stamp}</last_modified>\n"));
        }
        for i in 0..entry_count {
            xml.push_str(&format!("  <entry id=\"name_{label}_{i}\">\n  </entry>\n"));
        }
        xml.push_str("</standard_name_table>\n");

        fs::write(src_dir.join("standard-name-table.xml"), xml)?;
        Ok(())
    }

    #[test]
    fn test_census_totals_and_diffs() -> Result<()> {
        let dir = tempdir()?;
        seed_version(dir.path(), "1", 10, Some("2006-01-01T00:00:00Z"))?;
        seed_version(dir.path(), "2", 12, Some("2006-06-01T00:00:00Z"))?;
        seed_version(dir.path(), "3", 9, Some("2007-01-01T00:00:00Z"))?;

        let table = run_census(
            &RegistryDiscovery,
            &LineScanner,
            dir.path(),
            &CensusConfig::default(),
        )?;

        assert_eq!(table.get(&1).unwrap().total, 10);
        assert_eq!(table.get(&2).unwrap().total, 12);
        assert_eq!(table.get(&3).unwrap().total, 9);
        assert_eq!(table.get(&2).unwrap().diff, 2);
        assert_eq!(table.get(&3).unwrap().diff, -3);
        Ok(())
    }

    #[test]
    fn test_missing_timestamp_uses_placeholder_never_raises() -> Result<()> {
        let dir = tempdir()?;
        seed_version(dir.path(), "1", 5, None)?;

        let table = run_census(
            &RegistryDiscovery,
            &LineScanner,
            dir.path(),
            &CensusConfig::default(),
        )?;

        assert_eq!(
            table.get(&1).unwrap().last_modified,
            CensusConfig::default().placeholder_date
        );
        Ok(())
    }

    #[test]
    fn test_date_patch_applies_to_flagged_version() -> Result<()> {
        let dir = tempdir()?;
        // The known registry quirk: a stray ':' trailing the date portion.
        seed_version(dir.path(), "23", 3, Some("2007-03-27:T13:10:29Z"))?;

        let table = run_census(
            &RegistryDiscovery,
            &LineScanner,
            dir.path(),
            &CensusConfig::default(),
        )?;

        assert_eq!(
            table.get(&23).unwrap().last_modified,
            NaiveDate::from_ymd_opt(2007, 3, 27).unwrap()
        );
        Ok(())
    }

    #[test]
    fn test_unpatched_stray_character_is_fatal() -> Result<()> {
        let dir = tempdir()?;
        seed_version(dir.path(), "7", 3, Some("2007-03-27:T13:10:29Z"))?;

        let config = CensusConfig {
            date_patches: Default::default(),
            ..CensusConfig::default()
        };

        let result = run_census(&RegistryDiscovery, &LineScanner, dir.path(), &config);
        assert!(matches!(
            result,
            Err(GlossiaError::Infrastructure(
                InfrastructureError::DateParse { .. }
            ))
        ));
        Ok(())
    }

    #[test]
    fn test_current_is_remapped_past_highest_release() -> Result<()> {
        let dir = tempdir()?;
        seed_version(dir.path(), "47", 40, Some("2020-01-01T00:00:00Z"))?;
        seed_version(dir.path(), "48", 45, Some("2021-01-01T00:00:00Z"))?;
        seed_version(dir.path(), "current", 52, Some("2021-06-01T00:00:00Z"))?;

        let table = run_census(
            &RegistryDiscovery,
            &LineScanner,
            dir.path(),
            &CensusConfig::default(),
        )?;

        assert_eq!(table.get(&49).unwrap().total, 52);
        assert_eq!(table.get(&49).unwrap().diff, 7);
        Ok(())
    }

    #[test]
    fn test_empty_registry_yields_empty_census() -> Result<()> {
        let dir = tempdir()?;

        let table = run_census(
            &RegistryDiscovery,
            &LineScanner,
            dir.path(),
            &CensusConfig::default(),
        )?;
        assert!(table.is_empty());
        Ok(())
    }

    #[test]
    fn test_names_mode_returns_identifiers_only() -> Result<()> {
        let dir = tempdir()?;
        seed_version(dir.path(), "1", 2, Some("2006-01-01T00:00:00Z"))?;

        let names = collect_names(
            &RegistryDiscovery,
            &LineScanner,
            dir.path(),
            &CensusConfig::default(),
        )?;

        let entries = names.get(&VersionLabel::Release(1)).unwrap();
        assert_eq!(entries, &vec!["name_1_0".to_string(), "name_1_1".to_string()]);
        Ok(())
    }
}
