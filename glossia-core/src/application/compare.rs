// glossia-core/src/application/compare.rs

use std::collections::BTreeMap;

use crate::domain::error::DomainError;
use crate::domain::registry::entries::new_names;
use crate::domain::registry::version::VersionLabel;
use crate::error::GlossiaError;

/// Names present in `newer` but not in `older`, over a names-mode map.
///
/// Result order is unspecified; the CLI sorts before printing.
pub fn new_names_between(
    names: &BTreeMap<VersionLabel, Vec<String>>,
    newer: VersionLabel,
    older: VersionLabel,
) -> Result<Vec<String>, GlossiaError> {
    let newer_names = names
        .get(&newer)
        .ok_or_else(|| DomainError::VersionNotFound(newer.to_string()))?;
    let older_names = names
        .get(&older)
        .ok_or_else(|| DomainError::VersionNotFound(older.to_string()))?;

    Ok(new_names(newer_names, older_names))
}

// --- UNIT TESTS ---
#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn names_map() -> BTreeMap<VersionLabel, Vec<String>> {
        let mut map = BTreeMap::new();
        map.insert(
            VersionLabel::Release(11),
            vec!["air_temperature".to_string(), "wind_speed".to_string()],
        );
        map.insert(
            VersionLabel::Release(12),
            vec![
                "air_temperature".to_string(),
                "wind_speed".to_string(),
                "sea_ice_thickness".to_string(),
            ],
        );
        map
    }

    #[test]
    fn test_new_names_between_versions() -> anyhow::Result<()> {
        let added = new_names_between(
            &names_map(),
            VersionLabel::Release(12),
            VersionLabel::Release(11),
        )?;

        assert_eq!(added, vec!["sea_ice_thickness".to_string()]);
        Ok(())
    }

    #[test]
    fn test_unknown_version_is_reported() {
        let result = new_names_between(
            &names_map(),
            VersionLabel::Release(49),
            VersionLabel::Release(11),
        );

        assert!(matches!(
            result,
            Err(GlossiaError::Domain(DomainError::VersionNotFound(v))) if v == "49"
        ));
    }
}
