// glossia-core/src/infrastructure/locator.rs

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::WalkDir;

use crate::domain::error::DomainError;
use crate::domain::ports::SourceLocator;
use crate::domain::registry::configuration::{CensusConfig, ConflictPolicy};
use crate::domain::registry::version::VersionLabel;
use crate::infrastructure::error::InfrastructureError;

/// WalkDir adapter for the external registry layout:
/// `<root>/<version>/<marker>/<file>.<ext>`, one file per version.
pub struct RegistryDiscovery;

impl SourceLocator for RegistryDiscovery {
    fn locate(
        &self,
        root: &Path,
        config: &CensusConfig,
    ) -> Result<BTreeMap<VersionLabel, PathBuf>, DomainError> {
        Self::discover(root, config).map_err(|e| DomainError::LocateError(e.to_string()))
    }
}

impl RegistryDiscovery {
    pub fn discover(
        root: &Path,
        config: &CensusConfig,
    ) -> Result<BTreeMap<VersionLabel, PathBuf>, InfrastructureError> {
        let mut sources: BTreeMap<VersionLabel, PathBuf> = BTreeMap::new();

        // Pas d'erreur : un registre vide ou absent donne un census vide.
        if !root.exists() {
            return Ok(sources);
        }

        let walker = WalkDir::new(root).follow_links(true);

        for entry in walker.into_iter().filter_map(|e| e.ok()) {
            let path = entry.path();

            if !path.is_file()
                || !path
                    .extension()
                    .is_some_and(|ext| ext == config.source_extension.as_str())
            {
                continue;
            }

            let Some(marker_dir) = path.parent() else {
                continue;
            };
            if !marker_dir
                .file_name()
                .is_some_and(|name| name == config.marker_segment.as_str())
            {
                continue;
            }

            // Version label = the path segment just above the marker directory.
            // This offset is a structural convention of the external layout.
            let Some(segment) = marker_dir.parent().and_then(|p| p.file_name()) else {
                continue;
            };
            let segment = segment.to_string_lossy();

            let label: VersionLabel = match segment.parse() {
                Ok(label) => label,
                Err(_) => {
                    warn!(segment = %segment, path = ?path, "Skipping non-version directory");
                    continue;
                }
            };

            if let Some(previous) = sources.insert(label, path.to_path_buf()) {
                match config.conflict_policy {
                    // Historical parity: last file visited wins, silently.
                    ConflictPolicy::Overwrite => {}
                    ConflictPolicy::Warn => {
                        warn!(
                            version = %label,
                            kept = ?path,
                            ignored = ?previous,
                            "Several source files for one version, keeping the last one visited"
                        );
                    }
                    ConflictPolicy::Error => {
                        return Err(InfrastructureError::SourceConflict {
                            version: label.to_string(),
                            first: previous,
                            second: path.to_path_buf(),
                        });
                    }
                }
            }
        }

        Ok(sources)
    }
}
