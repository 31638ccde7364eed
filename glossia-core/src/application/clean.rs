// glossia-core/src/application/clean.rs

use crate::error::GlossiaError;
use crate::infrastructure::config::census::load_census_config;
use crate::infrastructure::error::InfrastructureError;
use std::fs;
use std::path::Path;

pub fn clean_registry(registry_dir: &Path) -> Result<(), GlossiaError> {
    tracing::info!("🧹 Initializing Glossia cleanup sequence...");

    let config = load_census_config(registry_dir).map_err(GlossiaError::Infrastructure)?;

    let targets = if config.clean_targets.is_empty() {
        vec!["target".to_string()]
    } else {
        config.clean_targets
    };

    for target_rel_path in targets {
        let full_path = registry_dir.join(&target_rel_path);

        // Zero-Trust Path Traversal Guard
        if !full_path.starts_with(registry_dir) {
            return Err(GlossiaError::UnsafePath(target_rel_path));
        }

        if full_path.exists() {
            if full_path.is_dir() {
                fs::remove_dir_all(&full_path)
                    .map_err(|e| GlossiaError::Infrastructure(InfrastructureError::Io(e)))?;
            } else {
                fs::remove_file(&full_path)
                    .map_err(|e| GlossiaError::Infrastructure(InfrastructureError::Io(e)))?;
            }
            println!("   🗑️  Artifact removed: {}", target_rel_path);
        }
    }

    Ok(())
}

// --- UNIT TESTS ---
#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use tempfile::tempdir;

    #[test]
    fn test_clean_removes_target_dir() -> Result<()> {
        let dir = tempdir()?;
        let target = dir.path().join("target");
        fs::create_dir_all(&target)?;
        fs::write(target.join("census.json"), "{}")?;

        clean_registry(dir.path())?;

        assert!(!target.exists());
        Ok(())
    }

    #[test]
    fn test_clean_on_pristine_registry_is_a_noop() -> Result<()> {
        let dir = tempdir()?;
        clean_registry(dir.path())?;
        Ok(())
    }

    #[test]
    fn test_escaping_clean_target_is_rejected() -> Result<()> {
        let dir = tempdir()?;
        fs::write(
            dir.path().join("glossia.yaml"),
            "clean-targets:\n  - \"/etc\"\n",
        )?;

        let result = clean_registry(dir.path());
        assert!(matches!(result, Err(GlossiaError::UnsafePath(_))));
        Ok(())
    }
}
