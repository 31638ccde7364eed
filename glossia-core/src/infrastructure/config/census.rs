// glossia-core/src/infrastructure/config/census.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};
use validator::Validate;

use crate::domain::registry::configuration::CensusConfig;
use crate::infrastructure::error::InfrastructureError;

#[instrument(skip(registry_dir))] // Log automatique de l'entrée/sortie de la fonction
pub fn load_census_config(registry_dir: &Path) -> Result<CensusConfig, InfrastructureError> {
    // 1. Découverte du fichier principal
    let mut config = match find_main_config(registry_dir) {
        Some(config_path) => {
            info!(path = ?config_path, "Loading census configuration");
            let content = fs::read_to_string(&config_path).map_err(InfrastructureError::Io)?;
            serde_yaml::from_str(&content).map_err(InfrastructureError::YamlError)?
        }
        None => {
            // Un registre sans fichier de config est légitime : on prend les défauts.
            info!(root = ?registry_dir, "No configuration file found, using defaults");
            CensusConfig::default()
        }
    };

    // 2. Override via Variables d'Environnement (Pattern 'Layering')
    // Permet de faire: GLOSSIA_PLACEHOLDER_DATE=2000-01-01 glossia census
    apply_env_overrides(&mut config);

    // 3. Validation (Fail-Secure)
    config
        .validate()
        .map_err(|e| InfrastructureError::ConfigError(e.to_string()))?;

    Ok(config)
}

fn find_main_config(root: &Path) -> Option<PathBuf> {
    let candidates = ["glossia_census_conf.yaml", "glossia.yaml"];
    candidates
        .into_iter()
        .map(|filename| root.join(filename))
        .find(|p| p.exists())
}

fn apply_env_overrides(config: &mut CensusConfig) {
    if let Ok(val) = std::env::var("GLOSSIA_TARGET_PATH") {
        info!(old = ?config.target_path, new = ?val, "Overriding target path via ENV");
        config.target_path = val;
    }
    if let Ok(val) = std::env::var("GLOSSIA_PLACEHOLDER_DATE") {
        match val.parse() {
            Ok(date) => {
                info!(old = ?config.placeholder_date, new = ?date, "Overriding placeholder date via ENV");
                config.placeholder_date = date;
            }
            Err(_) => warn!(value = %val, "Ignoring unparseable GLOSSIA_PLACEHOLDER_DATE"),
        }
    }
}
