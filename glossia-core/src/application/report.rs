// glossia-core/src/application/report.rs

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Utc;
use serde::Serialize;
use tracing::debug;

use crate::domain::registry::summary::CensusTable;
use crate::error::GlossiaError;

// --- DTOs (Data Transfer Objects) ---
// This is exactly what the presentation layer (plots, word clouds) consumes.

#[derive(Serialize)]
pub struct CensusArtifact<'a> {
    pub generated_at: String,
    pub registry_root: String,
    pub stats: CensusStats,
    pub versions: &'a CensusTable,
}

#[derive(Serialize)]
pub struct CensusStats {
    pub version_count: usize,
    pub latest_total: usize,
    pub peak_growth: i64,
}

// --- GENERATOR SERVICE ---

pub struct CensusReporter;

impl CensusReporter {
    /// Serialize the census to `<target>/census.json`, atomically.
    pub fn write(
        registry_root: &Path,
        target_dir: &Path,
        table: &CensusTable,
    ) -> Result<PathBuf, GlossiaError> {
        if !target_dir.exists() {
            fs::create_dir_all(target_dir)?;
        }

        let artifact = CensusArtifact {
            generated_at: Utc::now().to_rfc3339(),
            registry_root: registry_root.display().to_string(),
            stats: CensusStats {
                version_count: table.len(),
                latest_total: table.values().next_back().map_or(0, |s| s.total),
                peak_growth: table.values().map(|s| s.diff).max().unwrap_or(0),
            },
            versions: table,
        };

        let json_path = target_dir.join("census.json");
        let json_content = serde_json::to_string_pretty(&artifact)
            .context("Failed to serialize census to JSON")
            .map_err(|e| GlossiaError::InternalError(e.to_string()))?;

        crate::infrastructure::fs::atomic_write(&json_path, &json_content)
            .map_err(GlossiaError::Infrastructure)?;

        debug!(path = ?json_path, "Census artifact written");
        Ok(json_path)
    }
}
