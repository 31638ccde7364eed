// glossia-core/src/domain/ports/locator.rs

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::domain::error::DomainError;
use crate::domain::registry::configuration::CensusConfig;
use crate::domain::registry::version::VersionLabel;

/// Finds the one authoritative source file per version under a registry root.
pub trait SourceLocator: Send + Sync {
    fn locate(
        &self,
        root: &Path,
        config: &CensusConfig,
    ) -> Result<BTreeMap<VersionLabel, PathBuf>, DomainError>;
}
