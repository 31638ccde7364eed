// glossia-core/src/domain/registry/mod.rs

pub mod configuration;
pub mod entries;
pub mod summary;
pub mod version;

pub use configuration::{CensusConfig, ConflictPolicy, DatePatch};
pub use summary::{CensusTable, VersionFigures, VersionSummary, compute_diffs};
pub use version::{VersionLabel, remap_current};
