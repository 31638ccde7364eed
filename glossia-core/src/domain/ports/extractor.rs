// glossia-core/src/domain/ports/extractor.rs

use std::path::Path;

use crate::domain::error::DomainError;

/// Pulls entry identifiers and the last-modified date out of one source file.
pub trait EntryExtractor: Send + Sync {
    /// Entry identifiers in file order, duplicates preserved.
    fn entries(&self, path: &Path) -> Result<Vec<String>, DomainError>;

    /// Raw date portion of the first last-modified line, if any.
    fn last_modified(&self, path: &Path) -> Result<Option<String>, DomainError>;
}
