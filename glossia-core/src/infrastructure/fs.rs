// glossia-core/src/infrastructure/fs.rs

use crate::infrastructure::error::InfrastructureError;
use std::io::Write;
use std::path::Path;

/// Write content to a file atomically using a temporary file.
///
/// The temporary file is created in the target's own directory so the final
/// rename never crosses a filesystem boundary. The target ends up either
/// fully written or untouched.
pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(
    path: P,
    content: C,
) -> Result<(), InfrastructureError> {
    let path = path.as_ref();
    let parent = path.parent().unwrap_or_else(|| Path::new("."));

    let mut temp_file = tempfile::NamedTempFile::new_in(parent).map_err(InfrastructureError::Io)?;

    temp_file
        .write_all(content.as_ref())
        .map_err(InfrastructureError::Io)?;

    temp_file
        .persist(path)
        .map_err(|e| InfrastructureError::Io(e.error))?;

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_atomic_write_creates_target() -> Result<()> {
        let dir = tempdir()?;
        let artifact = dir.path().join("census.json");

        atomic_write(&artifact, "{}")?;

        assert_eq!(fs::read_to_string(artifact)?, "{}");
        Ok(())
    }

    #[test]
    fn test_atomic_write_replaces_previous_artifact() -> Result<()> {
        let dir = tempdir()?;
        let artifact = dir.path().join("census.json");

        atomic_write(&artifact, "old")?;
        atomic_write(&artifact, "new")?;

        assert_eq!(fs::read_to_string(artifact)?, "new");
        Ok(())
    }
}
