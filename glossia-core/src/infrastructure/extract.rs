// glossia-core/src/infrastructure/extract.rs

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::domain::error::DomainError;
use crate::domain::ports::EntryExtractor;
use crate::infrastructure::error::InfrastructureError;

fn re_entry() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"<entry id="(.+)">"#).unwrap_or_else(|_| {
            // This should never happen as the regex is hardcoded
            // and we avoid unsafe methods to satisfy Clippy and the security guard.
            Regex::new("$^").unwrap_or_else(|_| unreachable!())
        })
    })
}

fn re_last_modified() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"<last_modified>(.+)T(.+)</last_modified>").unwrap_or_else(|_| {
            Regex::new("$^").unwrap_or_else(|_| unreachable!())
        })
    })
}

/// Line-oriented scanner over one registry file.
///
/// Deliberately NOT an XML parser: a malformed document never fails
/// extraction, its broken lines simply fail to match. First match per line,
/// capture group 1, file order preserved, duplicates kept.
pub struct LineScanner;

impl LineScanner {
    fn scan(pattern: &Regex, path: &Path) -> Result<Vec<String>, InfrastructureError> {
        let file = File::open(path).map_err(InfrastructureError::Io)?;
        let reader = BufReader::new(file);

        let mut extracted = Vec::new();
        for line in reader.lines() {
            let line = line.map_err(InfrastructureError::Io)?;
            if let Some(caps) = pattern.captures(&line)
                && let Some(m) = caps.get(1)
            {
                extracted.push(m.as_str().to_string());
            }
        }
        Ok(extracted)
    }

    pub fn entries_in(path: &Path) -> Result<Vec<String>, InfrastructureError> {
        Self::scan(re_entry(), path)
    }

    /// Date portion of the first last-modified line; later ones are ignored.
    pub fn last_modified_in(path: &Path) -> Result<Option<String>, InfrastructureError> {
        Ok(Self::scan(re_last_modified(), path)?.into_iter().next())
    }
}

impl EntryExtractor for LineScanner {
    fn entries(&self, path: &Path) -> Result<Vec<String>, DomainError> {
        Self::entries_in(path)
            .map_err(|e| DomainError::ExtractError(format!("{}: {}", path.display(), e)))
    }

    fn last_modified(&self, path: &Path) -> Result<Option<String>, DomainError> {
        Self::last_modified_in(path)
            .map_err(|e| DomainError::ExtractError(format!("{}: {}", path.display(), e)))
    }
}
