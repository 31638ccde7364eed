// glossia-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Version gap too large at version {version}")]
    #[diagnostic(
        code(glossia::domain::version_gap),
        help(
            "Neither of the two preceding versions exists in the registry. A gap wider \
             than two consecutive versions is a data-integrity problem to resolve \
             upstream, not to skip over."
        )
    )]
    VersionGap { version: u32 },

    #[error("'{0}' is not a version label")]
    #[diagnostic(
        code(glossia::domain::bad_label),
        help("Expected a release number (e.g. '23') or the literal 'current'.")
    )]
    UnknownVersionLabel(String),

    #[error("Version '{0}' not found in registry")]
    #[diagnostic(code(glossia::domain::version_not_found))]
    VersionNotFound(String),

    #[error("Source discovery failed: {0}")]
    #[diagnostic(code(glossia::domain::locate))]
    LocateError(String),

    #[error("Entry extraction failed: {0}")]
    #[diagnostic(code(glossia::domain::extract))]
    ExtractError(String),
}
