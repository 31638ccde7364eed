// glossia-core/src/infrastructure/error.rs

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(glossia::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(glossia::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError(#[from] serde_yaml::Error),

    #[error("Configuration Error: {0}")]
    ConfigError(String),

    // --- REGISTRY DATA ---
    #[error("Unparseable last-modified date '{raw}' for version '{version}'")]
    #[diagnostic(
        code(glossia::infra::date),
        help(
            "The date must read YYYY-MM-DD after patches. Add a 'date-patches' entry \
             for this version if the registry file carries a stray character."
        )
    )]
    DateParse {
        version: String,
        raw: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Conflicting source files for version '{version}': {first:?} vs {second:?}")]
    #[diagnostic(
        code(glossia::infra::source_conflict),
        help("Each version directory must hold exactly one registry file.")
    )]
    SourceConflict {
        version: String,
        first: PathBuf,
        second: PathBuf,
    },
}
