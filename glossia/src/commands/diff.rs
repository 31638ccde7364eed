// glossia/src/commands/diff.rs
//
// USE CASE: Names new to one version relative to an older one.
// The spaced output is what word-cloud tooling expects to ingest.

use std::path::PathBuf;

use anyhow::Context;

use glossia_core::application::{collect_names, new_names_between};
use glossia_core::domain::registry::entries::spaced_phrases;
use glossia_core::domain::registry::version::VersionLabel;
use glossia_core::infrastructure::config::load_census_config;
use glossia_core::infrastructure::extract::LineScanner;
use glossia_core::infrastructure::locator::RegistryDiscovery;

pub fn execute(registry_dir: PathBuf, newer: &str, older: &str, raw: bool) -> anyhow::Result<()> {
    let newer_label: VersionLabel = newer.parse()?;
    let older_label: VersionLabel = older.parse()?;

    let config = load_census_config(&registry_dir).with_context(|| {
        format!(
            "Failed to load census configuration from {:?}",
            registry_dir
        )
    })?;

    let names = collect_names(&RegistryDiscovery, &LineScanner, &registry_dir, &config)?;

    let mut added = new_names_between(&names, newer_label, older_label)?;
    // Set difference carries no order; sort for stable terminal output.
    added.sort();

    println!(
        "✨ {} names new to version {} (relative to {})",
        added.len(),
        newer_label,
        older_label
    );

    let lines = if raw { added } else { spaced_phrases(&added) };
    for line in lines {
        println!("{line}");
    }

    Ok(())
}
