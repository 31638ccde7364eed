// glossia/src/commands/names.rs
//
// USE CASE: List the entry identifiers of one version, in file order.

use std::path::PathBuf;

use anyhow::Context;

use glossia_core::application::collect_names;
use glossia_core::domain::registry::entries::spaced_phrases;
use glossia_core::domain::registry::version::VersionLabel;
use glossia_core::infrastructure::config::load_census_config;
use glossia_core::infrastructure::extract::LineScanner;
use glossia_core::infrastructure::locator::RegistryDiscovery;

pub fn execute(registry_dir: PathBuf, version: &str, spaced: bool) -> anyhow::Result<()> {
    let label: VersionLabel = version.parse()?;

    let config = load_census_config(&registry_dir).with_context(|| {
        format!(
            "Failed to load census configuration from {:?}",
            registry_dir
        )
    })?;

    let names = collect_names(&RegistryDiscovery, &LineScanner, &registry_dir, &config)?;

    let Some(entries) = names.get(&label) else {
        anyhow::bail!(
            "❌ Version '{}' not found under {:?}\n👉 Run 'glossia census' to see what is there.",
            label,
            registry_dir
        );
    };

    println!("🔎 {} entries in version {}", entries.len(), label);

    if spaced {
        for phrase in spaced_phrases(entries) {
            println!("{phrase}");
        }
    } else {
        for name in entries {
            println!("{name}");
        }
    }

    Ok(())
}
