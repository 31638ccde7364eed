// glossia/src/commands/census.rs
//
// USE CASE: Run the census (totals, dates, diffs per version).

use std::path::PathBuf;

use anyhow::Context;
use comfy_table::Table;
use comfy_table::presets::UTF8_FULL;

use glossia_core::application::{CensusReporter, run_census};
use glossia_core::infrastructure::config::load_census_config;
use glossia_core::infrastructure::extract::LineScanner;
use glossia_core::infrastructure::locator::RegistryDiscovery;

pub fn execute(registry_dir: PathBuf, no_artifact: bool) -> anyhow::Result<()> {
    let start = std::time::Instant::now();

    // A. Load the Config (Infra)
    println!("⚙️  Loading configuration...");
    let config = load_census_config(&registry_dir).with_context(|| {
        format!(
            "Failed to load census configuration from {:?}",
            registry_dir
        )
    })?;

    // B. Run the Census (Application Layer)
    println!("🔎 Scanning registry in: {:?}", registry_dir);
    let table = run_census(&RegistryDiscovery, &LineScanner, &registry_dir, &config)?;
    tracing::debug!(versions = table.len(), "Census computed");

    if table.is_empty() {
        println!("   ⚠️  No versions found under {:?}", registry_dir);
        return Ok(());
    }

    // C. Raw/crude table of totals per version.
    // Anything nicer (plots, word clouds) consumes census.json instead.
    let mut display = Table::new();
    display.load_preset(UTF8_FULL);
    display.set_header(vec!["Version", "Total", "Last modified", "Diff"]);
    for summary in table.values() {
        display.add_row(vec![
            summary.version.to_string(),
            summary.total.to_string(),
            summary.last_modified.to_string(),
            format_diff(summary.diff),
        ]);
    }
    println!("{display}");

    // D. Hand-off artifact for the presentation layer
    if !no_artifact {
        let target_dir = registry_dir.join(&config.target_path);
        let json_path = CensusReporter::write(&registry_dir, &target_dir, &table)?;
        println!("📝 Census artifact written to {}", json_path.display());
    }

    println!("\n✨ SUCCESS! Census finished in {:.2?}", start.elapsed());
    Ok(())
}

fn format_diff(diff: i64) -> String {
    if diff > 0 {
        format!("+{diff}")
    } else {
        diff.to_string()
    }
}
