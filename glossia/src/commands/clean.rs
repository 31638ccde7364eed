// glossia/src/commands/clean.rs
//
// USE CASE: Remove census artifacts (target/ folder).

use std::path::PathBuf;

use glossia_core::application::clean_registry;

pub fn execute(registry_dir: PathBuf) -> anyhow::Result<()> {
    if let Err(e) = clean_registry(&registry_dir) {
        eprintln!("❌ Clean failed: {}", e);
        std::process::exit(1);
    }
    Ok(())
}
