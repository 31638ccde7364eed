// glossia/src/main.rs

mod cli;
mod commands;

use clap::Parser;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // 1. Setup Logging (Tracing)
    // RUST_LOG=debug glossia census ... pour voir les détails
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        // --- USE CASE: CENSUS ---
        Commands::Census {
            registry_dir,
            no_artifact,
        } => commands::census::execute(registry_dir, no_artifact),

        // --- USE CASE: NAMES OF ONE VERSION ---
        Commands::Names {
            registry_dir,
            version,
            spaced,
        } => commands::names::execute(registry_dir, &version, spaced),

        // --- USE CASE: NEW NAMES BETWEEN VERSIONS ---
        Commands::Diff {
            registry_dir,
            newer,
            older,
            raw,
        } => commands::diff::execute(registry_dir, &newer, &older, raw),

        // --- USE CASE: CLEAN ---
        Commands::Clean { registry_dir } => commands::clean::execute(registry_dir),
    }
}
