// glossia/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "glossia")]
#[command(about = "The Controlled Vocabulary Census Tool", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 📊 Runs the census (totals, dates, diffs per version)
    Census {
        /// Registry root directory
        #[arg(long, default_value = ".")]
        registry_dir: PathBuf,

        /// Skip writing target/census.json
        #[arg(long, default_value = "false")]
        no_artifact: bool,
    },

    /// 🔎 Lists the entry identifiers of one version
    Names {
        /// Registry root directory
        #[arg(long, default_value = ".")]
        registry_dir: PathBuf,

        /// Version to list (ex: "23", or "current")
        #[arg(long, short)]
        version: String,

        /// Print identifiers as spaced phrases (underscores removed)
        #[arg(long, default_value = "false")]
        spaced: bool,
    },

    /// ✨ Prints the names new to one version relative to an older one
    Diff {
        /// Registry root directory
        #[arg(long, default_value = ".")]
        registry_dir: PathBuf,

        /// Newer version (ex: "49", or "current")
        #[arg(long)]
        newer: String,

        /// Older version to compare against (ex: "48")
        #[arg(long)]
        older: String,

        /// Keep raw underscored identifiers instead of spaced phrases
        #[arg(long, default_value = "false")]
        raw: bool,
    },

    /// 🧹 Cleans census artifacts (target/ folder)
    Clean {
        #[arg(long, default_value = ".")]
        registry_dir: PathBuf,
    },
}
