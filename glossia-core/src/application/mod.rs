// glossia-core/src/application/mod.rs

pub mod census;
pub mod clean;
pub mod compare;
pub mod report;

// --- RE-EXPORTS (FACADE PATTERN) ---
// Cela permet au CLI de faire :
// `use glossia_core::application::{run_census, collect_names, clean_registry};`
// sans avoir à connaître la structure interne des fichiers.

pub use census::{collect_names, run_census};
pub use clean::clean_registry;
pub use compare::new_names_between;
pub use report::CensusReporter;
