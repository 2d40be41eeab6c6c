//! Command implementations for the compost log CLI
//!
//! Each command is implemented in its own module:
//! - `profiles`: profile listing, creation and deletion
//! - `import`: CSV import into a profile
//! - `export`: CSV export of a profile
//! - `detect`: dry-run analysis of a CSV file

pub mod detect;
pub mod export;
pub mod import;
pub mod profiles;
pub mod shared;

use crate::cli::args::{Args, Commands};
use anyhow::Result;

/// Main command runner
///
/// Sets up logging and configuration, then dispatches to the subcommand.
pub fn run(args: Args) -> Result<()> {
    shared::setup_logging(&args.global);
    let config = shared::load_configuration(&args.global)?;

    match args.command {
        Some(Commands::Profiles(profiles_args)) => profiles::run_profiles(profiles_args, &config),
        Some(Commands::Import(import_args)) => {
            import::run_import(import_args, &args.global, &config)
        }
        Some(Commands::Export(export_args)) => export::run_export(export_args, &config),
        Some(Commands::Detect(detect_args)) => detect::run_detect(detect_args, &config),
        None => Ok(()),
    }
}
