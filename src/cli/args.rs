//! Command-line argument definitions for the compost log
//!
//! Defines the CLI interface using the clap derive API.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the compost log
///
/// Keeps compost pile readings per profile and moves them in and out of CSV
/// files, detecting the date format of imported files automatically.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "compost-log",
    version,
    about = "Compost pile monitoring log with CSV import/export",
    long_about = "Keeps temperature, humidity, pH and electrical conductivity readings for \
                  each compost pile. CSV files are imported all-or-nothing with their date \
                  format detected from a sample of rows, and exported in a layout that \
                  imports back unchanged."
)]
pub struct Args {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Options shared by every subcommand
#[derive(Debug, Clone, Parser)]
pub struct GlobalArgs {
    /// Path to the profile store (JSON)
    ///
    /// Defaults to the configured store, normally
    /// <data dir>/compost-log/profiles.json
    #[arg(long = "store", value_name = "FILE", global = true)]
    pub store_path: Option<PathBuf>,

    /// Path to configuration file (JSON)
    #[arg(short = 'c', long = "config", value_name = "FILE", global = true)]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Suppress output except errors"
    )]
    pub quiet: bool,
}

impl GlobalArgs {
    /// Log level derived from the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Manage compost profiles
    Profiles(ProfilesArgs),
    /// Import readings from CSV files into a profile
    Import(ImportArgs),
    /// Export a profile's readings to CSV
    Export(ExportArgs),
    /// Analyse a CSV file without importing it
    Detect(DetectArgs),
}

#[derive(Debug, Clone, Parser)]
pub struct ProfilesArgs {
    #[command(subcommand)]
    pub action: ProfileAction,
}

#[derive(Debug, Clone, Subcommand)]
pub enum ProfileAction {
    /// List profiles with their record counts
    List {
        #[arg(long = "format", value_enum, default_value = "human")]
        output_format: OutputFormat,
    },
    /// Create a new profile
    Create {
        /// Profile name
        name: String,

        /// Description of the starting materials
        #[arg(long = "composition", default_value = "")]
        initial_composition: String,
    },
    /// Delete a profile and all of its records
    Delete {
        /// Profile name or id
        profile: String,
    },
}

#[derive(Debug, Clone, Parser)]
pub struct ImportArgs {
    /// Profile name or id to import into
    #[arg(short = 'p', long = "profile", value_name = "PROFILE")]
    pub profile: String,

    /// CSV files to import; each file is imported all-or-nothing
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Rows sampled to detect the date format (overrides config)
    #[arg(long = "sample-size", value_name = "ROWS")]
    pub sample_size: Option<usize>,
}

#[derive(Debug, Clone, Parser)]
pub struct ExportArgs {
    /// Profile name or id to export
    #[arg(short = 'p', long = "profile", value_name = "PROFILE")]
    pub profile: String,

    /// Output file (defaults to datos_composta_<profile>_<yyyyMMdd>.csv)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Leave out the AmbientTemperature_C column
    #[arg(long = "no-ambient")]
    pub no_ambient: bool,

    /// Write to stdout instead of a file
    #[arg(long = "stdout", conflicts_with = "output")]
    pub stdout: bool,
}

#[derive(Debug, Clone, Parser)]
pub struct DetectArgs {
    /// CSV file to analyse
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Rows sampled to detect the date format (overrides config)
    #[arg(long = "sample-size", value_name = "ROWS")]
    pub sample_size: Option<usize>,

    /// Output format for results
    #[arg(long = "format", value_enum, default_value = "human")]
    pub output_format: OutputFormat,
}

/// Output format options for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}
