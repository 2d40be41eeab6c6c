//! CSV export command

use super::shared::open_store;
use crate::app::services::csv_export::{export_csv, export_file_name};
use crate::cli::args::ExportArgs;
use crate::config::Config;
use anyhow::{Context, Result};
use chrono::Utc;
use colored::*;
use std::path::PathBuf;
use tracing::info;

pub fn run_export(args: ExportArgs, config: &Config) -> Result<()> {
    let store = open_store(config)?;
    let profile = store
        .find(&args.profile)
        .with_context(|| format!("Profile '{}' not found", args.profile))?;

    let mut options = config.export;
    if args.no_ambient {
        options.include_ambient_temperature = false;
    }

    let csv = export_csv(&profile.data_logs, &options);

    if args.stdout {
        println!("{}", csv);
        return Ok(());
    }

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(export_file_name(profile, Utc::now().date_naive())));

    std::fs::write(&output, csv)
        .with_context(|| format!("Failed to write export file {}", output.display()))?;
    info!("Exported {} records to {}", profile.data_logs.len(), output.display());

    println!(
        "{} {} records from {} to {}",
        "Exported".green().bold(),
        profile.data_logs.len(),
        profile.name.bright_cyan(),
        output.display()
    );
    Ok(())
}
