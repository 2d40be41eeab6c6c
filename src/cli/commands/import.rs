//! CSV import command
//!
//! Each file is imported all-or-nothing. Files that succeed are merged into
//! the profile; a failing file is reported and leaves the profile untouched.

use super::shared::{file_progress, open_store};
use crate::app::services::csv_import::{CsvImporter, ImportResult};
use crate::cli::args::{GlobalArgs, ImportArgs};
use crate::config::Config;
use anyhow::{Context, Result};
use colored::*;
use std::path::Path;
use tracing::{error, info};

pub fn run_import(args: ImportArgs, global: &GlobalArgs, config: &Config) -> Result<()> {
    let mut store = open_store(config)?;
    let profile_name = store
        .find(&args.profile)
        .map(|p| p.name.clone())
        .with_context(|| format!("Profile '{}' not found", args.profile))?;

    let mut options = config.import;
    if let Some(sample_size) = args.sample_size {
        anyhow::ensure!(sample_size > 0, "Sample size must be greater than 0");
        options = options.with_sample_size(sample_size);
    }
    let importer = CsvImporter::new(options);

    let progress = file_progress(global, args.files.len());
    let mut imported = 0;
    let mut failed = Vec::new();

    for file in &args.files {
        if let Some(pb) = &progress {
            pb.set_message(format!("{}", file.display()));
        }

        match importer.import_file(file) {
            Ok(result) if result.is_empty() => {
                println!("{} {}", file.display(), "no data rows: nothing to import".yellow());
            }
            Ok(result) => {
                report_success(file, &result);
                imported += result.records.len();
                store.append_logs(&args.profile, result.records)?;
            }
            Err(e) => {
                error!("Import of {} failed: {}", file.display(), e);
                println!("{} {}: {}", "Import failed".red().bold(), file.display(), e);
                failed.push(file.clone());
            }
        }

        if let Some(pb) = &progress {
            pb.inc(1);
        }
    }

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    if imported > 0 {
        store.save()?;
    }
    info!(
        "Imported {} records into '{}' from {} files",
        imported,
        profile_name,
        args.files.len() - failed.len()
    );

    println!(
        "{} {} records into {}",
        "Imported".green().bold(),
        imported,
        profile_name.bright_cyan()
    );

    if !failed.is_empty() {
        anyhow::bail!("{} of {} files failed to import", failed.len(), args.files.len());
    }
    Ok(())
}

fn report_success(file: &Path, result: &ImportResult) {
    let format = result.stats.deduced_format.as_deref().unwrap_or("-");
    println!(
        "{} {} {}",
        file.display(),
        format!("{} records", result.records.len()).green(),
        format!("(date format: {})", format).bright_black()
    );

    for (row, fallback) in &result.stats.fallback_rows {
        println!(
            "  {}",
            format!("row {}: date read as {} instead", row, fallback).yellow()
        );
    }
}
