//! Dry-run analysis of a CSV file
//!
//! Shows which columns were recognised, how the sampled dates voted and what
//! an import would produce, without touching the profile store.

use crate::app::models::LogRecord;
use crate::app::services::csv_import::{
    ColumnReport, CsvImporter, CsvTable, ImportResult, ImportStats,
};
use crate::cli::args::{DetectArgs, OutputFormat};
use crate::config::Config;
use crate::error::ImportError;
use anyhow::{Context, Result};
use colored::*;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DetectReport<'a> {
    file: String,
    recognised_columns: Vec<(&'static str, String)>,
    missing_columns: Vec<&'static str>,
    unrecognised_headers: &'a [String],
    stats: Option<&'a ImportStats>,
    records: &'a [LogRecord],
    error: Option<String>,
}

pub fn run_detect(args: DetectArgs, config: &Config) -> Result<()> {
    let content = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read file {}", args.file.display()))?;

    let mut options = config.import;
    if let Some(sample_size) = args.sample_size {
        anyhow::ensure!(sample_size > 0, "Sample size must be greater than 0");
        options = options.with_sample_size(sample_size);
    }

    let table = CsvTable::parse(&content);
    let columns = ColumnReport::analyze(&table.headers);
    let outcome = CsvImporter::new(options).import_str(&content);

    match args.output_format {
        OutputFormat::Json => print_json(&args, &columns, &outcome)?,
        OutputFormat::Human => print_human(&columns, &outcome),
    }

    match outcome {
        Ok(_) => Ok(()),
        Err(e) => Err(e).with_context(|| format!("{} would not import", args.file.display())),
    }
}

fn print_json(
    args: &DetectArgs,
    columns: &ColumnReport,
    outcome: &std::result::Result<ImportResult, ImportError>,
) -> Result<()> {
    let report = DetectReport {
        file: args.file.display().to_string(),
        recognised_columns: columns
            .matched
            .iter()
            .map(|(column, header)| (column.field_name(), header.clone()))
            .collect(),
        missing_columns: columns
            .missing_required
            .iter()
            .map(|column| column.field_name())
            .collect(),
        unrecognised_headers: &columns.unrecognised,
        stats: outcome.as_ref().ok().map(|result| &result.stats),
        records: outcome.as_ref().map_or(&[][..], |result| result.records.as_slice()),
        error: outcome.as_ref().err().map(ToString::to_string),
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn print_human(columns: &ColumnReport, outcome: &std::result::Result<ImportResult, ImportError>) {
    println!("{}", "Columns:".bright_green().bold());
    for (column, header) in &columns.matched {
        println!("  {:<24} {}", column.field_name(), header.bright_cyan());
    }
    for column in &columns.missing_required {
        println!("  {:<24} {}", column.field_name(), "missing".red());
    }
    if !columns.unrecognised.is_empty() {
        println!(
            "  {:<24} {}",
            "ignored",
            columns.unrecognised.join(", ").bright_black()
        );
    }

    let result = match outcome {
        Ok(result) => result,
        Err(e) => {
            println!("\n{} {}", "Import would fail:".red().bold(), e);
            return;
        }
    };

    if result.is_empty() {
        println!("\n{}", "No data rows".yellow());
        return;
    }

    let stats = &result.stats;
    println!(
        "\n{} (sampled {} of {} rows)",
        "Date format votes:".bright_green().bold(),
        stats.rows_sampled,
        stats.data_rows
    );
    for (format, count) in &stats.sample_votes {
        let marker = if stats.deduced_format.as_deref() == Some(format.as_str()) {
            "*".green().bold()
        } else {
            " ".normal()
        };
        println!("  {} {:<28} {}", marker, format, count);
    }

    println!(
        "\n{} {} ({:.0}% of sampled dates agree)",
        "Deduced format:".bright_green().bold(),
        stats.deduced_format.as_deref().unwrap_or("-").bright_cyan(),
        stats.agreement_rate()
    );
    for (row, format) in &stats.fallback_rows {
        println!("  {}", format!("row {} parsed as {}", row, format).yellow());
    }

    println!(
        "{} {} records would be imported",
        "Result:".bright_green().bold(),
        result.records.len()
    );
}
