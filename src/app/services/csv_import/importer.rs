//! Import orchestration
//!
//! Text is split into rows, the date format is deduced from a sample, then
//! every row is converted. The first failing row aborts the whole import so
//! callers never receive a partial set of records.

use std::path::Path;
use tracing::{debug, info};

use super::inference::deduce_format;
use super::record_parser::parse_log_record;
use super::stats::{ImportResult, ImportStats};
use super::table::CsvTable;
use crate::app::models::LogRecord;
use crate::config::ImportOptions;
use crate::error::{CompostError, ImportError, Result};

/// Stateless importer for compost log CSV text
#[derive(Debug, Clone, Default)]
pub struct CsvImporter {
    options: ImportOptions,
}

impl CsvImporter {
    pub fn new(options: ImportOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ImportOptions {
        &self.options
    }

    /// Import CSV text, all or nothing
    pub fn import_str(&self, text: &str) -> std::result::Result<ImportResult, ImportError> {
        let table = CsvTable::parse(text);
        if table.is_empty() {
            info!("No data rows to import");
            return Ok(ImportResult::empty());
        }

        let (format, votes) = deduce_format(&table.rows, &self.options)?;
        info!(
            "Using date format {} for {} rows ({} of {} sampled dates agree)",
            format,
            table.len(),
            votes.count(format),
            votes.dates_seen
        );

        let mut stats = ImportStats::from_votes(table.len(), format, &votes);
        let mut records = Vec::with_capacity(table.len());

        for row in &table.rows {
            let parsed = parse_log_record(row, format, &self.options)?;
            if let Some(fallback) = parsed.fallback_format {
                stats.fallback_rows.push((row.line, fallback.to_string()));
            }
            records.push(parsed.record);
        }

        debug!(
            "Imported {} records, {} needed fallback date parsing",
            records.len(),
            stats.fallback_rows.len()
        );

        Ok(ImportResult { records, stats })
    }

    /// Read a file and import its contents
    pub fn import_file(&self, path: &Path) -> Result<ImportResult> {
        info!("Importing CSV file: {}", path.display());

        let content = std::fs::read_to_string(path).map_err(|e| {
            CompostError::io(format!("Failed to read file {}", path.display()), e)
        })?;

        Ok(self.import_str(&content)?)
    }
}

/// Import CSV text with default options
///
/// Returns the records in file order, an empty vector when the text has no
/// data rows, or the first row-level error.
pub fn import_csv(text: &str) -> std::result::Result<Vec<LogRecord>, ImportError> {
    CsvImporter::default()
        .import_str(text)
        .map(|result| result.records)
}
