//! CSV export of compost log records
//!
//! Produces the fixed-layout CSV that the importer reads back: one header row,
//! one row per record, dates as `yyyy-MM-dd HH:mm:ss` (UTC), temperatures and
//! pH to one decimal, conductivity to two, notes always quoted.

use crate::app::models::{CompostProfile, LogRecord};
use crate::config::ExportOptions;
use crate::constants::{
    EXPORT_DATE_FORMAT, EXPORT_FILE_PREFIX, EXPORT_HEADER, EXPORT_HEADER_WITH_AMBIENT,
};
use chrono::NaiveDate;

/// Render records as CSV text (no trailing newline)
pub fn export_csv(records: &[LogRecord], options: &ExportOptions) -> String {
    let header = if options.include_ambient_temperature {
        EXPORT_HEADER_WITH_AMBIENT
    } else {
        EXPORT_HEADER
    };

    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(header.join(","));
    lines.extend(records.iter().map(|record| export_row(record, options)));
    lines.join("\n")
}

fn export_row(record: &LogRecord, options: &ExportOptions) -> String {
    let mut cells = vec![
        record.date.format(EXPORT_DATE_FORMAT).to_string(),
        format!("{:.1}", record.temperature),
        format!("{:.1}", record.humidity),
        optional(record.ph, 1),
        optional(record.ec, 2),
    ];
    if options.include_ambient_temperature {
        cells.push(optional(record.ambient_temperature, 1));
    }
    cells.push(quote(&record.notes));
    cells.join(",")
}

fn optional(value: Option<f64>, decimals: usize) -> String {
    value
        .map(|v| format!("{:.*}", decimals, v))
        .unwrap_or_default()
}

fn quote(text: &str) -> String {
    format!("\"{}\"", text.replace('"', "\"\""))
}

/// File name for a profile's export on the given day
pub fn export_file_name(profile: &CompostProfile, day: NaiveDate) -> String {
    format!(
        "{}_{}_{}.csv",
        EXPORT_FILE_PREFIX,
        profile.safe_name(),
        day.format("%Y%m%d")
    )
}
