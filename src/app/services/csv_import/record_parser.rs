//! Conversion of one raw row into a validated log record
//!
//! Required readings (date, temperature, humidity) fail the row when missing
//! or non-numeric. Optional readings are dropped when they do not parse.

use super::column_aliases::Column;
use super::date_formats::{DateFormat, attempt_parse};
use super::table::RawRow;
use crate::app::models::LogRecord;
use crate::config::ImportOptions;
use crate::constants::ranges;
use crate::error::ImportError;
use chrono::{DateTime, Utc};
use tracing::{debug, warn};

/// A converted row, noting whether its date needed a format other than the
/// file's deduced one
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRecord {
    pub record: LogRecord,
    pub fallback_format: Option<DateFormat>,
}

/// Convert a row using the file's deduced date format
pub fn parse_log_record(
    row: &RawRow,
    format: DateFormat,
    options: &ImportOptions,
) -> Result<ParsedRecord, ImportError> {
    let (date, fallback_format) = parse_row_date(row, format, options)?;

    let temperature = parse_required_number(row, Column::Temperature)?;
    let humidity = parse_required_number(row, Column::Humidity)?;

    let mut record = LogRecord::new(date, temperature, humidity);
    record.ph = parse_optional_number(row, Column::Ph);
    record.ec = parse_optional_number(row, Column::Ec);
    record.ambient_temperature = parse_optional_number(row, Column::AmbientTemperature);
    record.notes = Column::Notes.resolve(row).map(unquote).unwrap_or_default();

    warn_out_of_range(row.line, &record);

    Ok(ParsedRecord {
        record,
        fallback_format,
    })
}

/// Parse the row's date with the deduced format, falling back to the full
/// candidate search for this row only
pub fn parse_row_date(
    row: &RawRow,
    format: DateFormat,
    options: &ImportOptions,
) -> Result<(DateTime<Utc>, Option<DateFormat>), ImportError> {
    let value = Column::Date
        .resolve(row)
        .ok_or(ImportError::MissingDate { row: row.line })?;

    if let Some(instant) = format.parse(value, options) {
        return Ok((instant, None));
    }

    match attempt_parse(value, options) {
        Some(attempt) => {
            debug!(
                "Row {}: date '{}' parsed as {} instead of deduced {}",
                row.line, value, attempt.format, format
            );
            Ok((attempt.instant, Some(attempt.format)))
        }
        None => Err(ImportError::DateMismatch {
            row: row.line,
            value: value.to_string(),
            format: format.to_string(),
        }),
    }
}

/// Parse a decimal reading; the whole cell must be a finite number
pub fn parse_number(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
}

fn parse_required_number(row: &RawRow, column: Column) -> Result<f64, ImportError> {
    let value = column.resolve(row).ok_or(ImportError::MissingField {
        row: row.line,
        field: column.field_name(),
    })?;

    parse_number(value).ok_or_else(|| ImportError::InvalidField {
        row: row.line,
        field: column.field_name(),
        value: value.to_string(),
    })
}

fn parse_optional_number(row: &RawRow, column: Column) -> Option<f64> {
    let value = column.resolve(row)?;
    let number = parse_number(value);
    if number.is_none() {
        debug!(
            "Row {}: ignoring non-numeric {} '{}'",
            row.line,
            column.field_name(),
            value
        );
    }
    number
}

/// Strip one pair of surrounding double quotes and collapse doubled quotes
fn unquote(value: &str) -> String {
    match value
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
    {
        Some(inner) => inner.replace("\"\"", "\""),
        None => value.to_string(),
    }
}

fn warn_out_of_range(line: usize, record: &LogRecord) {
    let (min_humidity, max_humidity) = ranges::HUMIDITY;
    if !(min_humidity..=max_humidity).contains(&record.humidity) {
        warn!("Row {}: humidity {}% outside 0-100", line, record.humidity);
    }

    let (min_ph, max_ph) = ranges::PH;
    if let Some(ph) = record.ph.filter(|ph| !(min_ph..=max_ph).contains(ph)) {
        warn!("Row {}: pH {} outside 0-14", line, ph);
    }

    if let Some(ec) = record.ec.filter(|ec| *ec < ranges::EC_MIN) {
        warn!("Row {}: negative electrical conductivity {}", line, ec);
    }
}
