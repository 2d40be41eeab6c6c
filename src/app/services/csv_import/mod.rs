//! CSV import of compost log readings
//!
//! Turns the text of a user-supplied CSV file into validated [`LogRecord`]s
//! without knowing its date format in advance.
//!
//! ## Architecture
//!
//! - [`table`] - Naive header-indexed CSV splitting
//! - [`column_aliases`] - Header spellings accepted for each column
//! - [`date_formats`] - Single-value parsing against the candidate formats
//! - [`inference`] - Sampling and voting for the file's dominant format
//! - [`record_parser`] - Row validation and numeric coercion
//! - [`importer`] - All-or-nothing orchestration
//! - [`stats`] - Import result and statistics
//!
//! ## Usage
//!
//! ```rust
//! use compost_log::app::services::csv_import::import_csv;
//!
//! let text = "date,temperature_c,humidity_pc\n13/02/2024,48.5,55.2\n";
//! let records = import_csv(text).unwrap();
//! assert_eq!(records.len(), 1);
//! ```
//!
//! [`LogRecord`]: crate::app::models::LogRecord

pub mod column_aliases;
pub mod date_formats;
pub mod importer;
pub mod inference;
pub mod record_parser;
pub mod stats;
pub mod table;

#[cfg(test)]
pub mod tests;

pub use column_aliases::{Column, ColumnReport};
pub use date_formats::{DateFormat, DateParseAttempt, attempt_parse};
pub use importer::{CsvImporter, import_csv};
pub use inference::{FormatVotes, deduce_format};
pub use stats::{ImportResult, ImportStats};
pub use table::{CsvTable, RawRow, parse_csv};
