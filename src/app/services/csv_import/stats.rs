//! Import statistics and result structures
//!
//! Reports what the importer decided (deduced format, sample votes, rows that
//! needed a different format) alongside the records themselves.

use super::date_formats::DateFormat;
use super::inference::FormatVotes;
use crate::app::models::LogRecord;
use serde::Serialize;

/// Records produced by one import together with how they were produced
#[derive(Debug, Clone)]
pub struct ImportResult {
    /// Validated records in file order
    pub records: Vec<LogRecord>,

    pub stats: ImportStats,
}

impl ImportResult {
    /// Result for input without data rows
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
            stats: ImportStats::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Summary of one import
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImportStats {
    /// Data rows in the file
    pub data_rows: usize,

    /// Rows inspected when deducing the date format
    pub rows_sampled: usize,

    /// Format applied to the whole file
    pub deduced_format: Option<String>,

    /// Vote count per format identifier, in candidate order
    pub sample_votes: Vec<(String, usize)>,

    /// `(row, format)` for rows whose date only parsed under another format
    pub fallback_rows: Vec<(usize, String)>,
}

impl ImportStats {
    pub(crate) fn from_votes(data_rows: usize, format: DateFormat, votes: &FormatVotes) -> Self {
        Self {
            data_rows,
            rows_sampled: votes.rows_sampled,
            deduced_format: Some(format.to_string()),
            sample_votes: votes
                .iter()
                .map(|(format, count)| (format.to_string(), count))
                .collect(),
            fallback_rows: Vec::new(),
        }
    }

    /// Share of sampled dates that agreed with the deduced format, in percent
    pub fn agreement_rate(&self) -> f64 {
        let total: usize = self.sample_votes.iter().map(|(_, count)| count).sum();
        let winning = self
            .deduced_format
            .as_ref()
            .and_then(|format| self.sample_votes.iter().find(|(id, _)| id == format))
            .map_or(0, |(_, count)| *count);

        if total == 0 {
            0.0
        } else {
            (winning as f64 / total as f64) * 100.0
        }
    }
}
