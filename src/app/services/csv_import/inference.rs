//! File-level date format deduction
//!
//! The leading rows of a file are parsed independently and each successful
//! parse votes for the format that produced it. The format with the most
//! votes is then applied to every row of the file.

use super::column_aliases::Column;
use super::date_formats::{DateFormat, attempt_parse};
use super::table::RawRow;
use crate::config::ImportOptions;
use crate::constants::EXAMPLE_DATE_FORMATS;
use crate::error::ImportError;
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Votes collected from the sample rows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormatVotes {
    counts: BTreeMap<DateFormat, usize>,

    /// Rows inspected
    pub rows_sampled: usize,

    /// Sampled rows that had a non-empty date cell
    pub dates_seen: usize,
}

impl FormatVotes {
    /// Parse the date cell of each of the first `sample_size` rows and tally
    pub fn tally(rows: &[RawRow], options: &ImportOptions) -> Self {
        let mut votes = Self::default();

        for row in rows.iter().take(options.sample_size) {
            votes.rows_sampled += 1;

            let Some(value) = Column::Date.resolve(row) else {
                continue;
            };
            votes.dates_seen += 1;

            match attempt_parse(value, options) {
                Some(attempt) => {
                    trace!("Sample row {}: '{}' -> {}", row.line, value, attempt.format);
                    *votes.counts.entry(attempt.format).or_insert(0) += 1;
                }
                None => debug!("Sample row {}: '{}' matched no format", row.line, value),
            }
        }

        votes
    }

    pub fn count(&self, format: DateFormat) -> usize {
        self.counts.get(&format).copied().unwrap_or(0)
    }

    /// Total successful parses in the sample
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Formats with their vote counts, in candidate order
    pub fn iter(&self) -> impl Iterator<Item = (DateFormat, usize)> + '_ {
        self.counts.iter().map(|(format, count)| (*format, *count))
    }

    /// Format with the most votes; ties go to the earlier candidate
    pub fn dominant(&self) -> Option<DateFormat> {
        let mut best: Option<(DateFormat, usize)> = None;
        for (format, count) in self.iter() {
            if best.is_none_or(|(_, best_count)| count > best_count) {
                best = Some((format, count));
            }
        }
        best.map(|(format, _)| format)
    }
}

/// Message listing the accepted example formats
pub fn expected_formats() -> String {
    EXAMPLE_DATE_FORMATS.join(", ")
}

/// Deduce the single date format used throughout `rows`
///
/// Fails when no sampled date cell parses under any format, including when
/// every sampled date cell is blank.
pub fn deduce_format(
    rows: &[RawRow],
    options: &ImportOptions,
) -> Result<(DateFormat, FormatVotes), ImportError> {
    let votes = FormatVotes::tally(rows, options);

    let format = votes
        .dominant()
        .ok_or_else(|| ImportError::DateFormatNotRecognized {
            expected: expected_formats(),
        })?;

    debug!(
        "Deduced date format {} from {}/{} sampled dates",
        format,
        votes.count(format),
        votes.dates_seen
    );

    Ok((format, votes))
}
