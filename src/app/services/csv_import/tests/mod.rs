//! Test utilities for the CSV import pipeline
//!
//! Shared builders for CSV text and expected instants used across the test
//! modules.

use chrono::{DateTime, TimeZone, Utc};

// Test modules
mod date_format_tests;

/// Join lines into CSV text with a trailing newline
pub fn csv(lines: &[&str]) -> String {
    let mut text = lines.join("\n");
    text.push('\n');
    text
}

/// Build CSV text with the standard three required columns
pub fn readings_csv(dates: &[&str]) -> String {
    let mut lines = vec!["date,temperature_c,humidity_pc".to_string()];
    lines.extend(dates.iter().map(|date| format!("{},50.0,55.0", date)));
    let mut text = lines.join("\n");
    text.push('\n');
    text
}

pub fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, second)
        .unwrap()
}

pub fn midnight(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    utc(year, month, day, 0, 0, 0)
}
