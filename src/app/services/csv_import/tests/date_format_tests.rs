//! Tests for single-value date parsing and disambiguation

use super::*;
use crate::app::services::csv_import::date_formats::{
    CANDIDATE_PATTERNS, DateFormat, attempt_parse, parse_iso8601,
};
use crate::config::ImportOptions;

fn parse(value: &str) -> Option<(DateTime<Utc>, &'static str)> {
    attempt_parse(value, &ImportOptions::default()).map(|a| (a.instant, a.format.id()))
}

#[test]
fn test_iso_dates_always_win() {
    assert_eq!(parse("2024-01-01"), Some((midnight(2024, 1, 1), "ISO-8601")));
    assert_eq!(
        parse("2024-03-05T14:30:00Z"),
        Some((utc(2024, 3, 5, 14, 30, 0), "ISO-8601"))
    );
    assert_eq!(
        parse("2024-03-05 14:30:00"),
        Some((utc(2024, 3, 5, 14, 30, 0), "ISO-8601"))
    );
    assert_eq!(
        parse("2024-03-05T14:30"),
        Some((utc(2024, 3, 5, 14, 30, 0), "ISO-8601"))
    );
}

#[test]
fn test_iso_offsets_and_fractions() {
    assert_eq!(
        parse_iso8601("2024-03-05T14:30:00+02:00"),
        Some(utc(2024, 3, 5, 12, 30, 0))
    );
    assert_eq!(
        parse_iso8601("2024-03-05T14:30:00-0100"),
        Some(utc(2024, 3, 5, 15, 30, 0))
    );

    let with_millis = parse_iso8601("2024-03-05T14:30:00.250Z").unwrap();
    assert_eq!(with_millis.timestamp_subsec_millis(), 250);
}

#[test]
fn test_iso_rejects_short_years_and_invalid_dates() {
    assert_eq!(parse_iso8601("24-01-01"), None);
    assert_eq!(parse_iso8601("2024-1-5"), None);
    assert_eq!(parse_iso8601("2024-02-30"), None);
    assert_eq!(parse_iso8601("2024-01-01T25:00"), None);
}

#[test]
fn test_iso_basic_form() {
    assert_eq!(parse("20240413"), Some((midnight(2024, 4, 13), "ISO-8601")));
    assert_eq!(
        parse("20240413T0830Z"),
        Some((utc(2024, 4, 13, 8, 30, 0), "ISO-8601"))
    );
    assert_eq!(
        parse_iso8601("20240413T083015+0200"),
        Some(utc(2024, 4, 13, 6, 30, 15))
    );
    assert_eq!(parse_iso8601("20241302"), None);
}

#[test]
fn test_day_above_twelve_selects_day_first() {
    assert_eq!(parse("13/04/2024"), Some((midnight(2024, 4, 13), "dd/MM/yyyy")));
    assert_eq!(
        parse("13/4/2024 08:00"),
        Some((utc(2024, 4, 13, 8, 0, 0), "dd/MM/yyyy HH:mm"))
    );

    let month_first = DateFormat::from_id("MM/dd/yyyy HH:mm").unwrap();
    assert_eq!(month_first.parse("13/4/2024 08:00", &ImportOptions::default()), None);
}

#[test]
fn test_month_first_when_second_component_is_day() {
    assert_eq!(parse("04/13/2024"), Some((midnight(2024, 4, 13), "MM/dd/yyyy")));
}

#[test]
fn test_ambiguous_value_prefers_earlier_candidate() {
    // Both readings are valid; dd/MM/yyyy precedes MM/dd/yyyy.
    assert_eq!(parse("05/04/2024"), Some((midnight(2024, 4, 5), "dd/MM/yyyy")));
}

#[test]
fn test_single_digit_components() {
    assert_eq!(parse("5/4/2024"), Some((midnight(2024, 4, 5), "dd/MM/yyyy")));
    assert_eq!(parse("4/13/2024"), Some((midnight(2024, 4, 13), "MM/dd/yyyy")));
    assert_eq!(parse("5-4-2024"), Some((midnight(2024, 4, 5), "dd-MM-yyyy")));
    assert_eq!(parse("5.4.2024"), Some((midnight(2024, 4, 5), "dd.MM.yyyy")));
    assert_eq!(parse("5/4/24"), Some((midnight(2024, 4, 5), "dd/MM/yy")));
}

#[test]
fn test_single_digit_components_with_time() {
    assert_eq!(
        parse("5/4/2024 14:30"),
        Some((utc(2024, 4, 5, 14, 30, 0), "dd/MM/yyyy HH:mm"))
    );
    assert_eq!(
        parse("4/13/2024 9:05:30"),
        Some((utc(2024, 4, 13, 9, 5, 30), "MM/dd/yyyy HH:mm:ss"))
    );
}

#[test]
fn test_year_first_single_digit_components() {
    assert_eq!(parse("2024-1-5"), Some((midnight(2024, 1, 5), "yyyy-MM-dd")));
    assert_eq!(parse("2024/3/9"), Some((midnight(2024, 3, 9), "yyyy/MM/dd")));
    assert_eq!(
        parse("2024-1-5 7:45"),
        Some((utc(2024, 1, 5, 7, 45, 0), "yyyy-MM-dd HH:mm"))
    );
}

#[test]
fn test_separator_variants() {
    assert_eq!(parse("13-02-2024"), Some((midnight(2024, 2, 13), "dd-MM-yyyy")));
    assert_eq!(parse("02-13-2024"), Some((midnight(2024, 2, 13), "MM-dd-yyyy")));
    assert_eq!(parse("13.02.2024"), Some((midnight(2024, 2, 13), "dd.MM.yyyy")));
    assert_eq!(parse("2024.02.13"), Some((midnight(2024, 2, 13), "yyyy.MM.dd")));
    assert_eq!(parse("2024/02/13"), Some((midnight(2024, 2, 13), "yyyy/MM/dd")));
}

#[test]
fn test_time_suffixes() {
    assert_eq!(
        parse("13/02/2024 08:30"),
        Some((utc(2024, 2, 13, 8, 30, 0), "dd/MM/yyyy HH:mm"))
    );
    assert_eq!(
        parse("13/02/2024 08:30:15"),
        Some((utc(2024, 2, 13, 8, 30, 15), "dd/MM/yyyy HH:mm:ss"))
    );
    assert_eq!(
        parse("2024/02/13 8:05:00"),
        Some((utc(2024, 2, 13, 8, 5, 0), "yyyy/MM/dd HH:mm:ss"))
    );
    assert_eq!(
        parse("02/13/2024 17:45"),
        Some((utc(2024, 2, 13, 17, 45, 0), "MM/dd/yyyy HH:mm"))
    );
    assert_eq!(
        parse("2024-02-13 9:15"),
        Some((utc(2024, 2, 13, 9, 15, 0), "yyyy-MM-dd HH:mm"))
    );
}

#[test]
fn test_two_digit_years_use_pivot() {
    assert_eq!(parse("13/02/24"), Some((midnight(2024, 2, 13), "dd/MM/yy")));
    assert_eq!(parse("13/02/85"), Some((midnight(1985, 2, 13), "dd/MM/yy")));
    assert_eq!(
        parse("13/02/24 10:00"),
        Some((utc(2024, 2, 13, 10, 0, 0), "dd/MM/yy HH:mm"))
    );
    assert_eq!(parse("02/13/24"), Some((midnight(2024, 2, 13), "MM/dd/yy")));

    let options = ImportOptions::default().with_two_digit_year_pivot(20);
    let attempt = attempt_parse("13/02/24", &options).unwrap();
    assert_eq!(attempt.instant, midnight(1924, 2, 13));
}

#[test]
fn test_compact_form() {
    let compact = DateFormat::from_id("yyyyMMdd").unwrap();
    let options = ImportOptions::default();
    assert_eq!(compact.parse("20240213", &options), Some(midnight(2024, 2, 13)));
    assert_eq!(compact.parse("2024213", &options), None);
    assert_eq!(parse("20241302"), None);
}

#[test]
fn test_failures() {
    assert_eq!(parse(""), None);
    assert_eq!(parse("   "), None);
    assert_eq!(parse("yesterday"), None);
    assert_eq!(parse("31/02/2024"), None);
    assert_eq!(parse("13/13/2024"), None);
    assert_eq!(parse("2024-02-13T"), None);
}

#[test]
fn test_surrounding_whitespace_ignored() {
    assert_eq!(parse("  13/02/2024 "), Some((midnight(2024, 2, 13), "dd/MM/yyyy")));
}

#[test]
fn test_anchored_parse_has_no_fallback() {
    let options = ImportOptions::default();
    let day_first = DateFormat::from_id("dd/MM/yyyy").unwrap();

    assert_eq!(day_first.parse("13/02/2024", &options), Some(midnight(2024, 2, 13)));
    assert_eq!(day_first.parse("2024-02-13", &options), None);
    assert_eq!(day_first.parse("5/4/2024", &options), Some(midnight(2024, 4, 5)));
    assert_eq!(day_first.parse("13-02-2024", &options), None);
    assert_eq!(DateFormat::Iso8601.parse("13/02/2024", &options), None);
}

#[test]
fn test_format_identifiers_round_trip() {
    assert_eq!(DateFormat::from_id("ISO-8601"), Some(DateFormat::Iso8601));
    for id in CANDIDATE_PATTERNS {
        let format = DateFormat::from_id(id).unwrap();
        assert_eq!(format.id(), *id);
        assert_eq!(format.to_string(), *id);
    }
    assert_eq!(DateFormat::from_id("dd/MMM/yyyy"), None);
}

#[test]
fn test_iso_orders_before_every_pattern() {
    for index in 0..CANDIDATE_PATTERNS.len() {
        assert!(DateFormat::Iso8601 < DateFormat::Pattern(index));
    }
}
