//! Single-value date parsing against the candidate format list
//!
//! A value is tried as strict ISO-8601 first, then against an ordered list of
//! explicit patterns written in `yyyy`/`MM`/`dd` token syntax. Patterns that
//! name both a day and a month are cross-checked against the numeric
//! components of the value so a day above 12 is never read as a month.
//!
//! Naive values (no offset) are interpreted as UTC.

use crate::config::ImportOptions;
use crate::constants::ISO_8601_FORMAT;
use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Explicit candidates in tie-break order
///
/// Token widths: `yyyy` four digits, `yy`/`mm`/`ss` two, `dd`/`MM`/`HH` one
/// or two. A day, month or hour token packed against another token without a
/// separator (`yyyyMMdd`) takes exactly two digits. Any other character must
/// match literally.
pub const CANDIDATE_PATTERNS: &[&str] = &[
    "yyyy-MM-dd HH:mm:ss",
    "yyyy/MM/dd HH:mm:ss",
    "dd/MM/yyyy HH:mm:ss",
    "MM/dd/yyyy HH:mm:ss",
    "yyyy-MM-dd HH:mm",
    "yyyy/MM/dd HH:mm",
    "dd/MM/yyyy HH:mm",
    "MM/dd/yyyy HH:mm",
    "yyyy-MM-dd",
    "yyyy/MM/dd",
    "yyyy.MM.dd",
    "dd/MM/yyyy",
    "MM/dd/yyyy",
    "dd-MM-yyyy",
    "MM-dd-yyyy",
    "dd.MM.yyyy",
    "MM.dd.yyyy",
    "dd/MM/yy HH:mm",
    "MM/dd/yy HH:mm",
    "dd/MM/yy",
    "MM/dd/yy",
    "yyyyMMdd",
];

static CANDIDATES: LazyLock<Vec<DatePattern>> = LazyLock::new(|| {
    CANDIDATE_PATTERNS
        .iter()
        .map(|id| {
            DatePattern::compile(id)
                .unwrap_or_else(|e| panic!("invalid built-in date pattern '{id}': {e}"))
        })
        .collect()
});

static ISO_8601: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(\d{4})-(\d{2})-(\d{2})(?:[T ](\d{2}):(\d{2})(?::(\d{2})(?:[.,](\d{1,9}))?)?(Z|[+-]\d{2}(?::?\d{2})?)?)?$",
    )
    .expect("Invalid ISO-8601 regex")
});

/// ISO-8601 basic format (`20240413`, `20240413T0830Z`), same capture groups
static ISO_8601_BASIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(\d{4})(\d{2})(\d{2})(?:T(\d{2})(\d{2})(?:(\d{2})(?:[.,](\d{1,9}))?)?(Z|[+-]\d{2}(?::?\d{2})?)?)?$",
    )
    .expect("Invalid ISO-8601 basic regex")
});

/// Date component captured by a pattern token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Year,
    ShortYear,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

/// A compiled explicit date pattern such as `dd/MM/yyyy`
#[derive(Debug)]
pub struct DatePattern {
    id: &'static str,
    fields: Vec<Field>,
    regex: Regex,
}

impl DatePattern {
    fn compile(id: &'static str) -> Result<Self, String> {
        let mut fields = Vec::new();
        let mut source = String::from("^");
        let mut chars = id.chars().peekable();
        let mut after_token = false;

        while let Some(c) = chars.next() {
            if !c.is_ascii_alphabetic() {
                source.push_str(&regex::escape(&c.to_string()));
                after_token = false;
                continue;
            }

            let mut width = 1;
            while chars.next_if_eq(&c).is_some() {
                width += 1;
            }
            let packed = after_token || chars.peek().is_some_and(char::is_ascii_alphabetic);
            let flexible = if packed { r"(\d{2})" } else { r"(\d{1,2})" };

            let (field, digits) = match (c, width) {
                ('y', 4) => (Field::Year, r"(\d{4})"),
                ('y', 2) => (Field::ShortYear, r"(\d{2})"),
                ('M', 1 | 2) => (Field::Month, flexible),
                ('d', 1 | 2) => (Field::Day, flexible),
                ('H', 2) => (Field::Hour, flexible),
                ('m', 2) => (Field::Minute, r"(\d{2})"),
                ('s', 2) => (Field::Second, r"(\d{2})"),
                _ => return Err(format!("unsupported token '{}'", c.to_string().repeat(width))),
            };
            fields.push(field);
            source.push_str(digits);
            after_token = true;
        }
        source.push('$');

        let regex = Regex::new(&source).map_err(|e| e.to_string())?;
        Ok(Self { id, fields, regex })
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    fn has_day_and_month(&self) -> bool {
        self.fields.contains(&Field::Day) && self.fields.contains(&Field::Month)
    }

    /// Parse a value that must match this pattern exactly
    fn parse_naive(&self, value: &str, options: &ImportOptions) -> Option<NaiveDateTime> {
        let captures = self.regex.captures(value)?;

        let mut year = None;
        let (mut month, mut day) = (None, None);
        let (mut hour, mut minute, mut second) = (0, 0, 0);

        for (field, capture) in self.fields.iter().zip(captures.iter().skip(1)) {
            let number: u32 = capture?.as_str().parse().ok()?;
            match field {
                Field::Year => year = Some(number as i32),
                Field::ShortYear => year = Some(expand_short_year(number, options)),
                Field::Month => month = Some(number),
                Field::Day => day = Some(number),
                Field::Hour => hour = number,
                Field::Minute => minute = number,
                Field::Second => second = number,
            }
        }

        NaiveDate::from_ymd_opt(year?, month?, day?)?.and_hms_opt(hour, minute, second)
    }

    /// Reject readings where a component above 12 landed in the wrong slot
    ///
    /// The value's numeric components are lined up with the pattern's fields;
    /// a component in a day position that exceeds 12 must equal the parsed day,
    /// and likewise for the month position.
    ///
    /// Components are re-read from the raw value, independently of the
    /// pattern's captures. For the anchored built-in patterns every successful
    /// parse passes; the check guards the day/month rule of `attempt_parse`.
    fn agrees_with_components(&self, value: &str, parsed: &NaiveDateTime) -> bool {
        if !self.has_day_and_month() {
            return true;
        }

        let components: Vec<u32> = value
            .split(|c: char| !c.is_ascii_digit())
            .filter(|part| !part.is_empty())
            .filter_map(|part| part.parse().ok())
            .collect();

        if components.len() < 2 {
            return true;
        }

        self.fields
            .iter()
            .zip(components)
            .all(|(field, component)| match field {
                Field::Day => component <= 12 || component == parsed.day(),
                Field::Month => component <= 12 || component == parsed.month(),
                _ => true,
            })
    }
}

fn expand_short_year(year: u32, options: &ImportOptions) -> i32 {
    if year < options.two_digit_year_pivot {
        2000 + year as i32
    } else {
        1900 + year as i32
    }
}

/// Identifier of a recognised date format
///
/// Ordering follows the candidate list with ISO-8601 first, which is also the
/// tie-break order when formats receive equal votes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DateFormat {
    Iso8601,
    /// Index into [`CANDIDATE_PATTERNS`]
    Pattern(usize),
}

impl DateFormat {
    /// Look up a format by its identifier string
    pub fn from_id(id: &str) -> Option<Self> {
        if id == ISO_8601_FORMAT {
            return Some(Self::Iso8601);
        }
        CANDIDATE_PATTERNS
            .iter()
            .position(|candidate| *candidate == id)
            .map(Self::Pattern)
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::Iso8601 => ISO_8601_FORMAT,
            Self::Pattern(index) => CANDIDATE_PATTERNS[index],
        }
    }

    /// Parse a value strictly in this format, without any fallback
    pub fn parse(self, value: &str, options: &ImportOptions) -> Option<DateTime<Utc>> {
        match self {
            Self::Iso8601 => parse_iso8601(value),
            Self::Pattern(index) => CANDIDATES
                .get(index)?
                .parse_naive(value.trim(), options)
                .map(|naive| naive.and_utc()),
        }
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Successful parse of one value: the instant and the format that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateParseAttempt {
    pub instant: DateTime<Utc>,
    pub format: DateFormat,
}

/// Strict ISO-8601 calendar date in extended or basic form, with optional
/// time and offset
pub fn parse_iso8601(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    let captures = ISO_8601
        .captures(value)
        .or_else(|| ISO_8601_BASIC.captures(value))?;
    let number = |index: usize| -> Option<u32> {
        captures
            .get(index)
            .map_or(Some(0), |m| m.as_str().parse().ok())
    };

    let date = NaiveDate::from_ymd_opt(number(1)? as i32, number(2)?, number(3)?)?;

    let nanos = match captures.get(7) {
        Some(fraction) => {
            let digits = fraction.as_str();
            let scale = 10u32.pow(9 - digits.len() as u32);
            digits.parse::<u32>().ok()? * scale
        }
        None => 0,
    };
    let naive = date.and_hms_nano_opt(number(4)?, number(5)?, number(6)?, nanos)?;

    match captures.get(8).map(|m| m.as_str()) {
        None | Some("Z") => Some(naive.and_utc()),
        Some(offset) => {
            let offset = parse_offset(offset)?;
            offset
                .from_local_datetime(&naive)
                .single()
                .map(|dt| dt.with_timezone(&Utc))
        }
    }
}

/// Parse `+HH`, `+HHMM` or `+HH:MM` into a fixed offset
fn parse_offset(offset: &str) -> Option<FixedOffset> {
    let sign = if offset.starts_with('-') { -1 } else { 1 };
    let digits: String = offset[1..].chars().filter(char::is_ascii_digit).collect();
    let hours: i32 = digits.get(..2)?.parse().ok()?;
    let minutes: i32 = match digits.get(2..) {
        Some("") | None => 0,
        Some(m) => m.parse().ok()?,
    };
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

/// Try every known format against one value
///
/// ISO-8601 wins unconditionally. Otherwise the first candidate that parses
/// and survives the day/month component check is returned.
pub fn attempt_parse(value: &str, options: &ImportOptions) -> Option<DateParseAttempt> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Some(instant) = parse_iso8601(value) {
        return Some(DateParseAttempt {
            instant,
            format: DateFormat::Iso8601,
        });
    }

    CANDIDATES.iter().enumerate().find_map(|(index, pattern)| {
        let parsed = pattern.parse_naive(value, options)?;
        if !pattern.agrees_with_components(value, &parsed) {
            return None;
        }
        Some(DateParseAttempt {
            instant: parsed.and_utc(),
            format: DateFormat::Pattern(index),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_candidates_compile() {
        assert_eq!(CANDIDATES.len(), CANDIDATE_PATTERNS.len());
        for (pattern, id) in CANDIDATES.iter().zip(CANDIDATE_PATTERNS) {
            assert_eq!(pattern.id(), *id);
        }
    }

    #[test]
    fn test_compile_rejects_unknown_token() {
        assert!(DatePattern::compile("dd/MMM/yyyy").is_err());
        assert!(DatePattern::compile("yyy-MM-dd").is_err());
    }

    #[test]
    fn test_packed_tokens_take_two_digits() {
        let pattern = DatePattern::compile("yyyyMMdd").unwrap();
        let options = ImportOptions::default();
        assert!(pattern.parse_naive("20240413", &options).is_some());
        assert!(pattern.parse_naive("2024413", &options).is_none());

        let separated = DatePattern::compile("dd/MM/yyyy").unwrap();
        assert!(separated.parse_naive("5/4/2024", &options).is_some());
    }

    #[test]
    fn test_component_check_rejects_day_as_month() {
        let pattern = DatePattern::compile("MM/dd/yyyy").unwrap();
        let wrong = NaiveDate::from_ymd_opt(2024, 1, 4)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert!(!pattern.agrees_with_components("13/04/2024", &wrong));
    }

    #[test]
    fn test_component_check_skips_unseparated_values() {
        let pattern = DatePattern::compile("yyyyMMdd").unwrap();
        let parsed = pattern
            .parse_naive("20240413", &ImportOptions::default())
            .unwrap();
        assert!(pattern.agrees_with_components("20240413", &parsed));
    }

    #[test]
    fn test_parse_offset_forms() {
        assert_eq!(parse_offset("+02:00"), FixedOffset::east_opt(7200));
        assert_eq!(parse_offset("-0530"), FixedOffset::east_opt(-19800));
        assert_eq!(parse_offset("+01"), FixedOffset::east_opt(3600));
    }
}
