//! Header-indexed splitting of raw CSV text
//!
//! Cells are split on every comma; quoted commas are not supported. The
//! parser knows nothing about column meaning or formats.

use std::collections::HashMap;

/// One data line keyed by lower-cased header name
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawRow {
    /// 1-based line number in the source text (the header is line 1)
    pub line: usize,

    cells: HashMap<String, String>,
}

impl RawRow {
    /// Build a row from `(header, value)` pairs, mostly useful in tests
    pub fn from_pairs<'a>(line: usize, pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let cells = pairs
            .into_iter()
            .map(|(k, v)| (k.trim().to_lowercase(), v.trim().to_string()))
            .collect();
        Self { line, cells }
    }

    /// Value of a single column, exactly as stored (trimmed)
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }

    /// First non-empty value among the given header names, in order
    pub fn lookup(&self, aliases: &[&str]) -> Option<&str> {
        aliases
            .iter()
            .filter_map(|alias| self.get(alias))
            .find(|value| !value.is_empty())
    }
}

/// Parsed CSV text: the normalised header plus its data rows
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

impl CsvTable {
    /// Split CSV text into a header and header-indexed rows
    ///
    /// Only the ends of the text are trimmed. Input with fewer than two lines
    /// yields a table without rows, which callers treat as "nothing to
    /// import". Every other line is a row, blank ones included.
    pub fn parse(text: &str) -> Self {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text).trim();

        let mut lines = text
            .lines()
            .enumerate()
            .map(|(index, line)| (index + 1, line));

        let Some((_, header_line)) = lines.next().filter(|(_, line)| !line.is_empty()) else {
            return Self::default();
        };

        let headers: Vec<String> = header_line
            .split(',')
            .map(|h| h.trim().to_lowercase())
            .collect();

        let rows = lines
            .map(|(line, content)| {
                let mut values = content.split(',');
                let cells = headers
                    .iter()
                    .map(|header| {
                        let value = values.next().map(str::trim).unwrap_or_default();
                        (header.clone(), value.to_string())
                    })
                    .collect();
                RawRow { line, cells }
            })
            .collect();

        Self { headers, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

/// Split CSV text into header-indexed rows (see [`CsvTable::parse`])
pub fn parse_csv(text: &str) -> Vec<RawRow> {
    CsvTable::parse(text).rows
}
