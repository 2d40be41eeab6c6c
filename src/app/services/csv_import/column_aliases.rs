//! Column identification for compost log CSV files
//!
//! Each logical column accepts several header spellings (English and Spanish
//! variants). Lookups try the aliases in priority order.

use super::table::RawRow;
use crate::constants::columns;

/// Logical columns understood by the importer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Date,
    Temperature,
    Humidity,
    Ph,
    Ec,
    AmbientTemperature,
    Notes,
}

impl Column {
    pub const ALL: [Column; 7] = [
        Column::Date,
        Column::Temperature,
        Column::Humidity,
        Column::Ph,
        Column::Ec,
        Column::AmbientTemperature,
        Column::Notes,
    ];

    /// Accepted header names, highest priority first
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Column::Date => columns::DATE,
            Column::Temperature => columns::TEMPERATURE,
            Column::Humidity => columns::HUMIDITY,
            Column::Ph => columns::PH,
            Column::Ec => columns::EC,
            Column::AmbientTemperature => columns::AMBIENT_TEMPERATURE,
            Column::Notes => columns::NOTES,
        }
    }

    /// Field name used in error messages
    pub fn field_name(self) -> &'static str {
        match self {
            Column::Date => "date",
            Column::Temperature => "temperature",
            Column::Humidity => "humidity",
            Column::Ph => "pH",
            Column::Ec => "electrical conductivity",
            Column::AmbientTemperature => "ambient temperature",
            Column::Notes => "notes",
        }
    }

    pub fn is_required(self) -> bool {
        matches!(self, Column::Date | Column::Temperature | Column::Humidity)
    }

    /// Resolve this column's value in a row (first non-empty alias)
    pub fn resolve(self, row: &RawRow) -> Option<&str> {
        row.lookup(self.aliases())
    }

    /// Header in `headers` that this column would be read from, if any
    pub fn find_header(self, headers: &[String]) -> Option<&str> {
        self.aliases()
            .iter()
            .find(|alias| headers.iter().any(|h| h == *alias))
            .copied()
    }
}

/// Which logical columns a header provides, for reporting before import
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnReport {
    /// Matched columns with the header each one was found under
    pub matched: Vec<(Column, String)>,

    /// Required columns with no matching header
    pub missing_required: Vec<Column>,

    /// Headers not recognised as any column
    pub unrecognised: Vec<String>,
}

impl ColumnReport {
    pub fn analyze(headers: &[String]) -> Self {
        let mut matched = Vec::new();
        let mut missing_required = Vec::new();

        for column in Column::ALL {
            match column.find_header(headers) {
                Some(header) => matched.push((column, header.to_string())),
                None if column.is_required() => missing_required.push(column),
                None => {}
            }
        }

        let unrecognised = headers
            .iter()
            .filter(|h| !Column::ALL.iter().any(|c| c.aliases().contains(&h.as_str())))
            .cloned()
            .collect();

        Self {
            matched,
            missing_required,
            unrecognised,
        }
    }
}
