//! Core data models for compost monitoring
//!
//! Log records (one sensor reading session) and the compost profiles (piles)
//! that own them.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single set of readings taken from a compost pile
///
/// Temperature and humidity are always present. Optional readings are `None`
/// when the source did not supply a usable value, which is distinct from zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogRecord {
    /// Unique identifier, generated when the record is created
    pub id: Uuid,

    /// Instant the readings were taken
    pub date: DateTime<Utc>,

    /// Pile temperature in °C
    pub temperature: f64,

    /// Relative humidity in percent (0-100)
    pub humidity: f64,

    /// Acidity (0-14)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ph: Option<f64>,

    /// Electrical conductivity in dS/m
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ec: Option<f64>,

    /// Air temperature next to the pile in °C
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ambient_temperature: Option<f64>,

    /// Free-form notes
    #[serde(default)]
    pub notes: String,
}

impl LogRecord {
    /// Create a record with a fresh identifier and only the required readings
    pub fn new(date: DateTime<Utc>, temperature: f64, humidity: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            temperature,
            humidity,
            ph: None,
            ec: None,
            ambient_temperature: None,
            notes: String::new(),
        }
    }

    pub fn with_ph(mut self, ph: f64) -> Self {
        self.ph = Some(ph);
        self
    }

    pub fn with_ec(mut self, ec: f64) -> Self {
        self.ec = Some(ec);
        self
    }

    pub fn with_ambient_temperature(mut self, ambient_temperature: f64) -> Self {
        self.ambient_temperature = Some(ambient_temperature);
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Canonical ISO-8601 representation of the record date
    pub fn iso_date(&self) -> String {
        self.date.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// A tracked compost pile with its own reading history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompostProfile {
    pub id: Uuid,

    pub name: String,

    /// Hex colour used when charting this profile
    pub color: String,

    /// Free-form description of the starting materials
    #[serde(default)]
    pub initial_composition: String,

    #[serde(default)]
    pub data_logs: Vec<LogRecord>,

    pub created_at: DateTime<Utc>,
}

impl CompostProfile {
    pub fn new(
        name: impl Into<String>,
        initial_composition: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            color: color.into(),
            initial_composition: initial_composition.into(),
            data_logs: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Append records and keep the history sorted newest first
    pub fn merge_logs(&mut self, logs: impl IntoIterator<Item = LogRecord>) {
        self.data_logs.extend(logs);
        self.data_logs.sort_by(|a, b| b.date.cmp(&a.date));
    }

    /// Profile name reduced to `[a-z0-9_]` for use in file names
    pub fn safe_name(&self) -> String {
        self.name
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_lowercase()
                } else {
                    '_'
                }
            })
            .collect()
    }
}
