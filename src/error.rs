//! Error handling for compost log operations.
//!
//! Provides the crate-wide error type plus the import error taxonomy. Import
//! errors render as the single human-readable message shown to the user.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompostError {
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Import failed: {0}")]
    Import(#[from] ImportError),

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Profile not found: {key}")]
    ProfileNotFound { key: String },

    #[error("Log record not found: {id}")]
    LogNotFound { id: String },

    #[error("Store file is corrupt: {path} - {reason}")]
    CorruptStore { path: PathBuf, reason: String },
}

impl CompostError {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a JSON serialization error with context
    pub fn json(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a profile not found error
    pub fn profile_not_found(key: impl Into<String>) -> Self {
        Self::ProfileNotFound { key: key.into() }
    }

    /// Create a log record not found error
    pub fn log_not_found(id: impl Into<String>) -> Self {
        Self::LogNotFound { id: id.into() }
    }
}

impl From<std::io::Error> for CompostError {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

/// Failures raised by the CSV import pipeline.
///
/// Row numbers are 1-based spreadsheet lines: the header is line 1, so the
/// first data row is reported as row 2.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ImportError {
    #[error("date format not recognized; expected one of: {expected}")]
    DateFormatNotRecognized { expected: String },

    #[error("row {row}: date missing")]
    MissingDate { row: usize },

    #[error("row {row}: date '{value}' does not match format {format}")]
    DateMismatch {
        row: usize,
        value: String,
        format: String,
    },

    #[error("row {row}: {field} missing")]
    MissingField { row: usize, field: &'static str },

    #[error("row {row}: {field} invalid ('{value}')")]
    InvalidField {
        row: usize,
        field: &'static str,
        value: String,
    },
}

impl ImportError {
    /// The spreadsheet row the error refers to, if any
    pub fn row(&self) -> Option<usize> {
        match self {
            Self::DateFormatNotRecognized { .. } => None,
            Self::MissingDate { row }
            | Self::DateMismatch { row, .. }
            | Self::MissingField { row, .. }
            | Self::InvalidField { row, .. } => Some(*row),
        }
    }
}

pub type Result<T> = std::result::Result<T, CompostError>;
