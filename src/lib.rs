//! Compost Log Library
//!
//! A Rust library for keeping a monitoring log of compost piles: periodic
//! temperature, humidity, pH and electrical conductivity readings grouped by
//! profile, with CSV import and export.
//!
//! This library provides tools for:
//! - Splitting loosely formatted CSV files into header-indexed rows
//! - Deducing a file's date format from a sample of its rows
//! - Validating readings into log records with row-numbered errors
//! - Exporting records to a CSV layout the importer reads back
//! - Persisting profiles in a local JSON store

pub mod config;
pub mod constants;
pub mod error;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod csv_export;
        pub mod csv_import;
        pub mod profile_store;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{CompostProfile, LogRecord};
pub use app::services::csv_export::export_csv;
pub use app::services::csv_import::{CsvImporter, DateFormat, import_csv};
pub use config::Config;
pub use error::{CompostError as Error, ImportError, Result};
