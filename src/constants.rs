//! Application constants for the compost log
//!
//! Column aliases, sampling defaults and export layout shared by the import
//! and export services.

// =============================================================================
// Column Aliases
// =============================================================================

/// Accepted header names per column, in lookup priority order.
///
/// Headers are lower-cased and trimmed before lookup, so every alias here is
/// lower case.
pub mod columns {
    pub const DATE: &[&str] = &["date", "fecha"];

    pub const TEMPERATURE: &[&str] = &["temperature_c", "temperatura (°c)", "temperature"];

    pub const HUMIDITY: &[&str] = &["humidity_pc", "humedad (%)", "humidity"];

    pub const PH: &[&str] = &["ph"];

    pub const EC: &[&str] = &["ec_ds_m", "ce (ds/m)"];

    pub const AMBIENT_TEMPERATURE: &[&str] = &[
        "ambienttemperature_c",
        "temperatura_ambiental_c",
        "ambient_temperature",
    ];

    pub const NOTES: &[&str] = &["notes", "notas"];
}

// =============================================================================
// Date Format Inference
// =============================================================================

/// Maximum number of leading rows inspected when deducing the file's date format
pub const DEFAULT_SAMPLE_SIZE: usize = 10;

/// Two-digit years below this value map to 20xx, the rest to 19xx
pub const DEFAULT_TWO_DIGIT_YEAR_PIVOT: u32 = 70;

/// Identifier reported when a value parses as ISO-8601
pub const ISO_8601_FORMAT: &str = "ISO-8601";

/// Example formats listed in the "date format not recognized" message
pub const EXAMPLE_DATE_FORMATS: &[&str] = &[
    "YYYY-MM-DD (ISO 8601)",
    "YYYY-MM-DD HH:mm:ss",
    "DD/MM/YYYY",
    "MM/DD/YYYY",
    "DD-MM-YYYY",
    "DD.MM.YYYY",
    "DD/MM/YY",
    "YYYYMMDD",
];

// =============================================================================
// Export Layout
// =============================================================================

/// Export header without the ambient temperature column
pub const EXPORT_HEADER: &[&str] = &[
    "Date",
    "Temperature_C",
    "Humidity_pc",
    "pH",
    "EC_dS_m",
    "Notes",
];

/// Export header including the ambient temperature column
pub const EXPORT_HEADER_WITH_AMBIENT: &[&str] = &[
    "Date",
    "Temperature_C",
    "Humidity_pc",
    "pH",
    "EC_dS_m",
    "AmbientTemperature_C",
    "Notes",
];

/// Date layout used for exported rows (chrono strftime syntax)
pub const EXPORT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Prefix of generated export file names
pub const EXPORT_FILE_PREFIX: &str = "datos_composta";

// =============================================================================
// Storage
// =============================================================================

/// Application directory name under the platform data/config directories
pub const APP_DIR_NAME: &str = "compost-log";

/// File name of the profile collection store
pub const STORE_FILE_NAME: &str = "profiles.json";

/// File name of the optional configuration file
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Colour palette used for new profiles (chart colours in the UI)
pub const PROFILE_COLORS: &[&str] = &[
    "#8B4513", "#2E8B57", "#DAA520", "#556B2F", "#CD853F", "#6B8E23", "#A0522D", "#228B22",
];

// =============================================================================
// Reading Ranges
// =============================================================================

/// Plausible reading ranges; values outside are logged but still imported
pub mod ranges {
    pub const HUMIDITY: (f64, f64) = (0.0, 100.0);
    pub const PH: (f64, f64) = (0.0, 14.0);
    pub const EC_MIN: f64 = 0.0;
}
