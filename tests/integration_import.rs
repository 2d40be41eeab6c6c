//! Integration tests for the import/export workflow
//!
//! These tests drive the public API end to end: CSV files on disk are imported
//! into a profile store, exported again and re-imported.

use chrono::{TimeZone, Utc};
use compost_log::app::services::csv_export::export_file_name;
use compost_log::app::services::profile_store::ProfileStore;
use compost_log::config::{ExportOptions, ImportOptions};
use compost_log::{CsvImporter, DateFormat, ImportError, LogRecord, export_csv, import_csv};
use std::fs;
use tempfile::TempDir;

fn sample_records() -> Vec<LogRecord> {
    vec![
        LogRecord::new(Utc.with_ymd_and_hms(2024, 5, 3, 8, 15, 0).unwrap(), 55.24, 48.0)
            .with_ph(7.23)
            .with_ec(1.456)
            .with_ambient_temperature(18.0)
            .with_notes("volteo y riego \"ligero\""),
        LogRecord::new(Utc.with_ymd_and_hms(2024, 5, 2, 18, 0, 0).unwrap(), 61.0, 52.5),
        LogRecord::new(Utc.with_ymd_and_hms(2024, 5, 1, 7, 30, 0).unwrap(), 48.7, 60.1)
            .with_ec(0.9),
    ]
}

#[test]
fn test_export_then_import_preserves_readings() {
    let records = sample_records();
    let csv = export_csv(&records, &ExportOptions::default());

    let imported = import_csv(&csv).expect("exported CSV should import");
    assert_eq!(imported.len(), records.len());

    for (original, back) in records.iter().zip(&imported) {
        assert_eq!(back.date, original.date);
        assert!((back.temperature - original.temperature).abs() <= 0.05);
        assert!((back.humidity - original.humidity).abs() <= 0.05);
        assert_eq!(back.ph.is_some(), original.ph.is_some());
        assert_eq!(back.ec.is_some(), original.ec.is_some());
        assert_eq!(back.ambient_temperature, original.ambient_temperature);
        assert_eq!(back.notes, original.notes);
        assert_ne!(back.id, original.id);
    }

    assert_eq!(imported[0].ph, Some(7.2));
    assert_eq!(imported[0].ec, Some(1.46));
}

#[test]
fn test_export_without_ambient_column_reimports() {
    let options = ExportOptions {
        include_ambient_temperature: false,
    };
    let csv = export_csv(&sample_records(), &options);
    assert!(!csv.contains("AmbientTemperature_C"));

    let imported = import_csv(&csv).unwrap();
    assert_eq!(imported.len(), 3);
    assert!(imported.iter().all(|r| r.ambient_temperature.is_none()));
}

#[test]
fn test_empty_export_reimports_as_nothing() {
    let csv = export_csv(&[], &ExportOptions::default());
    assert_eq!(import_csv(&csv).unwrap(), Vec::<LogRecord>::new());
}

#[test]
fn test_exported_dates_deduce_iso() {
    let csv = export_csv(&sample_records(), &ExportOptions::default());
    let result = CsvImporter::default().import_str(&csv).unwrap();

    assert_eq!(
        result.stats.deduced_format.as_deref(),
        Some(DateFormat::Iso8601.id())
    );
    assert!(result.stats.fallback_rows.is_empty());
}

#[test]
fn test_import_files_into_store() {
    let dir = TempDir::new().unwrap();
    let store_path = dir.path().join("data").join("profiles.json");

    let day_first = dir.path().join("pila.csv");
    fs::write(
        &day_first,
        "Fecha,Temperatura (°C),Humedad (%),pH,CE (dS/m),Notas\n\
         13/04/2024,55,50,7.1,1.2,inicio\n\
         14/04/2024,57,49,,,\n\
         15/04/2024,58.5,47,7.3,,\"volteo y riego\"\n",
    )
    .unwrap();

    let mut store = ProfileStore::open(&store_path).unwrap();
    store.create_profile("Pila 1", "hojas y cafe");

    let importer = CsvImporter::new(ImportOptions::default());
    let result = importer.import_file(&day_first).unwrap();
    assert_eq!(result.stats.deduced_format.as_deref(), Some("dd/MM/yyyy"));

    let added = store.append_logs("pila 1", result.records).unwrap();
    assert_eq!(added, 3);
    store.save().unwrap();

    let reopened = ProfileStore::open(&store_path).unwrap();
    let profile = reopened.find("Pila 1").unwrap();
    assert_eq!(profile.data_logs.len(), 3);
    // Newest first
    assert_eq!(
        profile.data_logs[0].date,
        Utc.with_ymd_and_hms(2024, 4, 15, 0, 0, 0).unwrap()
    );
    assert_eq!(profile.data_logs[0].notes, "volteo y riego");

    let day = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap().date_naive();
    assert_eq!(
        export_file_name(profile, day),
        "datos_composta_pila_1_20240601.csv"
    );
}

#[test]
fn test_failed_import_leaves_store_untouched() {
    let dir = TempDir::new().unwrap();
    let store_path = dir.path().join("profiles.json");
    let bad = dir.path().join("bad.csv");
    fs::write(
        &bad,
        "date,temperature,humidity\n\
         2024-01-01,50,40\n\
         2024-01-02,abc,40\n",
    )
    .unwrap();

    let mut store = ProfileStore::open(&store_path).unwrap();
    store.create_profile("Pila 2", "");
    store.save().unwrap();

    let err = CsvImporter::default().import_file(&bad).unwrap_err();
    match err {
        compost_log::Error::Import(ImportError::InvalidField { row, .. }) => assert_eq!(row, 3),
        other => panic!("unexpected error: {other:?}"),
    }

    let reopened = ProfileStore::open(&store_path).unwrap();
    assert!(reopened.find("Pila 2").unwrap().data_logs.is_empty());
}
