//! Integration tests for reading and normalizing records.

use std::fs;

use proptest::prelude::*;
use serde_json::{Value, json};
use tempfile::TempDir;
use vizfit_ingest::{
    EmptyInputReason, IngestError, MergeMode, normalize, read_path,
};
use vizfit_model::Record;

fn record(value: Value) -> Record {
    value.as_object().cloned().unwrap()
}

#[test]
fn reads_csv_file_and_normalizes() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("series.csv");
    fs::write(&path, "year,sales\n2019,10\n2020,12\n2021\n2022,15\n").unwrap();

    let raw = read_path(&path).unwrap();
    let dataset = normalize(raw, MergeMode::MajorityKeyset).unwrap();
    assert_eq!(dataset.len(), 3);
    assert_eq!(dataset.field_names(), ["year", "sales"]);
}

#[test]
fn reads_geojson_extension_as_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("places.geojson");
    let body = json!({
        "type": "FeatureCollection",
        "features": [
            {"type": "Feature", "geometry": {"type": "Point", "coordinates": [7.1, 50.7]}, "properties": {"name": "Bonn"}},
            {"type": "Feature", "geometry": {"type": "Point", "coordinates": [10.1, 54.3]}, "properties": {"name": "Kiel"}}
        ]
    });
    fs::write(&path, body.to_string()).unwrap();

    let raw = read_path(&path).unwrap();
    assert_eq!(raw.len(), 2);
    assert_eq!(raw[1]["Latitude"], json!(54.3));
}

#[test]
fn unsupported_extension_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.xlsx");
    fs::write(&path, "irrelevant").unwrap();
    assert!(matches!(
        read_path(&path),
        Err(IngestError::UnsupportedFormat { extension, .. }) if extension == "xlsx"
    ));
}

#[test]
fn missing_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");
    assert!(matches!(read_path(&path), Err(IngestError::FileNotFound { .. })));
}

#[test]
fn zero_field_records_never_normalize_silently() {
    let raw = vec![record(json!({})), record(json!({}))];
    assert!(matches!(
        normalize(raw, MergeMode::MajorityKeyset),
        Err(IngestError::EmptyInput { reason: EmptyInputReason::EmptyKeyset })
    ));
}

fn uniform_records() -> impl Strategy<Value = Vec<Record>> {
    (1usize..4, 1usize..12).prop_flat_map(|(fields, rows)| {
        prop::collection::vec(prop::collection::vec(-1000i64..1000, fields), rows).prop_map(
            move |rows| {
                rows.into_iter()
                    .map(|values| {
                        values
                            .into_iter()
                            .enumerate()
                            .map(|(idx, v)| (format!("f{idx}"), json!(v)))
                            .collect()
                    })
                    .collect()
            },
        )
    })
}

proptest! {
    #[test]
    fn normalizing_uniform_records_is_identity(raw in uniform_records()) {
        for mode in [MergeMode::MajorityKeyset, MergeMode::SharedKeys] {
            let once = normalize(raw.clone(), mode).unwrap();
            prop_assert_eq!(once.records(), raw.as_slice());
            let twice = normalize(once.clone().into_records(), mode).unwrap();
            prop_assert_eq!(twice, once);
        }
    }
}
