//! Raw record reading.
//!
//! Supports JSON (arrays of objects, rows of values, rows of single-entry
//! objects, `order`/`data` tables and GeoJSON `FeatureCollection`s) and CSV
//! with a header row. Files are dispatched on their extension; inline text
//! is tried as JSON first and as CSV otherwise.

use std::path::Path;

use serde_json::{Map, Number, Value};
use tracing::debug;
use vizfit_model::Record;

use crate::error::{EmptyInputReason, IngestError, Result};

/// Maximum input file size (100 MB).
pub const MAX_INPUT_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Input formats recognized by [`read_path`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Csv,
}

impl InputFormat {
    /// Format for a file extension, compared case-insensitively.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "json" | "geojson" => Some(InputFormat::Json),
            "csv" => Some(InputFormat::Csv),
            _ => None,
        }
    }
}

/// Reads records from a file, dispatching on its extension.
///
/// # Errors
///
/// Returns an error if the extension is unsupported, the file cannot be
/// read, the content cannot be parsed, or it yields no records.
pub fn read_path(path: &Path) -> Result<Vec<Record>> {
    let extension = path
        .extension()
        .and_then(std::ffi::OsStr::to_str)
        .unwrap_or_default();
    let format =
        InputFormat::from_extension(extension).ok_or_else(|| IngestError::UnsupportedFormat {
            path: path.to_path_buf(),
            extension: extension.to_string(),
        })?;

    check_file_size(path, MAX_INPUT_FILE_SIZE)?;
    let text = std::fs::read_to_string(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let records = match format {
        InputFormat::Json => read_json_str(&text)?,
        InputFormat::Csv => read_csv_str(&text)?,
    };
    debug!(path = %path.display(), records = records.len(), "Read input records");
    Ok(records)
}

/// Checks that a file exists and is no larger than `max_size` bytes.
pub fn check_file_size(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }
    Ok(())
}

/// Reads records from a file path, or from the text itself when it does not
/// name a file.
///
/// A single-line source with a recognized extension is always treated as a
/// path, so a missing file is reported as such.
///
/// # Errors
///
/// Same as [`read_path`] and [`read_str`].
pub fn read_source(source: &str) -> Result<Vec<Record>> {
    let path = Path::new(source);
    let looks_like_path = !source.contains('\n')
        && path
            .extension()
            .and_then(std::ffi::OsStr::to_str)
            .and_then(InputFormat::from_extension)
            .is_some();
    if looks_like_path || path.is_file() {
        read_path(path)
    } else {
        read_str(source)
    }
}

/// Reads records from inline text, as JSON when it parses as JSON and as
/// CSV otherwise.
///
/// # Errors
///
/// Returns the JSON shape error for valid JSON of an unsupported shape, and
/// the CSV errors of [`read_csv_str`] for anything else.
pub fn read_str(text: &str) -> Result<Vec<Record>> {
    match read_json_str(text) {
        Err(IngestError::Json { .. }) => read_csv_str(text),
        other => other,
    }
}

/// Reads records from JSON text.
///
/// Accepted shapes:
///
/// - an array of objects, one record per object;
/// - an array of arrays, with fields named `x`, `y`, `z`, `a0`, `a1`, ...;
/// - an array of arrays of single-entry objects, each entry one field;
/// - an object with an `order` list of field names and `data` rows;
/// - a GeoJSON `FeatureCollection`, one record per feature.
///
/// # Errors
///
/// Returns [`IngestError::Json`] for invalid JSON,
/// [`IngestError::UnsupportedShape`] for any other shape, and
/// [`IngestError::EmptyInput`] when no records result.
pub fn read_json_str(text: &str) -> Result<Vec<Record>> {
    let value: Value = serde_json::from_str(text).map_err(|source| IngestError::Json { source })?;

    let records = match value {
        Value::Array(items) => records_from_array(items)?,
        Value::Object(object) if is_feature_collection(&object) => flatten_features(&object)?,
        Value::Object(object) if object.contains_key("order") => records_from_table(&object)?,
        Value::Object(_) => {
            return Err(unsupported(
                "object has neither 'order' metadata nor FeatureCollection type",
            ));
        }
        other => {
            return Err(unsupported(format!(
                "expected an array or an object, found {}",
                kind_of(&other)
            )));
        }
    };

    if records.is_empty() {
        return Err(IngestError::empty(EmptyInputReason::NoRecords));
    }
    Ok(records)
}

fn records_from_array(items: Vec<Value>) -> Result<Vec<Record>> {
    match items.first() {
        None => Ok(Vec::new()),
        Some(Value::Array(first)) if first.is_empty() => Ok(Vec::new()),
        Some(Value::Array(first)) => {
            let single_entries = first
                .first()
                .and_then(Value::as_object)
                .is_some_and(|entry| entry.len() == 1);
            if single_entries {
                records_from_entry_rows(&items)
            } else {
                records_from_rows(&items)
            }
        }
        Some(_) => records_from_objects(items),
    }
}

fn records_from_objects(items: Vec<Value>) -> Result<Vec<Record>> {
    items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| match item {
            Value::Object(record) => Ok(record),
            other => Err(unsupported(format!(
                "element {idx} is {}, not an object",
                kind_of(&other)
            ))),
        })
        .collect()
}

/// Rows of plain values get positional field names.
fn records_from_rows(rows: &[Value]) -> Result<Vec<Record>> {
    rows.iter()
        .enumerate()
        .map(|(idx, row)| -> Result<Record> {
            let values = row_values(row, idx)?;
            Ok(values
                .iter()
                .enumerate()
                .map(|(position, value)| (positional_name(position), value.clone()))
                .collect())
        })
        .collect()
}

/// Rows of `{"name": value}` objects; the first entry of each object is used.
fn records_from_entry_rows(rows: &[Value]) -> Result<Vec<Record>> {
    rows.iter()
        .enumerate()
        .map(|(idx, row)| -> Result<Record> {
            row_values(row, idx)?
                .iter()
                .map(|entry| {
                    entry
                        .as_object()
                        .and_then(|object| object.iter().next())
                        .map(|(name, value)| (name.clone(), value.clone()))
                        .ok_or_else(|| {
                            unsupported(format!("row {idx} holds {}", kind_of(entry)))
                        })
                })
                .collect()
        })
        .collect()
}

fn records_from_table(table: &Map<String, Value>) -> Result<Vec<Record>> {
    let order = table
        .get("order")
        .and_then(Value::as_array)
        .filter(|names| !names.is_empty())
        .ok_or_else(|| unsupported("'order' must be a non-empty list of field names"))?
        .iter()
        .map(|name| {
            name.as_str()
                .ok_or_else(|| unsupported("'order' must list field names as strings"))
        })
        .collect::<Result<Vec<&str>>>()?;
    let rows = table
        .get("data")
        .and_then(Value::as_array)
        .ok_or_else(|| unsupported("'order' is given without a 'data' list"))?;

    rows.iter()
        .enumerate()
        .map(|(idx, row)| -> Result<Record> {
            let values = row_values(row, idx)?;
            if values.len() != order.len() {
                return Err(unsupported(format!(
                    "row {idx} has {} values, 'order' names {} fields",
                    values.len(),
                    order.len()
                )));
            }
            Ok(order
                .iter()
                .zip(values)
                .map(|(name, value)| ((*name).to_string(), value.clone()))
                .collect())
        })
        .collect()
}

fn row_values(row: &Value, idx: usize) -> Result<&[Value]> {
    row.as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| unsupported(format!("row {idx} is {}, not an array", kind_of(row))))
}

/// `x`, `y`, `z`, then `a0`, `a1`, ...
fn positional_name(position: usize) -> String {
    match position {
        0 => "x".to_string(),
        1 => "y".to_string(),
        2 => "z".to_string(),
        n => format!("a{}", n - 3),
    }
}

fn is_feature_collection(object: &Map<String, Value>) -> bool {
    object.get("type").and_then(Value::as_str) == Some("FeatureCollection")
}

fn flatten_features(collection: &Map<String, Value>) -> Result<Vec<Record>> {
    let features = collection
        .get("features")
        .and_then(Value::as_array)
        .ok_or_else(|| unsupported("FeatureCollection has no 'features' array"))?;

    features
        .iter()
        .enumerate()
        .map(|(idx, feature)| {
            feature
                .as_object()
                .map(flatten_feature)
                .ok_or_else(|| unsupported(format!("feature {idx} is not an object")))
        })
        .collect()
}

/// Copies a feature's properties and geometry into one record, following
/// the feature's own key order.
///
/// A `Point` contributes `Latitude` (coordinates[1]) and `Longitude`
/// (coordinates[0]); a `Polygon` contributes its last linear ring as
/// `Polygon`, with coordinate pairs left as written.
fn flatten_feature(feature: &Map<String, Value>) -> Record {
    let mut record = Record::new();
    for (key, value) in feature {
        match key.as_str() {
            "properties" => {
                if let Some(properties) = value.as_object() {
                    record.extend(properties.iter().map(|(k, v)| (k.clone(), v.clone())));
                }
            }
            "geometry" => {
                if let Some(geometry) = value.as_object() {
                    flatten_geometry(geometry, &mut record);
                }
            }
            _ => {}
        }
    }
    record
}

fn flatten_geometry(geometry: &Map<String, Value>, record: &mut Record) {
    let kind = geometry.get("type").and_then(Value::as_str);
    let Some(coordinates) = geometry.get("coordinates").and_then(Value::as_array) else {
        return;
    };
    match kind {
        Some("Point") => {
            if let (Some(lon), Some(lat)) = (coordinates.first(), coordinates.get(1)) {
                record.insert("Latitude".to_string(), lat.clone());
                record.insert("Longitude".to_string(), lon.clone());
            }
        }
        Some("Polygon") => {
            if let Some(ring) = coordinates.last() {
                record.insert("Polygon".to_string(), ring.clone());
            }
        }
        _ => {}
    }
}

/// Reads records from CSV text with a header row.
///
/// Integer cells become JSON integers and other finite numeric cells JSON
/// floats; every other cell stays a string. Rows shorter than the header
/// produce records with fewer fields.
///
/// # Errors
///
/// Returns [`IngestError::Csv`] for malformed CSV and
/// [`IngestError::EmptyInput`] when there are no data rows.
pub fn read_csv_str(text: &str) -> Result<Vec<Record>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|source| IngestError::Csv { source })?
        .clone();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|source| IngestError::Csv { source })?;
        let record: Record = headers
            .iter()
            .zip(row.iter())
            .map(|(name, cell)| (name.to_string(), parse_cell(cell)))
            .collect();
        records.push(record);
    }

    if records.is_empty() {
        return Err(IngestError::empty(EmptyInputReason::NoRecords));
    }
    Ok(records)
}

/// Numeric text becomes a JSON number, anything else stays text.
fn parse_cell(cell: &str) -> Value {
    let trimmed = cell.trim();
    if let Ok(integer) = trimmed.parse::<i64>() {
        return Value::from(integer);
    }
    if let Ok(float) = trimmed.parse::<f64>()
        && let Some(number) = Number::from_f64(float)
    {
        return Value::Number(number);
    }
    Value::String(cell.to_string())
}

fn unsupported(reason: impl Into<String>) -> IngestError {
    IngestError::UnsupportedShape {
        reason: reason.into(),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_array_keeps_key_order() {
        let records = read_json_str(r#"[{"zeta": 1, "alpha": "a"}, {"zeta": 2, "alpha": "b"}]"#)
            .unwrap();
        assert_eq!(records.len(), 2);
        let keys: Vec<_> = records[0].keys().map(String::as_str).collect();
        assert_eq!(keys, ["zeta", "alpha"]);
    }

    #[test]
    fn non_object_elements_are_rejected() {
        let err = read_json_str("[{\"a\": 1}, 2]").unwrap_err();
        assert!(matches!(err, IngestError::UnsupportedShape { ref reason } if reason.contains("element 1")));
    }

    #[test]
    fn scalar_top_level_is_rejected() {
        assert!(matches!(
            read_json_str("42"),
            Err(IngestError::UnsupportedShape { .. })
        ));
        assert!(matches!(
            read_json_str(r#"{"a": 1}"#),
            Err(IngestError::UnsupportedShape { .. })
        ));
    }

    #[test]
    fn empty_array_is_empty_input() {
        assert!(matches!(
            read_json_str("[]"),
            Err(IngestError::EmptyInput { reason: EmptyInputReason::NoRecords })
        ));
    }

    #[test]
    fn geojson_points_become_latitude_and_longitude() {
        let text = json!({
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "geometry": {"type": "Point", "coordinates": [13.4050, 52.5200]},
                "properties": {"name": "Berlin"}
            }]
        })
        .to_string();
        let records = read_json_str(&text).unwrap();
        let keys: Vec<_> = records[0].keys().map(String::as_str).collect();
        assert_eq!(keys, ["Latitude", "Longitude", "name"]);
        assert_eq!(records[0]["Latitude"], json!(52.52));
        assert_eq!(records[0]["Longitude"], json!(13.405));
    }

    #[test]
    fn geojson_polygon_keeps_last_ring() {
        let text = json!({
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": {"id": 7},
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [
                        [[0.1, 0.1], [0.2, 0.2], [0.3, 0.1]],
                        [[1.5, 1.5], [1.6, 1.6], [1.7, 1.5]]
                    ]
                }
            }]
        })
        .to_string();
        let records = read_json_str(&text).unwrap();
        assert_eq!(records[0]["id"], json!(7));
        assert_eq!(records[0]["Polygon"], json!([[1.5, 1.5], [1.6, 1.6], [1.7, 1.5]]));
    }

    #[test]
    fn csv_numeric_cells_become_numbers() {
        let records = read_csv_str("city,population,area\nBonn,330000,141.06\nKiel,247000,118.65\n")
            .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1]["city"], json!("Kiel"));
        assert_eq!(records[1]["population"], json!(247000));
        assert_eq!(records[1]["area"], json!(118.65));
    }

    #[test]
    fn csv_non_numeric_cells_stay_text() {
        let records = read_csv_str("day,note\n2020-01-01,inf\n2020-01-02, \n").unwrap();
        assert_eq!(records[0]["day"], json!("2020-01-01"));
        assert_eq!(records[0]["note"], json!("inf"));
        assert_eq!(records[1]["note"], json!(" "));
    }

    #[test]
    fn rows_of_values_get_positional_names() {
        let records = read_json_str("[[1, 2, 3, 4, 5], [6, 7, 8, 9, 10]]").unwrap();
        let keys: Vec<_> = records[0].keys().map(String::as_str).collect();
        assert_eq!(keys, ["x", "y", "z", "a0", "a1"]);
        assert_eq!(records[1]["a1"], json!(10));
    }

    #[test]
    fn rows_of_single_entries_keep_entry_names() {
        let records =
            read_json_str(r#"[[{"day": "2020-01-01"}, {"visits": 3}], [{"day": "2020-01-02"}, {"visits": 5}]]"#)
                .unwrap();
        let keys: Vec<_> = records[0].keys().map(String::as_str).collect();
        assert_eq!(keys, ["day", "visits"]);
        assert_eq!(records[1]["visits"], json!(5));
    }

    #[test]
    fn order_table_names_row_values() {
        let records =
            read_json_str(r#"{"order": ["label", "value"], "data": [["a", 1], ["b", 2]]}"#).unwrap();
        assert_eq!(records.len(), 2);
        let keys: Vec<_> = records[0].keys().map(String::as_str).collect();
        assert_eq!(keys, ["label", "value"]);
        assert_eq!(records[1]["label"], json!("b"));
    }

    #[test]
    fn order_table_rows_must_match_order_length() {
        let err = read_json_str(r#"{"order": ["a", "b"], "data": [[1, 2], [3]]}"#).unwrap_err();
        assert!(matches!(err, IngestError::UnsupportedShape { ref reason } if reason.contains("row 1")));
    }

    #[test]
    fn empty_first_row_is_empty_input() {
        assert!(matches!(
            read_json_str("[[], [1, 2]]"),
            Err(IngestError::EmptyInput { .. })
        ));
    }

    #[test]
    fn inline_text_is_json_or_csv() {
        let json = read_str(r#"[{"a": 1}]"#).unwrap();
        assert_eq!(json[0]["a"], json!(1));

        let csv = read_str("a,b\n1,x\n").unwrap();
        assert_eq!(csv[0]["a"], json!(1));
        assert_eq!(csv[0]["b"], json!("x"));

        assert!(matches!(
            read_str(r#"{"a": 1}"#),
            Err(IngestError::UnsupportedShape { .. })
        ));
    }

    #[test]
    fn source_with_known_extension_is_a_path() {
        assert!(matches!(
            read_source("no/such/dir/data.csv"),
            Err(IngestError::FileNotFound { .. })
        ));
        let records = read_source("a,b\n1,2\n").unwrap();
        assert_eq!(records[0]["b"], json!(2));
    }

    #[test]
    fn csv_short_rows_have_fewer_fields() {
        let records = read_csv_str("a,b,c\n1,2,3\n4,5\n").unwrap();
        assert_eq!(records[0].len(), 3);
        assert_eq!(records[1].len(), 2);
    }

    #[test]
    fn csv_header_only_is_empty_input() {
        assert!(matches!(
            read_csv_str("a,b\n"),
            Err(IngestError::EmptyInput { .. })
        ));
    }

    #[test]
    fn extensions_map_to_formats() {
        assert_eq!(InputFormat::from_extension("JSON"), Some(InputFormat::Json));
        assert_eq!(InputFormat::from_extension("geojson"), Some(InputFormat::Json));
        assert_eq!(InputFormat::from_extension("csv"), Some(InputFormat::Csv));
        assert_eq!(InputFormat::from_extension("xlsx"), None);
    }
}
