//! Type inference for single field values.
//!
//! Tags are not mutually exclusive: `"52.52"` is a `number`, a `string`, a
//! `latitude` and a `longitude` at once.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use vizfit_model::{TypeSet, TypeTag};

use crate::datetime::is_iso8601;

/// Decimal coordinate shape: up to three integer digits and a fraction.
static COORDINATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?[0-9]{1,3}(?:\.[0-9]{1,20})+$").expect("Invalid coordinate regex")
});

/// Minimum number of coordinate pairs for a `polygon`.
pub const MIN_POLYGON_POINTS: usize = 3;

/// Tags satisfied by one raw value.
///
/// Every value gets at least one tag. Booleans count as numbers; nulls and
/// nested objects count as strings.
pub fn classify_value(value: &Value) -> TypeSet {
    let mut tags = TypeSet::new();
    match value {
        Value::Number(number) => {
            tags.insert(TypeTag::Number);
            add_coordinate_tags(&number.to_string(), &mut tags);
        }
        Value::String(text) => {
            tags.insert(TypeTag::String);
            if parse_float(text).is_some() {
                tags.insert(TypeTag::Number);
            }
            if is_iso8601(text) {
                tags.insert(TypeTag::Time);
            }
            add_coordinate_tags(text.trim(), &mut tags);
        }
        Value::Array(items) => {
            tags.insert(TypeTag::List);
            if is_polygon(items) {
                tags.insert(TypeTag::Polygon);
            }
        }
        Value::Bool(_) => {
            tags.insert(TypeTag::Number);
        }
        Value::Null | Value::Object(_) => {
            tags.insert(TypeTag::String);
        }
    }
    tags
}

/// Parses text as a float, accepting scientific notation, `inf` and `NaN`.
pub fn parse_float(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok()
}

/// True when `value` passes as a latitude.
pub fn is_latitude(value: &Value) -> bool {
    coordinate_of(value).is_some_and(|v| (-90.0..=90.0).contains(&v))
}

/// True when `value` passes as a longitude.
pub fn is_longitude(value: &Value) -> bool {
    coordinate_of(value).is_some_and(|v| (-180.0..=180.0).contains(&v))
}

/// True for a list of at least [`MIN_POLYGON_POINTS`] coordinate pairs whose
/// first element is a latitude and second a longitude.
pub fn is_polygon(items: &[Value]) -> bool {
    items.len() >= MIN_POLYGON_POINTS
        && items.iter().all(|item| match item.as_array() {
            Some(pair) if pair.len() == 2 => is_latitude(&pair[0]) && is_longitude(&pair[1]),
            _ => false,
        })
}

fn coordinate_of(value: &Value) -> Option<f64> {
    let text = match value {
        Value::Number(number) => number.to_string(),
        Value::String(text) => text.trim().to_string(),
        _ => return None,
    };
    coordinate_from_text(&text)
}

fn coordinate_from_text(text: &str) -> Option<f64> {
    if !COORDINATE_REGEX.is_match(text) {
        return None;
    }
    text.parse::<f64>().ok()
}

fn add_coordinate_tags(text: &str, tags: &mut TypeSet) {
    let Some(value) = coordinate_from_text(text) else {
        return;
    };
    if (-90.0..=90.0).contains(&value) {
        tags.insert(TypeTag::Latitude);
    }
    if (-180.0..=180.0).contains(&value) {
        tags.insert(TypeTag::Longitude);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tags(list: &[TypeTag]) -> TypeSet {
        list.iter().copied().collect()
    }

    #[test]
    fn json_numbers_are_numbers_only_unless_coordinate_shaped() {
        assert_eq!(classify_value(&json!(1)), tags(&[TypeTag::Number]));
        assert_eq!(classify_value(&json!(1500.25)), tags(&[TypeTag::Number]));
        assert_eq!(
            classify_value(&json!(52.52)),
            tags(&[TypeTag::Number, TypeTag::Latitude, TypeTag::Longitude])
        );
        assert_eq!(
            classify_value(&json!(-122.41)),
            tags(&[TypeTag::Number, TypeTag::Longitude])
        );
    }

    #[test]
    fn numeric_strings_are_numbers_and_strings() {
        assert_eq!(
            classify_value(&json!("42")),
            tags(&[TypeTag::Number, TypeTag::String])
        );
        for text in ["1e5", "inf", "NaN", " 7 "] {
            assert!(classify_value(&json!(text)).contains(TypeTag::Number), "{text}");
        }
        assert_eq!(classify_value(&json!("abc")), tags(&[TypeTag::String]));
    }

    #[test]
    fn iso_dates_are_time_and_string() {
        assert_eq!(
            classify_value(&json!("2020-01-01")),
            tags(&[TypeTag::String, TypeTag::Time])
        );
        assert!(!classify_value(&json!("2020-02-30")).contains(TypeTag::Time));
    }

    #[test]
    fn coordinate_strings_get_range_tags() {
        assert_eq!(
            classify_value(&json!("120.5")),
            tags(&[TypeTag::Number, TypeTag::String, TypeTag::Longitude])
        );
        assert_eq!(
            classify_value(&json!("-45.0")),
            tags(&[
                TypeTag::Number,
                TypeTag::String,
                TypeTag::Latitude,
                TypeTag::Longitude
            ])
        );
        assert!(!classify_value(&json!("190.5")).contains(TypeTag::Longitude));
    }

    #[test]
    fn every_scalar_gets_a_tag() {
        assert_eq!(classify_value(&json!(true)), tags(&[TypeTag::Number]));
        assert_eq!(classify_value(&json!(false)), tags(&[TypeTag::Number]));
        assert_eq!(classify_value(&Value::Null), tags(&[TypeTag::String]));
        assert_eq!(classify_value(&json!({"a": 1})), tags(&[TypeTag::String]));
    }

    #[test]
    fn lists_of_coordinate_pairs_are_polygons() {
        let ring = json!([[52.5, 13.4], [52.6, 13.5], [52.4, 13.6], [52.5, 13.4]]);
        assert_eq!(
            classify_value(&ring),
            tags(&[TypeTag::List, TypeTag::Polygon])
        );
    }

    #[test]
    fn polygon_pair_order_is_not_swapped() {
        // first element out of latitude range
        let ring = json!([[120.5, 10.5], [121.5, 11.5], [122.5, 12.5]]);
        assert_eq!(classify_value(&ring), tags(&[TypeTag::List]));
    }

    #[test]
    fn points_with_altitude_are_not_pairs() {
        let ring = json!([[52.5, 13.4, 30.0], [52.6, 13.5, 31.0], [52.4, 13.6, 29.0]]);
        assert_eq!(classify_value(&ring), tags(&[TypeTag::List]));
    }

    #[test]
    fn short_or_flat_lists_are_plain_lists() {
        assert_eq!(
            classify_value(&json!([[1.5, 2.5], [3.5, 4.5]])),
            tags(&[TypeTag::List])
        );
        assert_eq!(classify_value(&json!([1, 2, 3])), tags(&[TypeTag::List]));
    }
}
