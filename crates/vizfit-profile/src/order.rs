//! Monotonicity of the leading column.

use std::cmp::Ordering;

use serde_json::Value;
use vizfit_model::Dataset;

use crate::value::parse_float;

/// Orders two raw values.
///
/// Two numbers compare numerically. Two strings compare numerically when
/// both parse as finite numbers, otherwise lexically. Anything else is
/// incomparable.
pub fn compare_values(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.as_f64()?.partial_cmp(&y.as_f64()?),
        (Value::String(x), Value::String(y)) => {
            match (finite_number(x), finite_number(y)) {
                (Some(x), Some(y)) => x.partial_cmp(&y),
                _ => Some(x.cmp(y)),
            }
        }
        _ => None,
    }
}

fn finite_number(text: &str) -> Option<f64> {
    parse_float(text).filter(|value| value.is_finite())
}

/// True when the leading column is strictly ascending.
pub fn is_strictly_ascending(dataset: &Dataset) -> bool {
    is_strictly_monotonic(dataset, Ordering::Less)
}

/// True when the leading column is strictly descending.
pub fn is_strictly_descending(dataset: &Dataset) -> bool {
    is_strictly_monotonic(dataset, Ordering::Greater)
}

/// True when the leading column is strictly ascending or strictly
/// descending. Equal neighbours break both directions.
///
/// Datasets with fewer than two records are trivially ordered.
pub fn is_lexicographic(dataset: &Dataset) -> bool {
    is_strictly_ascending(dataset) || is_strictly_descending(dataset)
}

fn is_strictly_monotonic(dataset: &Dataset, direction: Ordering) -> bool {
    let column: Vec<Option<&Value>> = dataset.first_column().collect();
    column.windows(2).all(|pair| match (pair[0], pair[1]) {
        (Some(prev), Some(next)) => compare_values(prev, next) == Some(direction),
        _ => false,
    })
}
