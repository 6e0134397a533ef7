//! Dataset profiling.
//!
//! Each record is classified field by field, and the per-record results are
//! intersected position by position into one [`ProfiledTypes`].

use tracing::debug;
use vizfit_model::{Dataset, ProfiledTypes, Record, TypeSet, TypeTag};

use crate::error::{ProfileError, Result};
use crate::value::classify_value;

/// Tag sets of every field of a record, in field order.
pub fn classify(record: &Record) -> Vec<TypeSet> {
    record.values().map(classify_value).collect()
}

/// Intersects the classification of every record, position by position.
///
/// The first record fixes the number of positions. A later record that is
/// shorter empties the positions it lacks; extra trailing fields are ignored.
/// An emptied position stays empty and does not stop the reduction.
pub fn profile(dataset: &Dataset) -> ProfiledTypes {
    let mut records = dataset.iter();
    let Some(first) = records.next() else {
        return ProfiledTypes::default();
    };

    let mut columns = classify(first);
    for record in records {
        let mut values = record.values();
        for column in &mut columns {
            match values.next() {
                Some(value) => column.intersect_with(&classify_value(value)),
                None => *column = TypeSet::new(),
            }
        }
    }
    ProfiledTypes::new(columns)
}

/// True when no column of the dataset profiles to an empty set.
///
/// An empty dataset is consistent.
pub fn is_dataset_consistent(dataset: &Dataset) -> bool {
    profile(dataset).is_consistent()
}

/// True when `time` survives at any position.
pub fn has_date(profiled: &ProfiledTypes) -> bool {
    profiled.any_contains(TypeTag::Time)
}

/// Fails on the first column whose profiled set is empty.
///
/// # Errors
///
/// Returns [`ProfileError::Inconsistent`] naming the column index and the
/// field name at that position of the first record.
pub fn check_consistency(dataset: &Dataset, profiled: &ProfiledTypes) -> Result<()> {
    let Some(column) = profiled.first_empty_position() else {
        return Ok(());
    };
    let field = dataset
        .field_names()
        .get(column)
        .map(ToString::to_string)
        .unwrap_or_default();
    debug!(column, field = %field, "Dataset is inconsistent");
    Err(ProfileError::Inconsistent { column, field })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dataset(value: serde_json::Value) -> Dataset {
        value
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item.as_object().cloned().unwrap())
            .collect()
    }

    #[test]
    fn numbers_and_strings_profile_to_their_tags() {
        let data = dataset(json!([{"a": 1, "b": "x"}, {"a": 2, "b": "y"}]));
        let profiled = profile(&data);
        assert_eq!(
            profiled.as_slice(),
            &[TypeSet::from([TypeTag::Number]), TypeSet::from([TypeTag::String])]
        );
        assert!(is_dataset_consistent(&data));
    }

    #[test]
    fn conflicting_column_is_reported_by_index_and_name() {
        let data = dataset(json!([{"a": 1, "b": "x"}, {"a": "oops", "b": 2}]));
        let profiled = profile(&data);
        assert!(profiled.get(0).unwrap().is_empty());
        assert!(!is_dataset_consistent(&data));
        assert_eq!(
            check_consistency(&data, &profiled),
            Err(ProfileError::Inconsistent {
                column: 0,
                field: "a".to_string()
            })
        );
    }

    #[test]
    fn emptied_position_does_not_stop_later_positions() {
        let data = dataset(json!([
            {"a": "x", "b": "2020-01-01"},
            {"a": 1, "b": "2020-01-02"},
        ]));
        let profiled = profile(&data);
        assert!(profiled.get(0).unwrap().is_empty());
        assert_eq!(
            profiled.get(1),
            Some(&TypeSet::from([TypeTag::String, TypeTag::Time]))
        );
        assert!(has_date(&profiled));
    }

    #[test]
    fn short_records_empty_missing_positions() {
        let data = dataset(json!([{"a": 1, "b": 2}, {"a": 3}, {"a": 4, "b": 5, "c": 6}]));
        let profiled = profile(&data);
        assert_eq!(profiled.len(), 2);
        assert_eq!(profiled.first_empty_position(), Some(1));
    }

    #[test]
    fn empty_dataset_is_consistent() {
        let data = Dataset::default();
        assert!(profile(&data).is_empty());
        assert!(is_dataset_consistent(&data));
        assert!(check_consistency(&data, &profile(&data)).is_ok());
    }
}
