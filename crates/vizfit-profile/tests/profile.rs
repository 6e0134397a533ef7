//! Integration tests for dataset profiling.

use proptest::prelude::*;
use serde_json::{Value, json};
use vizfit_model::{Dataset, Record, TypeSet, TypeTag};
use vizfit_profile::{classify, classify_value, is_dataset_consistent, profile};

fn dataset(value: Value) -> Dataset {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item.as_object().cloned().unwrap())
        .collect()
}

#[test]
fn scenario_numbers_and_strings_are_consistent() {
    let data = dataset(json!([{"a": 1, "b": "x"}, {"a": 2, "b": "y"}]));
    let profiled = profile(&data);
    assert_eq!(
        profiled.into_inner(),
        vec![TypeSet::from([TypeTag::Number]), TypeSet::from([TypeTag::String])]
    );
    assert!(is_dataset_consistent(&data));
}

#[test]
fn scenario_conflicting_types_are_inconsistent() {
    let data = dataset(json!([{"a": 1, "b": "x"}, {"a": "oops", "b": 2}]));
    assert!(!is_dataset_consistent(&data));
}

#[test]
fn scenario_dates_and_numerals() {
    assert_eq!(
        classify_value(&json!("2020-01-01")),
        TypeSet::from([TypeTag::String, TypeTag::Time])
    );
    assert_eq!(
        classify_value(&json!("42")),
        TypeSet::from([TypeTag::Number, TypeTag::String])
    );
}

#[test]
fn classify_follows_field_order() {
    let record = dataset(json!([{"when": "2020-01-01", "n": 3, "tags": ["a"]}]))
        .into_records()
        .remove(0);
    let sets = classify(&record);
    assert_eq!(sets.len(), 3);
    assert!(sets[0].contains(TypeTag::Time));
    assert_eq!(sets[1], TypeSet::from([TypeTag::Number]));
    assert_eq!(sets[2], TypeSet::from([TypeTag::List]));
}

fn scalar_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        (-500i64..500).prop_map(|n| json!(n)),
        (-200.0f64..200.0).prop_map(|f| json!((f * 100.0).round() / 100.0)),
        "[a-z]{1,6}".prop_map(Value::String),
        (-99i32..99).prop_map(|n| json!(format!("{n}.5"))),
        (1990i32..2030, 1u32..13, 1u32..29)
            .prop_map(|(y, m, d)| json!(format!("{y:04}-{m:02}-{d:02}"))),
        any::<bool>().prop_map(Value::Bool),
        Just(Value::Null),
        Just(json!({"nested": 1})),
    ]
}

fn record_strategy(fields: usize) -> impl Strategy<Value = Record> {
    prop::collection::vec(scalar_value(), fields).prop_map(|values| {
        values
            .into_iter()
            .enumerate()
            .map(|(idx, v)| (format!("f{idx}"), v))
            .collect()
    })
}

fn dataset_strategy() -> impl Strategy<Value = (Dataset, Record)> {
    (1usize..4).prop_flat_map(|fields| {
        (
            prop::collection::vec(record_strategy(fields), 1..8),
            record_strategy(fields),
        )
            .prop_map(|(records, extra)| (Dataset::new(records), extra))
    })
}

proptest! {
    #[test]
    fn profile_is_idempotent((data, _) in dataset_strategy()) {
        prop_assert_eq!(profile(&data), profile(&data));
    }

    #[test]
    fn appending_records_never_grows_a_column((data, extra) in dataset_strategy()) {
        let before = profile(&data);
        let mut grown = data.clone();
        grown.push(extra);
        let after = profile(&grown);

        prop_assert_eq!(before.len(), after.len());
        for (old, new) in before.iter().zip(after.iter()) {
            prop_assert!(new.is_subset(old));
        }
    }

    #[test]
    fn consistency_matches_profile((data, _) in dataset_strategy()) {
        let profiled = profile(&data);
        prop_assert_eq!(
            is_dataset_consistent(&data),
            profiled.iter().all(|set| !set.is_empty())
        );
    }

    #[test]
    fn single_record_is_always_consistent(record in record_strategy(3)) {
        let data = Dataset::new(vec![record]);
        prop_assert!(is_dataset_consistent(&data));
    }
}
