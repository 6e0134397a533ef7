//! Tests for vizfit-model types.

use proptest::prelude::*;
use serde_json::json;
use vizfit_model::{
    ChartSpec, Classification, Dataset, MaxDatapoints, ProfiledTypes, TypeSet, TypeTag,
    VisTypeRequirement,
};

fn tag_strategy() -> impl Strategy<Value = TypeTag> {
    prop::sample::select(TypeTag::ALL.to_vec())
}

fn type_set_strategy() -> impl Strategy<Value = TypeSet> {
    prop::collection::vec(tag_strategy(), 0..7).prop_map(|tags| tags.into_iter().collect())
}

#[test]
fn chart_spec_deserializes_from_serialized_form() {
    let spec = ChartSpec::new(
        "linechart",
        vec![
            VisTypeRequirement::new("x", [TypeTag::Number, TypeTag::Time]),
            VisTypeRequirement::new("y", [TypeTag::Number]),
        ],
    )
    .with_datapoints(2, MaxDatapoints::Unbounded)
    .with_multiple_data(true);

    let value = serde_json::to_value(&spec).expect("serialize spec");
    assert_eq!(value["max_datapoints"], json!("inf"));
    assert_eq!(value["vistypes"][0]["types"], json!(["number", "time"]));

    let round: ChartSpec = serde_json::from_value(value).expect("deserialize spec");
    assert_eq!(round, spec);
}

#[test]
fn classification_supports_listed_charts() {
    let classification = Classification {
        charts: vec!["barchart".to_string(), "piechart".to_string()],
        profiled_types: ProfiledTypes::new(vec![
            TypeSet::from([TypeTag::String]),
            TypeSet::from([TypeTag::Number, TypeTag::String]),
        ]),
        has_date: false,
        is_lexicographic: false,
        dataset_length: 3,
        field_names: vec!["label".to_string(), "value".to_string()],
        dataset: Dataset::default(),
    };
    assert!(classification.supports("piechart"));
    assert!(!classification.supports("linechart"));
    assert!(!classification.is_empty());
}

proptest! {
    #[test]
    fn intersection_is_subset_of_both(a in type_set_strategy(), b in type_set_strategy()) {
        let shared = a.intersection(&b);
        prop_assert!(shared.is_subset(&a));
        prop_assert!(shared.is_subset(&b));
        prop_assert_eq!(shared.is_empty(), !a.intersects(&b));
    }

    #[test]
    fn intersect_with_matches_intersection(a in type_set_strategy(), b in type_set_strategy()) {
        let mut narrowed = a.clone();
        narrowed.intersect_with(&b);
        prop_assert_eq!(narrowed, a.intersection(&b));
    }

    #[test]
    fn bounded_max_allows_up_to_limit(max in 0usize..1000, count in 0usize..2000) {
        prop_assert_eq!(MaxDatapoints::Bounded(max).allows(count), count <= max);
        prop_assert!(MaxDatapoints::Unbounded.allows(count));
    }
}
