//! Dataset metadata for chart matching.

use vizfit_model::{Dataset, DatasetProperties, ProfiledTypes, TypeTag};

use crate::order::is_lexicographic;
use crate::profile::has_date;

/// Builds the metadata chart matching needs.
///
/// `lexicographic` is only reported when the dataset has more than one
/// record and its leading column carries `number` or `time`.
pub fn dataset_properties(dataset: &Dataset, profiled: &ProfiledTypes) -> DatasetProperties {
    let orderable_key = profiled
        .get(0)
        .is_some_and(|first| first.contains(TypeTag::Number) || first.contains(TypeTag::Time));

    DatasetProperties {
        dataset_length: dataset.len(),
        field_count: profiled.len(),
        has_date: has_date(profiled),
        lexicographic: dataset.len() > 1 && orderable_key && is_lexicographic(dataset),
    }
}
