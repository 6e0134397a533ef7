//! Chart matching.
//!
//! A chart matches when every constraint of its spec holds: record count
//! bounds, date support, leading-column order, and the positional `vistypes`
//! requirements. Matching is by column position, never by field name.
//!
//! Columns beyond the spec's length form a repeat group: the dataset's value
//! columns (all but the first) must split evenly into groups of the spec's
//! value-column count, and every column from the last required position on
//! must share at least one tag.

use serde::Serialize;
use tracing::debug;
use vizfit_catalog::ChartCatalog;
use vizfit_model::{ChartSpec, DatasetProperties, MaxDatapoints, ProfiledTypes, TypeSet};

use crate::rejection::Rejection;

/// Outcome for one chart of a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartVerdict {
    pub chart: String,
    /// `None` when the chart is compatible.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection: Option<Rejection>,
}

impl ChartVerdict {
    pub fn is_compatible(&self) -> bool {
        self.rejection.is_none()
    }
}

/// Titles of every compatible chart, in catalog order.
pub fn match_charts(
    profiled: &ProfiledTypes,
    properties: &DatasetProperties,
    catalog: &ChartCatalog,
) -> Vec<String> {
    catalog
        .iter()
        .filter(|spec| evaluate_logged(spec, profiled, properties).is_ok())
        .map(|spec| spec.title.clone())
        .collect()
}

/// One verdict per catalog entry, in catalog order.
pub fn explain(
    profiled: &ProfiledTypes,
    properties: &DatasetProperties,
    catalog: &ChartCatalog,
) -> Vec<ChartVerdict> {
    catalog
        .iter()
        .map(|spec| ChartVerdict {
            chart: spec.title.clone(),
            rejection: evaluate_logged(spec, profiled, properties).err(),
        })
        .collect()
}

fn evaluate_logged(
    spec: &ChartSpec,
    profiled: &ProfiledTypes,
    properties: &DatasetProperties,
) -> Result<(), Rejection> {
    let verdict = evaluate_chart(spec, profiled, properties);
    if let Err(rejection) = &verdict {
        debug!(chart = %spec.title, reason = %rejection, "Chart rejected");
    }
    verdict
}

/// Checks one spec against a profiled dataset.
///
/// # Errors
///
/// Returns the first constraint the dataset fails.
pub fn evaluate_chart(
    spec: &ChartSpec,
    profiled: &ProfiledTypes,
    properties: &DatasetProperties,
) -> Result<(), Rejection> {
    if let Some(column) = profiled.first_empty_position() {
        return Err(Rejection::InconsistentDataset { column });
    }
    check_length(spec, properties.dataset_length)?;
    if properties.has_date && !spec.datesupport {
        return Err(Rejection::DatesUnsupported);
    }
    if spec.lexical_required && !properties.lexicographic {
        return Err(Rejection::NotLexicographic);
    }
    check_vistypes(spec, profiled.as_slice())
}

fn check_length(spec: &ChartSpec, actual: usize) -> Result<(), Rejection> {
    if actual < spec.min_datapoints {
        return Err(Rejection::TooFewRecords {
            min: spec.min_datapoints,
            actual,
        });
    }
    if let MaxDatapoints::Bounded(max) = spec.max_datapoints
        && actual > max
    {
        return Err(Rejection::TooManyRecords { max, actual });
    }
    Ok(())
}

fn check_vistypes(spec: &ChartSpec, profiled: &[TypeSet]) -> Result<(), Rejection> {
    let required: Vec<&TypeSet> = spec.required_types().collect();
    let required_length = required.len();
    let data_length = profiled.len();

    let each_value_count = required_length.saturating_sub(1);
    if each_value_count == 0 {
        return Err(Rejection::NoValueColumns);
    }
    if data_length < required_length {
        return Err(Rejection::TooFewColumns {
            required: required_length,
            actual: data_length,
        });
    }
    let data_value_count = data_length - 1;
    if data_value_count % each_value_count != 0 {
        return Err(Rejection::ColumnCountMismatch {
            value_columns: data_value_count,
            group_size: each_value_count,
        });
    }

    if let Some(position) = first_unmet_requirement(&profiled[..required_length], &required) {
        return Err(Rejection::TypeMismatch {
            position,
            required: required[position].clone(),
            given: profiled[position].clone(),
        });
    }

    if data_length > required_length {
        if !spec.multiple_data {
            return Err(Rejection::MultipleDataUnsupported {
                required: required_length,
                actual: data_length,
            });
        }
        let from = required_length - 1;
        if !is_repeat_group_consistent(&profiled[from..]) {
            return Err(Rejection::InconsistentRepeatGroup { from });
        }
    }
    Ok(())
}

/// Position of the first given set sharing no tag with its requirement.
///
/// Both slices are compared pairwise; a length difference counts as unmet
/// at the first missing position.
pub fn first_unmet_requirement(given: &[TypeSet], required: &[&TypeSet]) -> Option<usize> {
    let paired = given
        .iter()
        .zip(required)
        .position(|(given, required)| !given.intersects(required));
    paired.or_else(|| (given.len() != required.len()).then(|| given.len().min(required.len())))
}

/// True when the running intersection of `columns` stays non-empty.
pub fn is_repeat_group_consistent(columns: &[TypeSet]) -> bool {
    let Some((first, rest)) = columns.split_first() else {
        return false;
    };
    let mut shared = first.clone();
    for column in rest {
        shared.intersect_with(column);
    }
    !shared.is_empty()
}
