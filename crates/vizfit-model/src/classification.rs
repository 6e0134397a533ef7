//! Dataset metadata and pipeline results.

use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::tags::ProfiledTypes;

/// Metadata about a dataset that chart matching depends on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetProperties {
    pub dataset_length: usize,
    pub field_count: usize,
    /// A `time` tag survived profiling at some position.
    pub has_date: bool,
    /// The leading column is strictly ascending or strictly descending.
    pub lexicographic: bool,
}

/// Result of classifying one dataset against a chart catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Compatible chart identifiers, in catalog order.
    pub charts: Vec<String>,
    pub profiled_types: ProfiledTypes,
    pub has_date: bool,
    pub is_lexicographic: bool,
    pub dataset_length: usize,
    pub field_names: Vec<String>,
    /// The normalized dataset the decision was made on.
    pub dataset: Dataset,
}

impl Classification {
    /// True when `chart` is among the compatible charts.
    pub fn supports(&self, chart: &str) -> bool {
        self.charts.iter().any(|title| title == chart)
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }

    /// The metadata the charts were matched against.
    pub fn properties(&self) -> DatasetProperties {
        DatasetProperties {
            dataset_length: self.dataset_length,
            field_count: self.profiled_types.len(),
            has_date: self.has_date,
            lexicographic: self.is_lexicographic,
        }
    }
}
