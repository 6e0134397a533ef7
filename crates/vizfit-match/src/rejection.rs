//! Reasons a chart is excluded.

use std::fmt;

use serde::Serialize;
use vizfit_model::TypeSet;

/// Why a chart spec does not fit a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Rejection {
    /// The dataset has a column with no surviving type.
    InconsistentDataset { column: usize },
    /// Fewer records than `min_datapoints`.
    TooFewRecords { min: usize, actual: usize },
    /// More records than `max_datapoints`.
    TooManyRecords { max: usize, actual: usize },
    /// The dataset contains dates and the chart cannot show them.
    DatesUnsupported,
    /// The chart needs an ordered leading column.
    NotLexicographic,
    /// The spec requires a single column, so no repeat-group size can be
    /// derived from it. Such specs never match.
    NoValueColumns,
    /// The dataset has fewer columns than the spec requires.
    TooFewColumns { required: usize, actual: usize },
    /// The value columns do not split evenly into groups of the spec's size.
    ColumnCountMismatch { value_columns: usize, group_size: usize },
    /// A column shares no tag with its requirement.
    TypeMismatch {
        position: usize,
        required: TypeSet,
        given: TypeSet,
    },
    /// Extra columns are present and the spec does not allow multiple data.
    MultipleDataUnsupported { required: usize, actual: usize },
    /// The trailing columns share no common tag.
    InconsistentRepeatGroup { from: usize },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::InconsistentDataset { column } => {
                write!(f, "dataset is inconsistent at column {column}")
            }
            Rejection::TooFewRecords { min, actual } => {
                write!(f, "needs at least {min} records, has {actual}")
            }
            Rejection::TooManyRecords { max, actual } => {
                write!(f, "accepts at most {max} records, has {actual}")
            }
            Rejection::DatesUnsupported => f.write_str("dataset has dates, chart has no date support"),
            Rejection::NotLexicographic => f.write_str("leading column is not strictly ordered"),
            Rejection::NoValueColumns => f.write_str("spec defines no value columns"),
            Rejection::TooFewColumns { required, actual } => {
                write!(f, "needs {required} columns, has {actual}")
            }
            Rejection::ColumnCountMismatch {
                value_columns,
                group_size,
            } => write!(
                f,
                "{value_columns} value columns do not split into groups of {group_size}"
            ),
            Rejection::TypeMismatch {
                position,
                required,
                given,
            } => write!(f, "column {position} is {given}, needs one of {required}"),
            Rejection::MultipleDataUnsupported { required, actual } => {
                write!(f, "takes exactly {required} columns, has {actual}")
            }
            Rejection::InconsistentRepeatGroup { from } => {
                write!(f, "columns from {from} on share no type")
            }
        }
    }
}
