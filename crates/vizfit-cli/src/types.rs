//! Reports produced by the CLI commands.

use serde::Serialize;
use vizfit_match::ChartVerdict;
use vizfit_model::{ChartSpec, Classification, TypeSet};

/// Result of `vizfit classify`.
#[derive(Debug, Serialize)]
pub struct ClassifyReport {
    /// File path, or `inline input` for text given on the command line.
    pub source: String,
    pub classification: Classification,
    /// Only filled when `--explain` was given.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub verdicts: Vec<ChartVerdict>,
}

/// One column of a profile report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnProfile {
    pub position: usize,
    pub name: String,
    pub types: TypeSet,
}

/// Result of `vizfit profile`.
#[derive(Debug, Serialize)]
pub struct ProfileReport {
    pub source: String,
    pub records: usize,
    pub columns: Vec<ColumnProfile>,
    pub consistent: bool,
    pub has_date: bool,
    pub lexicographic: bool,
}

impl ProfileReport {
    pub fn inconsistent_columns(&self) -> impl Iterator<Item = &ColumnProfile> {
        self.columns.iter().filter(|column| column.types.is_empty())
    }
}

/// Result of `vizfit charts`.
#[derive(Debug, Serialize)]
pub struct ChartsReport {
    pub origin: String,
    pub charts: Vec<ChartSpec>,
}
