//! End-to-end classification.
//!
//! normalize → profile → consistency check → metadata → match.

use tracing::{info, info_span};
use vizfit_catalog::ChartCatalog;
use vizfit_ingest::{EmptyInputReason, IngestError, MergeMode, normalize};
use vizfit_model::{Classification, Dataset, DatasetProperties, ProfiledTypes, Record};
use vizfit_profile::{check_consistency, dataset_properties, profile};

use crate::error::Result;
use crate::matcher::{ChartVerdict, explain, match_charts};

/// Normalizes raw records and classifies the result.
///
/// # Errors
///
/// Returns [`IngestError::EmptyInput`](vizfit_ingest::IngestError::EmptyInput)
/// when there is nothing to classify, including shared-key merging that
/// finds no common field, and
/// [`ProfileError::Inconsistent`](vizfit_profile::ProfileError::Inconsistent)
/// when a column has no common type.
pub fn classify_records(
    raw: Vec<Record>,
    mode: MergeMode,
    catalog: &ChartCatalog,
) -> Result<Classification> {
    let dataset = normalize(raw, mode)?;
    if dataset.is_empty() {
        return Err(IngestError::empty(EmptyInputReason::NoSharedKeys).into());
    }
    classify_dataset(dataset, catalog)
}

/// Classifies an already normalized dataset.
///
/// # Errors
///
/// Returns [`IngestError::EmptyInput`](vizfit_ingest::IngestError::EmptyInput)
/// for a dataset with no records or no fields and
/// [`ProfileError::Inconsistent`](vizfit_profile::ProfileError::Inconsistent)
/// when a column has no common type.
pub fn classify_dataset(dataset: Dataset, catalog: &ChartCatalog) -> Result<Classification> {
    let span = info_span!("classify", records = dataset.len());
    let _guard = span.enter();

    let (profiled, properties) = analyze(&dataset)?;
    let charts = match_charts(&profiled, &properties, catalog);
    info!(
        records = properties.dataset_length,
        fields = properties.field_count,
        compatible = charts.len(),
        "Classified dataset"
    );

    Ok(Classification {
        charts,
        profiled_types: profiled,
        has_date: properties.has_date,
        is_lexicographic: properties.lexicographic,
        dataset_length: properties.dataset_length,
        field_names: dataset.field_names().into_iter().map(String::from).collect(),
        dataset,
    })
}

/// Verdicts for every chart of `catalog` against a normalized dataset.
///
/// # Errors
///
/// Same as [`classify_dataset`].
pub fn explain_dataset(dataset: &Dataset, catalog: &ChartCatalog) -> Result<Vec<ChartVerdict>> {
    let (profiled, properties) = analyze(dataset)?;
    Ok(explain(&profiled, &properties, catalog))
}

/// Verdicts for every chart of `catalog` against a finished classification,
/// without profiling the dataset again.
pub fn explain_classification(
    classification: &Classification,
    catalog: &ChartCatalog,
) -> Vec<ChartVerdict> {
    explain(
        &classification.profiled_types,
        &classification.properties(),
        catalog,
    )
}

/// Profiles a dataset and derives its metadata, refusing empty or
/// inconsistent datasets.
///
/// # Errors
///
/// Same as [`classify_dataset`].
pub fn analyze(dataset: &Dataset) -> Result<(ProfiledTypes, DatasetProperties)> {
    if dataset.is_empty() {
        return Err(IngestError::empty(EmptyInputReason::NoRecords).into());
    }
    if dataset.field_count() == 0 {
        return Err(IngestError::empty(EmptyInputReason::EmptyKeyset).into());
    }
    let profiled = profile(dataset);
    check_consistency(dataset, &profiled)?;
    let properties = dataset_properties(dataset, &profiled);
    Ok((profiled, properties))
}
