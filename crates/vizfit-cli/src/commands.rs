use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use vizfit_catalog::{
    CatalogSource, ChartCatalog, DirectoryCatalog, EmbeddedCatalog, catalog_dir_from_env,
    default_catalog, init_global_catalog,
};
use vizfit_ingest::{MergeMode, normalize, read_source};
use vizfit_match::{classify_records, explain_classification};
use vizfit_model::{Dataset, Record};
use vizfit_profile::{dataset_properties, has_date, profile};

use crate::types::{ChartsReport, ClassifyReport, ColumnProfile, ProfileReport};

/// Picks the catalog directory: the explicit flag first, then
/// `VIZFIT_CATALOG_DIR`.
pub fn resolve_catalog_dir(explicit: Option<&Path>) -> Option<PathBuf> {
    explicit.map(Path::to_path_buf).or_else(catalog_dir_from_env)
}

/// Installs the process catalog and returns it with a description of its
/// origin.
///
/// Without a directory the embedded catalog is used.
pub fn load_catalog(explicit: Option<&Path>) -> Result<(&'static ChartCatalog, String)> {
    match resolve_catalog_dir(explicit) {
        Some(dir) => {
            let source = DirectoryCatalog::new(dir);
            let catalog = init_global_catalog(&source)
                .with_context(|| format!("load chart catalog from {}", source.root().display()))?;
            Ok((catalog, source.describe()))
        }
        None => Ok((default_catalog(), EmbeddedCatalog.describe())),
    }
}

/// Reads raw records from a file path or inline JSON/CSV text.
pub fn load_records(source: &str) -> Result<Vec<Record>> {
    let raw = read_source(source).with_context(|| format!("read {}", describe_source(source)))?;
    debug!(records = raw.len(), "Read raw records");
    Ok(raw)
}

/// Reads and normalizes the dataset of `source`.
pub fn load_dataset(source: &str, mode: MergeMode) -> Result<Dataset> {
    let dataset = normalize(load_records(source)?, mode)
        .with_context(|| format!("normalize {}", describe_source(source)))?;
    info!(
        records = dataset.len(),
        fields = dataset.field_count(),
        "Normalized dataset"
    );
    Ok(dataset)
}

pub fn run_classify(
    source: &str,
    mode: MergeMode,
    catalog: &ChartCatalog,
    explain: bool,
) -> Result<ClassifyReport> {
    let span = info_span!("classify_input", source = %describe_source(source));
    let _guard = span.enter();

    let raw = load_records(source)?;
    let classification = classify_records(raw, mode, catalog)
        .with_context(|| format!("classify {}", describe_source(source)))?;
    let verdicts = if explain {
        explain_classification(&classification, catalog)
    } else {
        Vec::new()
    };
    Ok(ClassifyReport {
        source: describe_source(source),
        classification,
        verdicts,
    })
}

/// Profiles a dataset without rejecting inconsistent columns, so they can be
/// reported.
pub fn run_profile(source: &str, mode: MergeMode) -> Result<ProfileReport> {
    let span = info_span!("profile_input", source = %describe_source(source));
    let _guard = span.enter();

    let dataset = load_dataset(source, mode)?;
    let profiled = profile(&dataset);
    let properties = dataset_properties(&dataset, &profiled);
    let names = dataset.field_names();

    let columns: Vec<ColumnProfile> = profiled
        .iter()
        .enumerate()
        .map(|(position, types)| ColumnProfile {
            position,
            name: names.get(position).map(|name| (*name).to_string()).unwrap_or_default(),
            types: types.clone(),
        })
        .collect();
    let consistent = profiled.is_consistent();

    Ok(ProfileReport {
        source: describe_source(source),
        records: dataset.len(),
        consistent,
        has_date: has_date(&profiled),
        lexicographic: consistent && properties.lexicographic,
        columns,
    })
}

/// The source as shown in reports: the path, or a marker for inline text.
pub fn describe_source(source: &str) -> String {
    if source.contains('\n') || source.trim_start().starts_with(['[', '{']) {
        "inline input".to_string()
    } else {
        source.to_string()
    }
}

pub fn run_charts(catalog: &ChartCatalog, origin: &str) -> ChartsReport {
    ChartsReport {
        origin: origin.to_string(),
        charts: catalog.specs().to_vec(),
    }
}

