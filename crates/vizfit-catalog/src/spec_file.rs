//! Parsing and validation of chart spec files.
//!
//! A spec file holds one JSON object. Each `vistypes` entry is an object whose
//! keys, in document order, each contribute one column position; a value is a
//! single tag name or a non-empty array of tag names.

use serde::Deserialize;
use serde_json::{Map, Value};
use vizfit_model::{ChartSpec, MaxDatapoints, TypeSet, TypeTag, VisTypeRequirement};

use crate::error::{CatalogError, Result};

/// Spec file as written on disk, before validation.
#[derive(Debug, Deserialize)]
struct RawChartSpec {
    title: Option<String>,
    min_datapoints: Option<usize>,
    max_datapoints: Option<MaxDatapoints>,
    datesupport: Option<bool>,
    #[serde(default)]
    multiple_data: bool,
    #[serde(default)]
    lexical_required: bool,
    vistypes: Option<Vec<Map<String, Value>>>,
}

/// Parses and validates one chart spec.
///
/// `origin` names the file or source the text came from and is only used in
/// error messages.
///
/// # Errors
///
/// Returns [`CatalogError::Json`] for syntactically invalid JSON and
/// [`CatalogError::MalformedSpec`] when a required field is missing, has the
/// wrong type, or `vistypes` is not a list of tag requirements.
pub fn parse_chart_spec(text: &str, origin: &str) -> Result<ChartSpec> {
    let raw: RawChartSpec = serde_json::from_str(text).map_err(|source| {
        if source.is_data() {
            malformed(origin, source.to_string())
        } else {
            CatalogError::Json {
                origin: origin.to_string(),
                source,
            }
        }
    })?;
    validate(raw, origin)
}

fn validate(raw: RawChartSpec, origin: &str) -> Result<ChartSpec> {
    let title = required(raw.title, "title", origin)?;
    if title.trim().is_empty() {
        return Err(malformed(origin, "title is empty"));
    }
    let min_datapoints = required(raw.min_datapoints, "min_datapoints", origin)?;
    let max_datapoints = required(raw.max_datapoints, "max_datapoints", origin)?;
    let datesupport = required(raw.datesupport, "datesupport", origin)?;
    let entries = required(raw.vistypes, "vistypes", origin)?;

    if let MaxDatapoints::Bounded(max) = max_datapoints
        && max < min_datapoints
    {
        return Err(malformed(
            origin,
            format!("max_datapoints {max} is below min_datapoints {min_datapoints}"),
        ));
    }

    let vistypes = parse_vistypes(&entries, origin)?;

    Ok(ChartSpec {
        title,
        min_datapoints,
        max_datapoints,
        datesupport,
        multiple_data: raw.multiple_data,
        lexical_required: raw.lexical_required,
        vistypes,
    })
}

fn parse_vistypes(entries: &[Map<String, Value>], origin: &str) -> Result<Vec<VisTypeRequirement>> {
    if entries.is_empty() {
        return Err(malformed(origin, "vistypes is empty"));
    }

    let mut requirements = Vec::new();
    for (idx, entry) in entries.iter().enumerate() {
        if entry.is_empty() {
            return Err(malformed(origin, format!("vistypes entry {idx} has no keys")));
        }
        for (name, value) in entry {
            let types = parse_tags(value).map_err(|reason| {
                malformed(origin, format!("vistypes entry '{name}': {reason}"))
            })?;
            requirements.push(VisTypeRequirement {
                name: name.clone(),
                types,
            });
        }
    }
    Ok(requirements)
}

fn parse_tags(value: &Value) -> std::result::Result<TypeSet, String> {
    match value {
        Value::String(name) => parse_tag(name).map(|tag| TypeSet::from([tag])),
        Value::Array(items) if !items.is_empty() => items
            .iter()
            .map(|item| match item {
                Value::String(name) => parse_tag(name),
                other => Err(format!("expected a tag name, found {other}")),
            })
            .collect(),
        Value::Array(_) => Err("tag list is empty".to_string()),
        other => Err(format!("expected a tag name or list of tag names, found {other}")),
    }
}

fn parse_tag(name: &str) -> std::result::Result<TypeTag, String> {
    name.parse::<TypeTag>().map_err(|err| err.to_string())
}

fn required<T>(value: Option<T>, field: &str, origin: &str) -> Result<T> {
    value.ok_or_else(|| malformed(origin, format!("missing required field '{field}'")))
}

fn malformed(origin: &str, reason: impl Into<String>) -> CatalogError {
    CatalogError::MalformedSpec {
        origin: origin.to_string(),
        reason: reason.into(),
    }
}
