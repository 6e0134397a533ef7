//! Catalog sources.
//!
//! A [`CatalogSource`] produces the ordered list of chart specs a
//! [`ChartCatalog`](crate::ChartCatalog) is built from. Tests and embedding
//! hosts use [`StaticCatalog`] to supply synthetic specs without touching the
//! filesystem.

use std::path::{Path, PathBuf};

use tracing::debug;
use vizfit_model::ChartSpec;

use crate::embedded::EMBEDDED_CHARTS;
use crate::error::{CatalogError, Result};
use crate::spec_file::parse_chart_spec;

/// Something a chart catalog can be loaded from.
pub trait CatalogSource: Send + Sync {
    /// Short human-readable description, used in logs and errors.
    fn describe(&self) -> String;

    /// Loads every spec, in catalog order.
    ///
    /// # Errors
    ///
    /// Returns an error if a spec cannot be read or fails validation.
    fn load(&self) -> Result<Vec<ChartSpec>>;
}

/// The bundled default charts.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedCatalog;

impl CatalogSource for EmbeddedCatalog {
    fn describe(&self) -> String {
        "embedded catalog".to_string()
    }

    fn load(&self) -> Result<Vec<ChartSpec>> {
        EMBEDDED_CHARTS
            .iter()
            .map(|(name, text)| parse_chart_spec(text, &format!("embedded:{name}")))
            .collect()
    }
}

/// Every `*.json` file of a directory, in file-name order.
#[derive(Debug, Clone)]
pub struct DirectoryCatalog {
    root: PathBuf,
}

impl DirectoryCatalog {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn spec_files(&self) -> Result<Vec<PathBuf>> {
        if !self.root.is_dir() {
            return Err(CatalogError::DirectoryNotFound {
                path: self.root.clone(),
            });
        }
        let entries = std::fs::read_dir(&self.root).map_err(|source| CatalogError::FileRead {
            path: self.root.clone(),
            source,
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| CatalogError::FileRead {
                path: self.root.clone(),
                source,
            })?;
            let path = entry.path();
            let is_json = path
                .extension()
                .and_then(std::ffi::OsStr::to_str)
                .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
            if is_json && path.is_file() {
                files.push(path);
            }
        }
        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(files)
    }
}

impl CatalogSource for DirectoryCatalog {
    fn describe(&self) -> String {
        format!("directory {}", self.root.display())
    }

    fn load(&self) -> Result<Vec<ChartSpec>> {
        let files = self.spec_files()?;
        debug!(root = %self.root.display(), files = files.len(), "Reading chart spec files");

        files
            .iter()
            .map(|path| {
                let text = std::fs::read_to_string(path).map_err(|source| {
                    CatalogError::FileRead {
                        path: path.clone(),
                        source,
                    }
                })?;
                parse_chart_spec(&text, &path.display().to_string())
            })
            .collect()
    }
}

/// In-memory specs, returned as given.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    specs: Vec<ChartSpec>,
}

impl StaticCatalog {
    pub fn new(specs: Vec<ChartSpec>) -> Self {
        Self { specs }
    }
}

impl CatalogSource for StaticCatalog {
    fn describe(&self) -> String {
        format!("static catalog ({} charts)", self.specs.len())
    }

    fn load(&self) -> Result<Vec<ChartSpec>> {
        Ok(self.specs.clone())
    }
}
