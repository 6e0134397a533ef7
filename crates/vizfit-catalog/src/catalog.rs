//! The chart catalog and its process-wide instances.
//!
//! # Thread Safety
//!
//! [`ChartCatalog`] is immutable once built and can be shared across
//! threads. The embedded default and the installed global catalog are each
//! built at most once behind a [`OnceLock`].

use std::collections::HashSet;
use std::sync::OnceLock;

use tracing::info;
use vizfit_model::ChartSpec;

use crate::error::{CatalogError, Result};
use crate::source::{CatalogSource, EmbeddedCatalog};

/// Ordered, read-only collection of chart specs with unique titles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartCatalog {
    specs: Vec<ChartSpec>,
}

impl ChartCatalog {
    /// Builds a catalog from specs, keeping their order.
    ///
    /// `origin` is used in error messages.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateTitle`] if two specs share a title and
    /// [`CatalogError::MalformedSpec`] if a spec has no title or no
    /// `vistypes`.
    pub fn new(specs: Vec<ChartSpec>, origin: &str) -> Result<Self> {
        let mut seen = HashSet::new();
        for spec in &specs {
            if spec.title.trim().is_empty() {
                return Err(CatalogError::MalformedSpec {
                    origin: origin.to_string(),
                    reason: "title is empty".to_string(),
                });
            }
            if spec.vistypes.is_empty() {
                return Err(CatalogError::MalformedSpec {
                    origin: origin.to_string(),
                    reason: format!("chart '{}' has no vistypes", spec.title),
                });
            }
            if !seen.insert(spec.title.as_str()) {
                return Err(CatalogError::DuplicateTitle {
                    title: spec.title.clone(),
                    origin: origin.to_string(),
                });
            }
        }
        Ok(Self { specs })
    }

    /// Loads and validates every spec of `source`.
    ///
    /// # Errors
    ///
    /// Propagates source errors and the validation errors of [`ChartCatalog::new`].
    pub fn load(source: &dyn CatalogSource) -> Result<Self> {
        let origin = source.describe();
        let catalog = Self::new(source.load()?, &origin)?;
        info!(source = %origin, charts = catalog.len(), "Loaded chart catalog");
        Ok(catalog)
    }

    pub fn specs(&self) -> &[ChartSpec] {
        &self.specs
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ChartSpec> {
        self.specs.iter()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Looks up a spec by title.
    pub fn get(&self, title: &str) -> Option<&ChartSpec> {
        self.specs.iter().find(|spec| spec.title == title)
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> + '_ {
        self.specs.iter().map(|spec| spec.title.as_str())
    }
}

impl<'a> IntoIterator for &'a ChartCatalog {
    type Item = &'a ChartSpec;
    type IntoIter = std::slice::Iter<'a, ChartSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.specs.iter()
    }
}

static DEFAULT_CATALOG: OnceLock<ChartCatalog> = OnceLock::new();
static GLOBAL_CATALOG: OnceLock<ChartCatalog> = OnceLock::new();

/// Returns the catalog built from the embedded chart specs.
///
/// Built on first access.
///
/// # Panics
///
/// Panics if the bundled spec files are invalid, which the crate's tests
/// rule out.
pub fn default_catalog() -> &'static ChartCatalog {
    DEFAULT_CATALOG.get_or_init(|| {
        ChartCatalog::load(&EmbeddedCatalog).expect("Invalid embedded chart catalog")
    })
}

/// Installs the process-wide catalog from `source`.
///
/// # Errors
///
/// Returns [`CatalogError::AlreadyInitialized`] if a global catalog was
/// already installed, or the error of loading `source`.
pub fn init_global_catalog(source: &dyn CatalogSource) -> Result<&'static ChartCatalog> {
    if GLOBAL_CATALOG.get().is_some() {
        return Err(CatalogError::AlreadyInitialized);
    }
    let catalog = ChartCatalog::load(source)?;

    let mut installed = false;
    let global = GLOBAL_CATALOG.get_or_init(|| {
        installed = true;
        catalog
    });
    if installed {
        Ok(global)
    } else {
        Err(CatalogError::AlreadyInitialized)
    }
}

/// Returns the installed global catalog, or the embedded default if none
/// was installed.
pub fn global_catalog() -> &'static ChartCatalog {
    GLOBAL_CATALOG.get().unwrap_or_else(default_catalog)
}
