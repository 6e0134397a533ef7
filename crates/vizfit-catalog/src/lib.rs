//! Chart specification catalog.
//!
//! This crate provides:
//!
//! - **Spec validation** for the on-disk chart spec format
//! - **An embedded default catalog** of bundled chart families
//! - **Pluggable sources** ([`EmbeddedCatalog`], [`DirectoryCatalog`], [`StaticCatalog`])
//! - **One-time global initialization** of the process-wide catalog
//!
//! # Example
//!
//! ```rust,ignore
//! use vizfit_catalog::{DirectoryCatalog, global_catalog, init_global_catalog};
//!
//! init_global_catalog(&DirectoryCatalog::new("charts"))?;
//! for spec in global_catalog() {
//!     println!("{} needs {} columns", spec.title, spec.required_length());
//! }
//! ```

pub mod catalog;
pub mod embedded;
pub mod error;
pub mod paths;
pub mod source;
pub mod spec_file;

pub use catalog::{ChartCatalog, default_catalog, global_catalog, init_global_catalog};
pub use error::{CatalogError, Result};
pub use paths::{CATALOG_ENV_VAR, catalog_dir_from_env};
pub use source::{CatalogSource, DirectoryCatalog, EmbeddedCatalog, StaticCatalog};
pub use spec_file::parse_chart_spec;
