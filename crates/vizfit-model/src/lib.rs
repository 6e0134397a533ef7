//! Shared data model for dataset profiling and chart matching.
//!
//! # Module Organization
//!
//! - [`tags`]: Semantic type tags and the set types built from them
//! - [`dataset`]: Records and normalized datasets
//! - [`chart`]: Declarative chart requirement specifications
//! - [`classification`]: Dataset metadata and the pipeline result

pub mod chart;
pub mod classification;
pub mod dataset;
pub mod tags;

pub use chart::{ChartSpec, MaxDatapoints, VisTypeRequirement};
pub use classification::{Classification, DatasetProperties};
pub use dataset::{Dataset, Record};
pub use tags::{ProfiledTypes, TypeSet, TypeTag, UnknownTypeTag};
