//! Chart compatibility matching.
//!
//! This crate provides:
//!
//! - **Matching** of profiled datasets against a [`ChartCatalog`](vizfit_catalog::ChartCatalog)
//! - **Rejection reasons** explaining why a chart was excluded
//! - **The classification pipeline** from raw records to a [`Classification`](vizfit_model::Classification)
//!
//! # Example
//!
//! ```rust,ignore
//! use vizfit_catalog::default_catalog;
//! use vizfit_ingest::{MergeMode, read_path};
//! use vizfit_match::classify_records;
//!
//! let raw = read_path("sales.csv".as_ref())?;
//! let result = classify_records(raw, MergeMode::default(), default_catalog())?;
//! println!("compatible: {:?}", result.charts);
//! ```

pub mod error;
pub mod matcher;
pub mod pipeline;
pub mod rejection;

pub use error::{ClassifyError, Result};
pub use matcher::{
    ChartVerdict, evaluate_chart, explain, first_unmet_requirement, is_repeat_group_consistent,
    match_charts,
};
pub use pipeline::{
    analyze, classify_dataset, classify_records, explain_classification, explain_dataset,
};
pub use rejection::Rejection;
