//! Semantic type profiling of normalized datasets.
//!
//! # Module Organization
//!
//! - [`value`]: Tag inference for a single raw value
//! - [`datetime`]: ISO 8601 recognition
//! - [`profile`]: Per-record classification and per-column reduction
//! - [`order`]: Leading-column monotonicity
//! - [`properties`]: Metadata handed to chart matching

pub mod datetime;
pub mod error;
pub mod order;
pub mod profile;
pub mod properties;
pub mod value;

pub use datetime::is_iso8601;
pub use error::{ProfileError, Result};
pub use order::{compare_values, is_lexicographic, is_strictly_ascending, is_strictly_descending};
pub use profile::{check_consistency, classify, has_date, is_dataset_consistent, profile};
pub use properties::dataset_properties;
pub use value::{classify_value, is_latitude, is_longitude, is_polygon, parse_float};
