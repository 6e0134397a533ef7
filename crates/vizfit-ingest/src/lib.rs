//! Record ingestion and normalization.
//!
//! Raw records come from [`reader`] (JSON, GeoJSON or CSV, as files or inline
//! text) or straight from a caller, and [`normalize`] reconciles them into a
//! [`Dataset`] with one ordered field schema.
//!
//! [`Dataset`]: vizfit_model::Dataset

pub mod error;
pub mod keyset;
pub mod normalize;
pub mod reader;
pub mod shared;

pub use error::{EmptyInputReason, IngestError, Result};
pub use keyset::{KeysetCount, count_keysets, keyset_of, select_majority_keyset};
pub use normalize::{MergeMode, normalize};
pub use reader::{
    InputFormat, MAX_INPUT_FILE_SIZE, check_file_size, read_csv_str, read_json_str, read_path,
    read_source, read_str,
};
pub use shared::{project, shared_keys};
