//! Record normalization.
//!
//! Turns heterogeneous raw records into a [`Dataset`] whose records all share
//! one ordered field schema.

use tracing::debug;
use vizfit_model::{Dataset, Record};

use crate::error::{EmptyInputReason, IngestError, Result};
use crate::keyset::{count_keysets, select_majority_keyset};
use crate::shared::{project, shared_keys};

/// How records with differing fields are reconciled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MergeMode {
    /// Keep only the records carrying the most common keyset.
    #[default]
    MajorityKeyset,
    /// Keep every record, projected onto the fields all records share.
    SharedKeys,
}

/// Normalizes raw records into a dataset with a single field schema.
///
/// In [`MergeMode::SharedKeys`] a set of records with no common field yields
/// an empty dataset; callers decide whether that is an error.
///
/// # Errors
///
/// Returns [`IngestError::EmptyInput`] when `raw` is empty, or when the
/// majority keyset is the empty keyset.
pub fn normalize(raw: Vec<Record>, mode: MergeMode) -> Result<Dataset> {
    if raw.is_empty() {
        return Err(IngestError::empty(EmptyInputReason::NoRecords));
    }
    match mode {
        MergeMode::MajorityKeyset => normalize_majority(raw),
        MergeMode::SharedKeys => Ok(normalize_shared(raw)),
    }
}

fn normalize_majority(raw: Vec<Record>) -> Result<Dataset> {
    let counts = count_keysets(&raw);
    let winner = select_majority_keyset(&counts)
        .ok_or(IngestError::empty(EmptyInputReason::NoRecords))?;
    if winner.keys.is_empty() {
        return Err(IngestError::empty(EmptyInputReason::EmptyKeyset));
    }

    let total = raw.len();
    let dataset: Dataset = raw
        .into_iter()
        .filter(|record| winner.matches(record))
        .collect();
    debug!(
        keyset = ?winner.keys,
        kept = dataset.len(),
        discarded = total - dataset.len(),
        distinct_keysets = counts.len(),
        "Selected majority keyset"
    );
    Ok(dataset)
}

fn normalize_shared(raw: Vec<Record>) -> Dataset {
    let keys = shared_keys(&raw);
    if keys.is_empty() {
        debug!(records = raw.len(), "Records share no fields");
        return Dataset::default();
    }
    debug!(keys = ?keys, records = raw.len(), "Projecting records onto shared keys");
    raw.into_iter().map(|record| project(record, &keys)).collect()
}
