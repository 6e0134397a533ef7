//! Keyset counting and majority selection.
//!
//! A keyset is the ordered list of field names of one record, so `(x, y)` and
//! `(y, x)` are different keysets.

use std::collections::HashSet;

use vizfit_model::Record;

/// One distinct keyset and how many records carry it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeysetCount {
    pub keys: Vec<String>,
    pub count: usize,
}

impl KeysetCount {
    /// True when `record` has exactly these keys in this order.
    pub fn matches(&self, record: &Record) -> bool {
        record.len() == self.keys.len() && record.keys().zip(&self.keys).all(|(a, b)| a == b)
    }

    /// True when every key of `self` appears in `other` and `other` has
    /// more keys. Key order is ignored.
    pub fn is_strict_subset_of(&self, other: &KeysetCount) -> bool {
        let theirs: HashSet<&str> = other.keys.iter().map(String::as_str).collect();
        let ours: HashSet<&str> = self.keys.iter().map(String::as_str).collect();
        ours.len() < theirs.len() && ours.is_subset(&theirs)
    }
}

/// Ordered field names of a record.
pub fn keyset_of(record: &Record) -> Vec<String> {
    record.keys().cloned().collect()
}

/// Counts each distinct keyset, in first-seen order.
pub fn count_keysets(records: &[Record]) -> Vec<KeysetCount> {
    let mut counts: Vec<KeysetCount> = Vec::new();
    for record in records {
        match counts.iter_mut().find(|entry| entry.matches(record)) {
            Some(entry) => entry.count += 1,
            None => counts.push(KeysetCount {
                keys: keyset_of(record),
                count: 1,
            }),
        }
    }
    counts
}

/// Picks the keyset records are normalized to.
///
/// The highest count wins and ties go to the first-seen keyset. Among
/// keysets tied at that count, a keyset that is a strict subset of the
/// current winner replaces it, so the smallest nested keyset wins.
pub fn select_majority_keyset(counts: &[KeysetCount]) -> Option<&KeysetCount> {
    let max = counts.iter().map(|entry| entry.count).max()?;
    let mut tied = counts.iter().filter(|entry| entry.count == max);
    let mut winner = tied.next()?;
    for candidate in tied {
        if candidate.is_strict_subset_of(winner) {
            winner = candidate;
        }
    }
    Some(winner)
}
