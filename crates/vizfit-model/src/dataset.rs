//! Records and datasets.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Ordered mapping of field name to raw value.
///
/// Field order is significant: matching against chart requirements is
/// positional, so the insertion order of the source document is kept.
pub type Record = serde_json::Map<String, Value>;

/// Ordered sequence of records.
///
/// After normalization every record has the same ordered field names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn first(&self) -> Option<&Record> {
        self.records.first()
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Field names of the first record, in order.
    pub fn field_names(&self) -> Vec<&str> {
        self.records
            .first()
            .map(|record| record.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Number of fields in the first record.
    pub fn field_count(&self) -> usize {
        self.records.first().map_or(0, serde_json::Map::len)
    }

    /// Values of the leading field of every record.
    ///
    /// Yields `None` for a record with no fields.
    pub fn first_column(&self) -> impl Iterator<Item = Option<&Value>> + '_ {
        self.records
            .iter()
            .map(|record| record.values().next())
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

impl From<Vec<Record>> for Dataset {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<Record> for Dataset {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
