//! Shared-key merging.

use std::collections::HashSet;

use vizfit_model::Record;

/// Field names present in every record, in the first record's order.
pub fn shared_keys(records: &[Record]) -> Vec<String> {
    let Some((first, rest)) = records.split_first() else {
        return Vec::new();
    };
    first
        .keys()
        .filter(|key| rest.iter().all(|record| record.contains_key(key.as_str())))
        .cloned()
        .collect()
}

/// Keeps only the fields named in `keys`, preserving the record's own
/// key order.
pub fn project(record: Record, keys: &[String]) -> Record {
    let wanted: HashSet<&str> = keys.iter().map(String::as_str).collect();
    record
        .into_iter()
        .filter(|(key, _)| wanted.contains(key.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> Record {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn shared_keys_intersects_all_records() {
        let records = vec![
            record(json!({"a": 1, "b": 2, "c": 3})),
            record(json!({"c": 1, "a": 2})),
            record(json!({"a": 1, "d": 4, "c": 0})),
        ];
        assert_eq!(shared_keys(&records), vec!["a".to_string(), "c".to_string()]);
    }

    #[test]
    fn shared_keys_of_disjoint_records_is_empty() {
        let records = vec![record(json!({"a": 1})), record(json!({"b": 2}))];
        assert!(shared_keys(&records).is_empty());
        assert!(shared_keys(&[]).is_empty());
    }

    #[test]
    fn project_keeps_record_key_order() {
        let projected = project(
            record(json!({"c": 1, "x": 9, "a": 2})),
            &["a".to_string(), "c".to_string()],
        );
        let keys: Vec<_> = projected.keys().map(String::as_str).collect();
        assert_eq!(keys, ["c", "a"]);
    }
}
