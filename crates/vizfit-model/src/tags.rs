//! Semantic type tags.
//!
//! A single field value may carry several tags at once (`"12.5"` is both a
//! `number` and a `string`), so inference always yields a [`TypeSet`] rather
//! than a single tag.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Semantic classification label of a single field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    Number,
    String,
    Time,
    List,
    Polygon,
    Latitude,
    Longitude,
}

impl TypeTag {
    /// All tags, in their canonical order.
    pub const ALL: [TypeTag; 7] = [
        TypeTag::Number,
        TypeTag::String,
        TypeTag::Time,
        TypeTag::List,
        TypeTag::Polygon,
        TypeTag::Latitude,
        TypeTag::Longitude,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TypeTag::Number => "number",
            TypeTag::String => "string",
            TypeTag::Time => "time",
            TypeTag::List => "list",
            TypeTag::Polygon => "polygon",
            TypeTag::Latitude => "latitude",
            TypeTag::Longitude => "longitude",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a tag name is not one of the known [`TypeTag`]s.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown type tag '{0}'")]
pub struct UnknownTypeTag(pub String);

impl FromStr for TypeTag {
    type Err = UnknownTypeTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        TypeTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == normalized)
            .ok_or_else(|| UnknownTypeTag(s.to_string()))
    }
}

/// Set of tags assigned to one value, or to one column after reduction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeSet(BTreeSet<TypeTag>);

impl TypeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a tag. Returns `false` if it was already present.
    pub fn insert(&mut self, tag: TypeTag) -> bool {
        self.0.insert(tag)
    }

    pub fn contains(&self, tag: TypeTag) -> bool {
        self.0.contains(&tag)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = TypeTag> + '_ {
        self.0.iter().copied()
    }

    /// Tags present in both sets.
    #[must_use]
    pub fn intersection(&self, other: &TypeSet) -> TypeSet {
        TypeSet(self.0.intersection(&other.0).copied().collect())
    }

    /// Narrows `self` in place to the tags it shares with `other`.
    pub fn intersect_with(&mut self, other: &TypeSet) {
        self.0.retain(|tag| other.0.contains(tag));
    }

    /// True when the two sets share at least one tag.
    pub fn intersects(&self, other: &TypeSet) -> bool {
        self.0.iter().any(|tag| other.0.contains(tag))
    }

    pub fn is_subset(&self, other: &TypeSet) -> bool {
        self.0.is_subset(&other.0)
    }
}

impl FromIterator<TypeTag> for TypeSet {
    fn from_iter<I: IntoIterator<Item = TypeTag>>(iter: I) -> Self {
        TypeSet(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[TypeTag; N]> for TypeSet {
    fn from(tags: [TypeTag; N]) -> Self {
        tags.into_iter().collect()
    }
}

impl fmt::Display for TypeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (idx, tag) in self.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            f.write_str(tag.as_str())?;
        }
        f.write_str("}")
    }
}

/// One [`TypeSet`] per field position, each the intersection of that
/// position across every record of a dataset.
///
/// An empty set at a position marks the dataset as inconsistent there.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfiledTypes(Vec<TypeSet>);

impl ProfiledTypes {
    pub fn new(columns: Vec<TypeSet>) -> Self {
        Self(columns)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&TypeSet> {
        self.0.get(position)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TypeSet> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[TypeSet] {
        &self.0
    }

    /// Index of the first column whose set is empty.
    pub fn first_empty_position(&self) -> Option<usize> {
        self.0.iter().position(TypeSet::is_empty)
    }

    /// True when every position still carries at least one tag.
    pub fn is_consistent(&self) -> bool {
        self.first_empty_position().is_none()
    }

    /// True when `tag` survives at any position.
    pub fn any_contains(&self, tag: TypeTag) -> bool {
        self.0.iter().any(|set| set.contains(tag))
    }

    pub fn into_inner(self) -> Vec<TypeSet> {
        self.0
    }
}

impl From<Vec<TypeSet>> for ProfiledTypes {
    fn from(columns: Vec<TypeSet>) -> Self {
        Self(columns)
    }
}

impl<'a> IntoIterator for &'a ProfiledTypes {
    type Item = &'a TypeSet;
    type IntoIter = std::slice::Iter<'a, TypeSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_names_round_trip_through_from_str() {
        for tag in TypeTag::ALL {
            assert_eq!(tag.as_str().parse::<TypeTag>(), Ok(tag));
        }
        assert_eq!(" Number ".parse::<TypeTag>(), Ok(TypeTag::Number));
        assert!("date".parse::<TypeTag>().is_err());
    }

    #[test]
    fn tags_serialize_lowercase() {
        let set = TypeSet::from([TypeTag::String, TypeTag::Number]);
        let json = serde_json::to_string(&set).expect("serialize set");
        assert_eq!(json, r#"["number","string"]"#);
    }

    #[test]
    fn intersection_keeps_shared_tags() {
        let a = TypeSet::from([TypeTag::Number, TypeTag::String, TypeTag::Latitude]);
        let b = TypeSet::from([TypeTag::String, TypeTag::Latitude, TypeTag::Time]);
        let shared = a.intersection(&b);
        assert_eq!(shared, TypeSet::from([TypeTag::String, TypeTag::Latitude]));
        assert!(a.intersects(&b));

        let mut narrowed = a.clone();
        narrowed.intersect_with(&TypeSet::from([TypeTag::Time]));
        assert!(narrowed.is_empty());
    }

    #[test]
    fn display_lists_tags_in_canonical_order() {
        let set = TypeSet::from([TypeTag::Longitude, TypeTag::Number]);
        assert_eq!(set.to_string(), "{number, longitude}");
        assert_eq!(TypeSet::new().to_string(), "{}");
    }

    #[test]
    fn profiled_types_reports_first_empty_column() {
        let profiled = ProfiledTypes::new(vec![
            TypeSet::from([TypeTag::Number]),
            TypeSet::new(),
            TypeSet::new(),
        ]);
        assert_eq!(profiled.first_empty_position(), Some(1));
        assert!(!profiled.is_consistent());
        assert!(ProfiledTypes::default().is_consistent());
    }
}
