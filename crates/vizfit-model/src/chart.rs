//! Declarative chart requirement specifications.
//!
//! A [`ChartSpec`] describes the data shape a chart family can render: how
//! many records it accepts, whether it handles dates, whether the leading
//! column must be ordered, and which type tags each column position needs.

use std::fmt;

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::tags::{TypeSet, TypeTag};

/// Upper bound on the number of records a chart accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaxDatapoints {
    Bounded(usize),
    Unbounded,
}

impl MaxDatapoints {
    /// Sentinel written for [`MaxDatapoints::Unbounded`].
    pub const UNBOUNDED_SENTINEL: &'static str = "inf";

    /// True when `count` records fit under this bound.
    pub fn allows(self, count: usize) -> bool {
        match self {
            MaxDatapoints::Bounded(max) => count <= max,
            MaxDatapoints::Unbounded => true,
        }
    }

    fn is_unbounded_sentinel(value: &str) -> bool {
        matches!(
            value.trim().to_ascii_lowercase().as_str(),
            "inf" | "infinity" | "unbounded"
        )
    }
}

impl fmt::Display for MaxDatapoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaxDatapoints::Bounded(max) => write!(f, "{max}"),
            MaxDatapoints::Unbounded => f.write_str("unbounded"),
        }
    }
}

impl Serialize for MaxDatapoints {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MaxDatapoints::Bounded(max) => serializer.serialize_u64(*max as u64),
            MaxDatapoints::Unbounded => serializer.serialize_str(Self::UNBOUNDED_SENTINEL),
        }
    }
}

impl<'de> Deserialize<'de> for MaxDatapoints {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Count(usize),
            Sentinel(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Count(max) => Ok(MaxDatapoints::Bounded(max)),
            Repr::Sentinel(text) if MaxDatapoints::is_unbounded_sentinel(&text) => {
                Ok(MaxDatapoints::Unbounded)
            }
            Repr::Sentinel(text) => Err(de::Error::custom(format!(
                "expected a record count or \"inf\", found \"{text}\""
            ))),
        }
    }
}

/// Required tags of one column position.
///
/// The name is descriptive only; matching is positional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisTypeRequirement {
    pub name: String,
    pub types: TypeSet,
}

impl VisTypeRequirement {
    pub fn new(name: impl Into<String>, types: impl IntoIterator<Item = TypeTag>) -> Self {
        Self {
            name: name.into(),
            types: types.into_iter().collect(),
        }
    }
}

/// Data shape accepted by one chart family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSpec {
    /// Chart identifier, unique within a catalog.
    pub title: String,
    pub min_datapoints: usize,
    pub max_datapoints: MaxDatapoints,
    /// Whether the chart can render columns tagged `time`.
    pub datesupport: bool,
    /// Whether a trailing run of same-typed columns may repeat the last
    /// required position.
    pub multiple_data: bool,
    /// Whether the leading column must be strictly monotonic.
    pub lexical_required: bool,
    pub vistypes: Vec<VisTypeRequirement>,
}

impl ChartSpec {
    /// Creates a spec accepting one or more records with no optional
    /// capabilities enabled.
    pub fn new(title: impl Into<String>, vistypes: Vec<VisTypeRequirement>) -> Self {
        Self {
            title: title.into(),
            min_datapoints: 1,
            max_datapoints: MaxDatapoints::Unbounded,
            datesupport: false,
            multiple_data: false,
            lexical_required: false,
            vistypes,
        }
    }

    #[must_use]
    pub fn with_datapoints(mut self, min: usize, max: MaxDatapoints) -> Self {
        self.min_datapoints = min;
        self.max_datapoints = max;
        self
    }

    #[must_use]
    pub fn with_datesupport(mut self, enable: bool) -> Self {
        self.datesupport = enable;
        self
    }

    #[must_use]
    pub fn with_multiple_data(mut self, enable: bool) -> Self {
        self.multiple_data = enable;
        self
    }

    #[must_use]
    pub fn with_lexical_required(mut self, enable: bool) -> Self {
        self.lexical_required = enable;
        self
    }

    /// Number of column positions the chart requires.
    pub fn required_length(&self) -> usize {
        self.vistypes.len()
    }

    /// The required tag set of every position, in order.
    pub fn required_types(&self) -> impl Iterator<Item = &TypeSet> + '_ {
        self.vistypes.iter().map(|requirement| &requirement.types)
    }

    /// True when `count` lies within `[min_datapoints, max_datapoints]`.
    pub fn accepts_length(&self, count: usize) -> bool {
        self.min_datapoints <= count && self.max_datapoints.allows(count)
    }
}
