//! Mixed-value sentinel
//!
//! Design tools report "mixed" when the children of a node disagree on an
//! attribute (a text run with two font sizes, a frame with per-corner radii).
//! [`MixedValue`] keeps that state explicit so extractors can never mistake it
//! for a real value.
//!
//! JSON encoding: a concrete value is written as-is, the sentinel is the string
//! `"__mixed__"`, and a missing or `null` attribute is [`MixedValue::Absent`].

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Wire representation of the mixed sentinel
pub const MIXED_SENTINEL: &str = "__mixed__";

/// A host attribute that is concrete, mixed, or not set at all
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MixedValue<T> {
    Concrete(T),
    Mixed,
    #[default]
    Absent,
}

impl<T> MixedValue<T> {
    /// Concrete value, if any. Mixed and Absent both yield `None`.
    pub fn concrete(&self) -> Option<&T> {
        match self {
            MixedValue::Concrete(value) => Some(value),
            MixedValue::Mixed | MixedValue::Absent => None,
        }
    }

    pub fn into_concrete(self) -> Option<T> {
        match self {
            MixedValue::Concrete(value) => Some(value),
            MixedValue::Mixed | MixedValue::Absent => None,
        }
    }

    pub fn is_concrete(&self) -> bool {
        matches!(self, MixedValue::Concrete(_))
    }

    pub fn is_mixed(&self) -> bool {
        matches!(self, MixedValue::Mixed)
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, MixedValue::Absent)
    }

    pub fn as_ref(&self) -> MixedValue<&T> {
        match self {
            MixedValue::Concrete(value) => MixedValue::Concrete(value),
            MixedValue::Mixed => MixedValue::Mixed,
            MixedValue::Absent => MixedValue::Absent,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> MixedValue<U> {
        match self {
            MixedValue::Concrete(value) => MixedValue::Concrete(f(value)),
            MixedValue::Mixed => MixedValue::Mixed,
            MixedValue::Absent => MixedValue::Absent,
        }
    }
}

impl<T: Copy> MixedValue<T> {
    /// Copy out the concrete value
    pub fn get(&self) -> Option<T> {
        self.concrete().copied()
    }
}

impl<T> From<T> for MixedValue<T> {
    fn from(value: T) -> Self {
        MixedValue::Concrete(value)
    }
}

impl<T: Serialize> Serialize for MixedValue<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MixedValue::Concrete(value) => value.serialize(serializer),
            MixedValue::Mixed => serializer.serialize_str(MIXED_SENTINEL),
            MixedValue::Absent => serializer.serialize_none(),
        }
    }
}

/// Accepts exactly the sentinel string
struct MixedMarker;

impl<'de> Deserialize<'de> for MixedMarker {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        if text == MIXED_SENTINEL {
            Ok(MixedMarker)
        } else {
            Err(D::Error::custom("not the mixed sentinel"))
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MixedRepr<T> {
    Mixed(MixedMarker),
    Value(Option<T>),
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for MixedValue<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match MixedRepr::<T>::deserialize(deserializer)? {
            MixedRepr::Mixed(_) => MixedValue::Mixed,
            MixedRepr::Value(Some(value)) => MixedValue::Concrete(value),
            MixedRepr::Value(None) => MixedValue::Absent,
        })
    }
}
