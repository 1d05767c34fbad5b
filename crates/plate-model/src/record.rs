#![deny(unsafe_code)]

use std::fmt;

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

/// Record key reserved for template entries that never reach training.
pub const SAMPLE_KEY: &str = "sample";

/// One hand-authored plate description entry.
///
/// `key` is the plate label the description trains towards. Unknown fields are
/// rejected so that authoring mistakes surface at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawRecord {
    pub key: String,
    pub version: String,
    pub weight: f64,
    pub description: Description,
}

impl RawRecord {
    pub fn new(
        key: impl Into<String>,
        version: impl Into<String>,
        weight: f64,
        description: Description,
    ) -> Self {
        Self {
            key: key.into(),
            version: version.into(),
            weight,
            description,
        }
    }

    /// True for the reserved `"sample"` sentinel.
    pub fn is_sample(&self) -> bool {
        self.key == SAMPLE_KEY
    }
}

/// Value of a single description attribute.
///
/// Only text values take part in augmentation. Anything else found in the
/// source document (numbers, booleans, nulls, arrays, objects) collapses to
/// [`DescriptionValue::Other`] when the record is parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptionValue {
    Text(String),
    Other,
}

impl DescriptionValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Other => None,
        }
    }
}

impl From<&str> for DescriptionValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for DescriptionValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl Serialize for DescriptionValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(text) => serializer.serialize_str(text),
            Self::Other => serializer.serialize_unit(),
        }
    }
}

impl<'de> Deserialize<'de> for DescriptionValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DescriptionValueVisitor)
    }
}

struct DescriptionValueVisitor;

impl<'de> Visitor<'de> for DescriptionValueVisitor {
    type Value = DescriptionValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a description value")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(DescriptionValue::Text(value.to_string()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
        Ok(DescriptionValue::Text(value))
    }

    fn visit_bool<E: de::Error>(self, _value: bool) -> Result<Self::Value, E> {
        Ok(DescriptionValue::Other)
    }

    fn visit_i64<E: de::Error>(self, _value: i64) -> Result<Self::Value, E> {
        Ok(DescriptionValue::Other)
    }

    fn visit_u64<E: de::Error>(self, _value: u64) -> Result<Self::Value, E> {
        Ok(DescriptionValue::Other)
    }

    fn visit_f64<E: de::Error>(self, _value: f64) -> Result<Self::Value, E> {
        Ok(DescriptionValue::Other)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(DescriptionValue::Other)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(DescriptionValue::Other)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(DescriptionValue::Other)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(DescriptionValue::Other)
    }
}

/// Attribute name to value mapping that keeps insertion order.
///
/// Re-inserting an existing attribute replaces its value in place, so the
/// attribute keeps the position of its first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Description {
    entries: Vec<(String, DescriptionValue)>,
}

impl Description {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: DescriptionValue) {
        let name = name.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&DescriptionValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DescriptionValue)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, DescriptionValue)> for Description {
    fn from_iter<I: IntoIterator<Item = (K, DescriptionValue)>>(iter: I) -> Self {
        let mut description = Self::new();
        for (name, value) in iter {
            description.insert(name, value);
        }
        description
    }
}

impl Serialize for Description {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Description {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(DescriptionVisitor)
    }
}

struct DescriptionVisitor;

impl<'de> Visitor<'de> for DescriptionVisitor {
    type Value = Description;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of attribute names to values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut description = Description::new();
        while let Some((name, value)) = map.next_entry::<String, DescriptionValue>()? {
            description.insert(name, value);
        }
        Ok(description)
    }
}
