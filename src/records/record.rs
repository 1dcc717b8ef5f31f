//! Cube records.
//!
//! `CubeRecord` preserves the key order of its source object: stat lines and
//! the search text both follow it. Keys are kept in a list, values in a hash
//! lookup.

use std::borrow::Cow;
use std::fmt;

use rustc_hash::FxHashMap;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::attributes::{AttributeKey, AttributeValue, MetaKey};

/// One catalog entry.
///
/// ## Example
///
/// ```
/// use cube_catalog::records::{CubeRecord, MetaKey};
///
/// let cube = CubeRecord::new()
///     .with_attr("Nom", "Cube")
///     .with_attr("Element", "Feu")
///     .with_attr("Force", "12");
///
/// assert_eq!(cube.meta_text(MetaKey::Element).as_deref(), Some("Feu"));
/// assert_eq!(cube.stats().count(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CubeRecord {
    keys: Vec<AttributeKey>,
    values: FxHashMap<AttributeKey, AttributeValue>,
}

impl CubeRecord {
    /// Create an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an attribute (builder pattern).
    #[must_use]
    pub fn with_attr(
        mut self,
        key: impl Into<AttributeKey>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert an attribute.
    ///
    /// A key that already exists keeps its position and takes the new value.
    pub fn insert(&mut self, key: impl Into<AttributeKey>, value: impl Into<AttributeValue>) {
        let key = key.into();
        if !self.values.contains_key(&key) {
            self.keys.push(key.clone());
        }
        self.values.insert(key, value.into());
    }

    /// Get an attribute value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.values.get(key)
    }

    /// Get a meta attribute value.
    #[must_use]
    pub fn meta(&self, key: MetaKey) -> Option<&AttributeValue> {
        self.get(key.as_str())
    }

    /// Get the string form of a meta attribute, if it is present.
    ///
    /// Empty, null, `false` and zero values count as absent.
    #[must_use]
    pub fn meta_text(&self, key: MetaKey) -> Option<Cow<'_, str>> {
        self.meta(key)
            .filter(|v| v.is_truthy())
            .map(AttributeValue::to_text)
    }

    /// Number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Check if the record has no attribute.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterate over attributes in source order.
    pub fn iter(&self) -> impl Iterator<Item = (&AttributeKey, &AttributeValue)> {
        self.keys
            .iter()
            .filter_map(move |key| self.values.get(key).map(|value| (key, value)))
    }

    /// Iterate over values in source order.
    pub fn values(&self) -> impl Iterator<Item = &AttributeValue> {
        self.iter().map(|(_, value)| value)
    }

    /// Iterate over stat attributes (everything but the meta keys) in source order.
    pub fn stats(&self) -> impl Iterator<Item = (&AttributeKey, &AttributeValue)> {
        self.iter().filter(|(key, _)| !MetaKey::is_meta(key.as_str()))
    }

    /// String forms of every value joined with single spaces, in source order.
    #[must_use]
    pub fn joined_values(&self) -> String {
        let mut joined = String::new();
        for (i, value) in self.values().enumerate() {
            if i > 0 {
                joined.push(' ');
            }
            joined.push_str(&value.to_text());
        }
        joined
    }
}

impl<K, V> FromIterator<(K, V)> for CubeRecord
where
    K: Into<AttributeKey>,
    V: Into<AttributeValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = CubeRecord::new();
        for (key, value) in iter {
            record.insert(key, value);
        }
        record
    }
}

impl Serialize for CubeRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key.as_str(), value)?;
        }
        map.end()
    }
}

struct RecordVisitor;

impl<'de> Visitor<'de> for RecordVisitor {
    type Value = CubeRecord;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a cube record object")
    }

    fn visit_map<A>(self, mut map: A) -> Result<CubeRecord, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut record = CubeRecord::new();
        while let Some((key, value)) = map.next_entry::<String, AttributeValue>()? {
            record.insert(key, value);
        }
        Ok(record)
    }
}

impl<'de> Deserialize<'de> for CubeRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(RecordVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CubeRecord {
        CubeRecord::new()
            .with_attr("Nom", "Cube")
            .with_attr("Stat1", "0")
            .with_attr("Element", "Feu")
            .with_attr("Stat2", "")
            .with_attr("Stat3", "5")
    }

    #[test]
    fn test_preserves_insertion_order() {
        let keys: Vec<_> = sample().iter().map(|(k, _)| k.as_str().to_string()).collect();
        assert_eq!(keys, ["Nom", "Stat1", "Element", "Stat2", "Stat3"]);
    }

    #[test]
    fn test_duplicate_key_keeps_position() {
        let mut cube = sample();
        cube.insert("Nom", "Autre");

        assert_eq!(cube.len(), 5);
        assert_eq!(cube.iter().next().unwrap().1, &AttributeValue::from("Autre"));
    }

    #[test]
    fn test_stats_skip_meta() {
        let stats: Vec<_> = sample().stats().map(|(k, _)| k.as_str().to_string()).collect();
        assert_eq!(stats, ["Stat1", "Stat2", "Stat3"]);
    }

    #[test]
    fn test_meta_text() {
        let cube = sample().with_attr("Numero", 0i32);

        assert_eq!(cube.meta_text(MetaKey::Nom).as_deref(), Some("Cube"));
        assert_eq!(cube.meta_text(MetaKey::Rang), None);
        assert_eq!(cube.meta_text(MetaKey::Numero), None);
    }

    #[test]
    fn test_joined_values() {
        assert_eq!(sample().joined_values(), "Cube 0 Feu  5");
        assert_eq!(CubeRecord::new().joined_values(), "");
    }

    #[test]
    fn test_json_key_order() {
        let json = r#"{"Zeta": "1", "Nom": "A", "Alpha": 2, "Element": "Eau"}"#;
        let cube: CubeRecord = serde_json::from_str(json).unwrap();

        let keys: Vec<_> = cube.iter().map(|(k, _)| k.as_str().to_string()).collect();
        assert_eq!(keys, ["Zeta", "Nom", "Alpha", "Element"]);
        assert_eq!(cube.get("Alpha"), Some(&AttributeValue::Int(2)));

        let back = serde_json::to_string(&cube).unwrap();
        assert_eq!(back, r#"{"Zeta":"1","Nom":"A","Alpha":2,"Element":"Eau"}"#);
    }

    #[test]
    fn test_from_iterator() {
        let cube: CubeRecord = [("Nom", "A"), ("Rang", "Rare")].into_iter().collect();
        assert_eq!(cube.meta_text(MetaKey::Rang).as_deref(), Some("Rare"));
    }
}
