//! Insertion-ordered map keyed by [`Key`]

use crate::error::{MapError, Result};
use crate::key::Key;
use crate::value::Value;
use ahash::AHashMap;
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Ordered mapping from [`Key`] to [`Value`].
///
/// - Iteration follows insertion order.
/// - Overwriting an existing key keeps its position.
/// - Removing a key keeps the order of the remaining entries.
/// - [`Map::push`] appends under one past the largest integer key ever
///   inserted (or 0), so a map built only by pushing is a list.
/// - Every key passes through [`Key::normalize`], so `Key::Str("1")` and
///   `Key::Int(1)` address the same entry.
#[derive(Clone)]
pub struct Map {
    /// Entries in insertion order
    entries: Vec<(Key, Value)>,
    /// Position of each key in `entries`
    index: AHashMap<Key, usize>,
    /// Next key used by `push`; `None` once `i64::MAX` has been used
    next_index: Option<i64>,
}

impl Default for Map {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl Map {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty map with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: AHashMap::with_capacity(capacity),
            next_index: Some(0),
        }
    }

    /// Build a list: values keyed `0..n` in order.
    pub fn from_list<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        values
            .into_iter()
            .enumerate()
            .map(|(position, value)| (Key::Int(position as i64), value))
            .collect()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, key: impl Into<Key>) -> Option<usize> {
        self.index.get(&key.into().normalize()).copied()
    }

    /// Whether `key` exists, regardless of its value.
    pub fn contains_key(&self, key: impl Into<Key>) -> bool {
        self.position(key).is_some()
    }

    /// Value stored under `key`.
    pub fn get(&self, key: impl Into<Key>) -> Option<&Value> {
        self.position(key).map(|pos| &self.entries[pos].1)
    }

    /// Mutable value stored under `key`.
    pub fn get_mut(&mut self, key: impl Into<Key>) -> Option<&mut Value> {
        let pos = self.position(key)?;
        Some(&mut self.entries[pos].1)
    }

    /// Insert `value` under `key`, returning the previous value.
    ///
    /// A new key is appended; an existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into().normalize();
        let value = value.into();

        if let Some(pos) = self.position(&key) {
            return Some(std::mem::replace(&mut self.entries[pos].1, value));
        }

        if let (Key::Int(i), Some(next)) = (&key, self.next_index) {
            if *i >= next {
                self.next_index = i.checked_add(1);
            }
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        None
    }

    /// Append `value` under the next free integer key and return that key.
    ///
    /// # Errors
    ///
    /// `Conflict` once an entry has been stored under `i64::MAX`, since no
    /// larger integer key is left. The map is left untouched.
    pub fn push(&mut self, value: impl Into<Value>) -> Result<Key> {
        let next = self.next_index.ok_or_else(|| {
            MapError::Conflict(
                "cannot push: the next integer key is already occupied".to_string(),
            )
        })?;
        let key = Key::Int(next);
        self.insert(key.clone(), value);
        Ok(key)
    }

    /// Remove `key`, keeping the order of the remaining entries.
    pub fn remove(&mut self, key: impl Into<Key>) -> Option<Value> {
        let pos = self.index.remove(&key.into().normalize())?;
        let (_, value) = self.entries.remove(pos);

        for (moved, _) in &self.entries[pos..] {
            if let Some(slot) = self.index.get_mut(moved) {
                *slot -= 1;
            }
        }

        Some(value)
    }

    /// Iterate over entries in order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&Key, &Value)> + ExactSizeIterator {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    /// Iterate over entries in order with mutable values.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&Key, &mut Value)> {
        self.entries.iter_mut().map(|(k, v)| (&*k, v))
    }

    /// Iterate over keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.entries.iter().map(|(k, _)| k)
    }

    /// Iterate over values in order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Iterate over mutable values in order.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut Value> {
        self.entries.iter_mut().map(|(_, v)| v)
    }

    /// Consume the map, yielding values in order.
    pub fn into_values(self) -> impl Iterator<Item = Value> {
        self.entries.into_iter().map(|(_, v)| v)
    }

    /// Whether the keys are exactly `0..len` in order.
    pub fn is_list(&self) -> bool {
        self.entries
            .iter()
            .enumerate()
            .all(|(pos, (key, _))| *key == Key::Int(pos as i64))
    }
}

impl PartialEq for Map {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl fmt::Debug for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Into<Key>, V: Into<Value>> FromIterator<(K, V)> for Map {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Map::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<Key>, V: Into<Value>> Extend<(K, V)> for Map {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl IntoIterator for Map {
    type Item = (Key, Value);
    type IntoIter = std::vec::IntoIter<(Key, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = (&'a Key, &'a Value);
    type IntoIter = std::iter::Map<
        std::slice::Iter<'a, (Key, Value)>,
        fn(&'a (Key, Value)) -> (&'a Key, &'a Value),
    >;

    fn into_iter(self) -> Self::IntoIter {
        self.entries
            .iter()
            .map(split_entry as fn(&'a (Key, Value)) -> (&'a Key, &'a Value))
    }
}

fn split_entry(entry: &(Key, Value)) -> (&Key, &Value) {
    (&entry.0, &entry.1)
}

impl From<serde_json::Map<String, serde_json::Value>> for Map {
    fn from(fields: serde_json::Map<String, serde_json::Value>) -> Self {
        fields
            .into_iter()
            .map(|(k, v)| (Key::from(k), Value::from(v)))
            .collect()
    }
}

impl From<Map> for serde_json::Value {
    fn from(map: Map) -> Self {
        if map.is_list() {
            return serde_json::Value::Array(map.into_values().map(Into::into).collect());
        }
        serde_json::Value::Object(
            map.into_iter()
                .map(|(k, v)| (k.to_string(), serde_json::Value::from(v)))
                .collect(),
        )
    }
}

impl Serialize for Map {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if self.is_list() {
            let mut seq = serializer.serialize_seq(Some(self.len()))?;
            for value in self.values() {
                seq.serialize_element(value)?;
            }
            return seq.end();
        }

        let mut out = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            out.serialize_entry(key, value)?;
        }
        out.end()
    }
}

pub(crate) struct MapVisitor;

impl<'de> Visitor<'de> for MapVisitor {
    type Value = Map;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map or a sequence")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> std::result::Result<Map, A::Error> {
        let mut map = Map::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(value) = seq.next_element::<Value>()? {
            map.push(value).map_err(de::Error::custom)?;
        }
        Ok(map)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Map, A::Error> {
        let mut map = Map::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry::<Key, Value>()? {
            map.insert(key, value);
        }
        Ok(map)
    }
}

impl<'de> Deserialize<'de> for Map {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(MapVisitor)
    }
}
