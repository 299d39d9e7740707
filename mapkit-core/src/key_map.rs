//! Destination/source key pairs used by the copy operators

use crate::error::{ErrorKind, MapError, Result};
use crate::key::{ensure_valid_key, Key};
use crate::map::Map;

/// Ordered list of `(destination, source)` key pairs.
///
/// Built from bare keys (destination equals source), from explicit pairs, or
/// from a [`Map`] where integer-keyed entries name a key copied onto itself and
/// string-keyed entries map the entry key (destination) to the entry value
/// (source).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyMap {
    pairs: Vec<(Key, Key)>,
}

impl KeyMap {
    /// Create an empty key map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys copied under their own name.
    pub fn from_keys<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<Key>,
    {
        Self {
            pairs: keys
                .into_iter()
                .map(|key| {
                    let key = key.into();
                    (key.clone(), key)
                })
                .collect(),
        }
    }

    /// Explicit `(destination, source)` pairs.
    pub fn from_pairs<I, D, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (D, S)>,
        D: Into<Key>,
        S: Into<Key>,
    {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(dest, source)| (dest.into(), source.into()))
                .collect(),
        }
    }

    /// Append a `(destination, source)` pair.
    pub fn push(&mut self, dest: impl Into<Key>, source: impl Into<Key>) {
        self.pairs.push((dest.into(), source.into()));
    }

    /// Iterate over `(destination, source)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Key)> {
        self.pairs.iter().map(|(dest, source)| (dest, source))
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether there are no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl TryFrom<&Map> for KeyMap {
    type Error = MapError;

    fn try_from(map: &Map) -> Result<Self> {
        let mut key_map = KeyMap::new();
        for (entry_key, entry_value) in map.iter() {
            let source = ensure_valid_key(
                entry_value,
                &format!("key map entry '{entry_key}' was not a string or integer"),
                ErrorKind::InvalidArgument,
            )?;
            let dest = if entry_key.is_int() {
                source.clone()
            } else {
                entry_key.clone()
            };
            key_map.pairs.push((dest, source));
        }
        Ok(key_map)
    }
}
