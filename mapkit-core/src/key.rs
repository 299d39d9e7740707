//! Map keys
//!
//! A [`Key`] is either an integer or a string. Text that spells a canonical
//! decimal integer (`"0"`, `"42"`, `"-7"`) is normalized to [`Key::Int`] when a
//! key is built from it, so `"1"` and `1` address the same entry. Text such as
//! `"007"`, `"-0"`, `"+1"` or `"1.5"` stays a string key.

use crate::error::{ErrorKind, MapError, Result};
use crate::value::Value;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A map key: integer or string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// Integer key
    Int(i64),
    /// String key that is not a canonical integer
    Str(String),
}

impl Key {
    /// Integer value of this key, if it is one.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Key::Int(i) => Some(*i),
            Key::Str(_) => None,
        }
    }

    /// String value of this key, if it is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::Int(_) => None,
            Key::Str(s) => Some(s),
        }
    }

    /// Whether this is an integer key.
    pub fn is_int(&self) -> bool {
        matches!(self, Key::Int(_))
    }

    /// Convert the key into a value (integer or string).
    pub fn to_value(&self) -> Value {
        match self {
            Key::Int(i) => Value::Int(*i),
            Key::Str(s) => Value::String(s.clone()),
        }
    }

    /// Canonical form of this key: a [`Key::Str`] spelling a canonical integer
    /// becomes [`Key::Int`].
    ///
    /// Keys built through `From` are already canonical. [`Map`](crate::Map)
    /// applies this to every key it is handed, so a directly constructed
    /// `Key::Str("1".into())` still addresses the entry under `1`.
    pub fn normalize(self) -> Key {
        match self {
            Key::Str(text) => Key::from(text),
            int => int,
        }
    }
}

/// Parse `text` as an integer key if it is written in canonical form.
fn parse_canonical_int(text: &str) -> Option<i64> {
    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return None;
    }
    if digits == "0" && digits.len() != text.len() {
        return None; // "-0"
    }
    text.parse::<i64>().ok()
}

/// Validate that `value` can be used as a key.
///
/// Strings and integers convert to a [`Key`]; anything else raises an error of
/// `kind` carrying `message`.
pub fn ensure_valid_key(value: &Value, message: &str, kind: ErrorKind) -> Result<Key> {
    match value {
        Value::Int(i) => Ok(Key::Int(*i)),
        Value::String(s) => Ok(Key::from(s.as_str())),
        _ => Err(kind.into_error(message)),
    }
}

impl From<&str> for Key {
    fn from(text: &str) -> Self {
        match parse_canonical_int(text) {
            Some(i) => Key::Int(i),
            None => Key::Str(text.to_string()),
        }
    }
}

impl From<String> for Key {
    fn from(text: String) -> Self {
        match parse_canonical_int(&text) {
            Some(i) => Key::Int(i),
            None => Key::Str(text),
        }
    }
}

impl From<&String> for Key {
    fn from(text: &String) -> Self {
        Key::from(text.as_str())
    }
}

impl From<i64> for Key {
    fn from(i: i64) -> Self {
        Key::Int(i)
    }
}

impl From<i32> for Key {
    fn from(i: i32) -> Self {
        Key::Int(i64::from(i))
    }
}

impl From<u32> for Key {
    fn from(i: u32) -> Self {
        Key::Int(i64::from(i))
    }
}

impl From<&Key> for Key {
    fn from(key: &Key) -> Self {
        key.clone()
    }
}

impl TryFrom<&Value> for Key {
    type Error = MapError;

    fn try_from(value: &Value) -> Result<Self> {
        ensure_valid_key(
            value,
            &format!("{} was not a string or integer", value.type_name()),
            ErrorKind::InvalidArgument,
        )
    }
}

impl TryFrom<Value> for Key {
    type Error = MapError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(Key::from(s)),
            other => Key::try_from(&other),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(i) => write!(f, "{i}"),
            Key::Str(s) => f.write_str(s),
        }
    }
}

impl Serialize for Key {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Key::Int(i) => serializer.serialize_i64(*i),
            Key::Str(s) => serializer.serialize_str(s),
        }
    }
}

struct KeyVisitor;

impl<'de> Visitor<'de> for KeyVisitor {
    type Value = Key;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string or integer key")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Key, E> {
        Ok(Key::Int(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Key, E> {
        i64::try_from(v)
            .map(Key::Int)
            .map_err(|_| E::custom(format!("integer key {v} out of range")))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Key, E> {
        Ok(Key::from(v))
    }

    fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<Key, E> {
        Ok(Key::from(v))
    }
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(KeyVisitor)
    }
}
