//! Existence-guarded reads
//!
//! "Exists" means the key is present whatever its value. "Set" means the key
//! is present and its value is not null.

use mapkit_core::{Key, Map, Value};

/// Value under `key`, or `default` when the key is absent.
///
/// A key holding null counts as present, so null is returned rather than
/// `default`.
pub fn get<'a>(map: &'a Map, key: impl Into<Key>, default: &'a Value) -> &'a Value {
    map.get(key).unwrap_or(default)
}

/// Value under `key` when it is set, otherwise `default`.
pub fn get_if_set<'a>(map: &'a Map, key: impl Into<Key>, default: &'a Value) -> &'a Value {
    match map.get(key) {
        Some(value) if value.is_set() => value,
        _ => default,
    }
}

/// Look up a dynamically typed key.
///
/// Only string and integer values can address an entry; any other key value
/// is a miss, as is an absent key.
pub fn try_get<'a>(map: &'a Map, key: &Value) -> Option<&'a Value> {
    match key {
        Value::Int(i) => map.get(*i),
        Value::String(s) => map.get(s),
        _ => None,
    }
}

/// First set value among `keys`, tried in order, otherwise `default`.
pub fn get_first_set<'a, I, K>(map: &'a Map, keys: I, default: &'a Value) -> &'a Value
where
    I: IntoIterator<Item = K>,
    K: Into<Key>,
{
    keys.into_iter()
        .filter_map(|key| map.get(key))
        .find(|value| value.is_set())
        .unwrap_or(default)
}

/// Whether at least one of `keys` exists in `map`.
pub fn any_keys_exist<I, K>(map: &Map, keys: I) -> bool
where
    I: IntoIterator<Item = K>,
    K: Into<Key>,
{
    keys.into_iter().any(|key| map.contains_key(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mapkit_test_utils::map_from;
    use serde_json::json;

    fn sample() -> Map {
        map_from(json!({"a": "x", "b": null, "c": 0, "3": "three"}))
    }

    #[test]
    fn get_returns_present_values_even_when_null() {
        let map = sample();
        let default = Value::from("fallback");
        assert_eq!(get(&map, "a", &default), &Value::from("x"));
        assert_eq!(get(&map, "b", &default), &Value::Null);
        assert_eq!(get(&map, "missing", &default), &default);
        assert_eq!(get(&map, 3, &default), &Value::from("three"));
    }

    #[test]
    fn get_if_set_treats_null_as_absent() {
        let map = sample();
        let default = Value::from("fallback");
        assert_eq!(get_if_set(&map, "a", &default), &Value::from("x"));
        assert_eq!(get_if_set(&map, "b", &default), &default);
        assert_eq!(get_if_set(&map, "c", &default), &Value::Int(0));
        assert_eq!(get_if_set(&map, "missing", &default), &default);
    }

    #[test]
    fn try_get_only_accepts_string_and_integer_keys() {
        let map = sample();
        assert_eq!(try_get(&map, &Value::from("a")), Some(&Value::from("x")));
        assert_eq!(try_get(&map, &Value::from("b")), Some(&Value::Null));
        assert_eq!(try_get(&map, &Value::Int(3)), Some(&Value::from("three")));
        assert_eq!(try_get(&map, &Value::from("3")), Some(&Value::from("three")));
        assert_eq!(try_get(&map, &Value::from("missing")), None);
        assert_eq!(try_get(&map, &Value::Float(3.0)), None);
        assert_eq!(try_get(&map, &Value::Bool(true)), None);
        assert_eq!(try_get(&map, &Value::Null), None);
    }

    #[test]
    fn get_first_set_skips_missing_and_null() {
        let map = sample();
        let default = Value::from("fallback");
        assert_eq!(get_first_set(&map, ["missing", "b", "c", "a"], &default), &Value::Int(0));
        assert_eq!(get_first_set(&map, ["b", "missing"], &default), &default);
        assert_eq!(get_first_set(&map, Vec::<Key>::new(), &default), &default);
    }

    #[test]
    fn any_keys_exist_checks_existence_not_setness() {
        let map = sample();
        assert!(any_keys_exist(&map, ["missing", "b"]));
        assert!(any_keys_exist(&map, [3]));
        assert!(!any_keys_exist(&map, ["missing", "other"]));
        assert!(!any_keys_exist(&map, Vec::<Key>::new()));
    }
}
