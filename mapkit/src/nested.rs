//! Delimited key paths: traversal and flattening
//!
//! A path such as `"db.login.username"` names a walk through nested maps, one
//! segment per level. Segments go through [`Key`] normalization, so `"0"`
//! addresses integer key 0.

use mapkit_core::{Key, Map, Value};

/// Walk `map` along `delimited_key`, split on `delimiter`.
///
/// Returns `None` as soon as a segment is missing or the walk reaches a value
/// that is not a map. The final value may itself be a map. An empty
/// `delimiter` treats the whole path as one segment.
///
/// # Example
///
/// ```
/// use mapkit::{get_nested, Map, Value, DEFAULT_DELIMITER};
///
/// let mut login = Map::new();
/// login.insert("username", "scott");
/// let mut db = Map::new();
/// db.insert("host", "localhost");
/// db.insert("login", login);
/// let mut config = Map::new();
/// config.insert("db", db);
///
/// let username = get_nested(&config, "db.login.username", DEFAULT_DELIMITER);
/// assert_eq!(username, Some(&Value::from("scott")));
/// assert_eq!(get_nested(&config, "db.port", DEFAULT_DELIMITER), None);
/// ```
pub fn get_nested<'a>(map: &'a Map, delimited_key: &str, delimiter: &str) -> Option<&'a Value> {
    if delimiter.is_empty() {
        return map.get(delimited_key);
    }

    let mut segments = delimited_key.split(delimiter);
    let first = segments.next()?;
    let mut pointer = map.get(first)?;

    for segment in segments {
        pointer = pointer.as_map()?.get(segment)?;
    }

    Some(pointer)
}

/// Collapse nested maps into one level whose keys are delimiter-joined paths.
///
/// Leaves are every value that is not a map; an empty nested map produces no
/// entry. Entries come out depth-first in each level's order.
///
/// A key `"0"` (integer 0) counts as a real path segment, so `{"0": {"a": 1}}`
/// flattens to `"0.a"` rather than `"a"`. This keeps every flattened key
/// addressable through [`get_nested`].
///
/// # Example
///
/// ```
/// use mapkit::{flatten, Map, Value};
///
/// let mut login = Map::new();
/// login.insert("username", "scott");
/// let mut db = Map::new();
/// db.insert("login", login);
/// db.insert("port", 5432);
///
/// let flat = flatten(&db, ".");
/// assert_eq!(flat.get("login.username"), Some(&Value::from("scott")));
/// assert_eq!(flat.get("port"), Some(&Value::Int(5432)));
/// ```
pub fn flatten(input: &Map, delimiter: &str) -> Map {
    let mut result = Map::new();
    flatten_into(&mut result, input, "", delimiter);
    result
}

fn flatten_into(result: &mut Map, input: &Map, prefix: &str, delimiter: &str) {
    for (key, value) in input.iter() {
        let new_key = if prefix.is_empty() {
            key.to_string()
        } else {
            format!("{prefix}{delimiter}{key}")
        };

        match value {
            Value::Map(nested) => flatten_into(result, nested, &new_key, delimiter),
            leaf => {
                result.insert(Key::from(new_key), leaf.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mapkit_core::DEFAULT_DELIMITER;
    use mapkit_test_utils::map_from;
    use serde_json::json;

    fn config() -> Map {
        map_from(json!({
            "db": {
                "host": "localhost",
                "login": {"username": "scott", "password": "tiger"}
            },
            "servers": ["alpha", "beta"],
            "debug": null
        }))
    }

    #[test]
    fn get_nested_walks_maps() {
        let config = config();
        assert_eq!(
            get_nested(&config, "db.login.username", DEFAULT_DELIMITER),
            Some(&Value::from("scott"))
        );
        let login = get_nested(&config, "db.login", DEFAULT_DELIMITER).unwrap();
        assert!(login.is_map());
    }

    #[test]
    fn get_nested_short_circuits() {
        let config = config();
        assert_eq!(get_nested(&config, "db.missing.username", DEFAULT_DELIMITER), None);
        assert_eq!(get_nested(&config, "db.host.length", DEFAULT_DELIMITER), None);
        assert_eq!(get_nested(&config, "", DEFAULT_DELIMITER), None);
        assert_eq!(get_nested(&config, "db.", DEFAULT_DELIMITER), None);
    }

    #[test]
    fn get_nested_distinguishes_null_leaf_from_missing() {
        let config = config();
        assert_eq!(get_nested(&config, "debug", DEFAULT_DELIMITER), Some(&Value::Null));
    }

    #[test]
    fn get_nested_indexes_lists_with_integer_segments() {
        let config = config();
        assert_eq!(
            get_nested(&config, "servers.1", DEFAULT_DELIMITER),
            Some(&Value::from("beta"))
        );
        assert_eq!(get_nested(&config, "servers.01", DEFAULT_DELIMITER), None);
    }

    #[test]
    fn get_nested_custom_and_empty_delimiters() {
        let config = config();
        assert_eq!(
            get_nested(&config, "db/login/password", "/"),
            Some(&Value::from("tiger"))
        );

        let flat = map_from(json!({"a.b": 1}));
        assert_eq!(get_nested(&flat, "a.b", ""), Some(&Value::Int(1)));
    }

    #[test]
    fn flatten_joins_paths_depth_first() {
        let flat = flatten(&config(), DEFAULT_DELIMITER);
        assert_eq!(
            flat,
            map_from(json!({
                "db.host": "localhost",
                "db.login.username": "scott",
                "db.login.password": "tiger",
                "servers.0": "alpha",
                "servers.1": "beta",
                "debug": null
            }))
        );
    }

    #[test]
    fn flatten_custom_delimiter_and_integer_keys() {
        let input = map_from(json!([{"a": 1}, "leaf"]));
        let flat = flatten(&input, "_");
        assert_eq!(flat, map_from(json!({"0_a": 1, "1": "leaf"})));
        assert_eq!(flat.get(1), Some(&Value::from("leaf")));
    }

    #[test]
    fn flatten_keeps_zero_prefix() {
        let input = map_from(json!({"0": {"a": 1}}));
        let flat = flatten(&input, DEFAULT_DELIMITER);
        assert_eq!(flat, map_from(json!({"0.a": 1})));
        assert_eq!(get_nested(&input, "0.a", DEFAULT_DELIMITER), Some(&Value::Int(1)));
    }

    #[test]
    fn flatten_drops_empty_nested_maps() {
        let input = map_from(json!({"empty": {}, "kept": 1}));
        assert_eq!(flatten(&input, "."), map_from(json!({"kept": 1})));
    }

    #[test]
    fn flatten_then_get_nested_round_trips() {
        let config = config();
        for (key, value) in flatten(&config, DEFAULT_DELIMITER).iter() {
            let path = key.to_string();
            assert_eq!(get_nested(&config, &path, DEFAULT_DELIMITER), Some(value), "{path}");
        }
    }
}
