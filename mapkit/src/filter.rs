//! Filtering and projection over sequences of maps

use mapkit_core::{ensure_is_map, ErrorKind, Key, Map, MapError, Result};

/// Project the value under `key` out of every item of `sequence`.
///
/// The result maps each item's index to `item[key]`, in order. Items lacking
/// `key` are skipped unless `strict` is set.
///
/// # Errors
///
/// `InvalidArgument` if an item is not a map, or if `strict` is set and an
/// item lacks `key`.
pub fn project(sequence: &Map, key: impl Into<Key>, strict: bool) -> Result<Map> {
    let key = key.into();
    let mut projection = Map::new();

    for (index, item) in sequence.iter() {
        let item = ensure_is_map(
            item,
            "a value in the sequence was not a map",
            ErrorKind::InvalidArgument,
        )?;

        match item.get(&key) {
            Some(value) => {
                projection.insert(index, value.clone());
            }
            None if strict => {
                return Err(MapError::InvalidArgument(format!(
                    "key '{key}' was not in item '{index}' of the sequence"
                )));
            }
            None => {}
        }
    }

    Ok(projection)
}

/// Items of `sequence` matching every `(key, value)` pair of `conditions`.
///
/// A pair matches when the item has the key and its value is strictly equal
/// to the condition's value. Empty `conditions` select every item. The result
/// is renumbered `0..n` unless `preserve_keys` is set.
///
/// # Errors
///
/// `InvalidArgument` if an item is not a map.
pub fn filter_where(sequence: &Map, conditions: &Map, preserve_keys: bool) -> Result<Map> {
    let mut result = Map::new();

    for (index, item) in sequence.iter() {
        let fields = ensure_is_map(
            item,
            "a value in the sequence was not a map",
            ErrorKind::InvalidArgument,
        )?;

        let matches = conditions
            .iter()
            .all(|(key, expected)| fields.get(key) == Some(expected));
        if !matches {
            continue;
        }

        if preserve_keys {
            result.insert(index, item.clone());
        } else {
            result.push(item.clone())?;
        }
    }

    Ok(result)
}

/// Items of `sequence` containing `target_key`, with their original indices.
///
/// # Errors
///
/// `InvalidArgument` if an item is not a map.
pub fn get_all_where_key_exists(sequence: &Map, target_key: impl Into<Key>) -> Result<Map> {
    let target_key = target_key.into();
    let mut result = Map::new();

    for (index, item) in sequence.iter() {
        let fields = ensure_is_map(
            item,
            "a value in the sequence was not a map",
            ErrorKind::InvalidArgument,
        )?;
        if fields.contains_key(&target_key) {
            result.insert(index, item.clone());
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mapkit_core::Value;
    use mapkit_test_utils::map_from;
    use serde_json::json;

    fn rows() -> Map {
        map_from(json!([
            {"key 1": "item 1 value 1", "key 2": "item 1 value 2"},
            {"key 1": "item 2 value 1", "key 2": "item 2 value 2"},
            {"key 1": "item 3 value 1"}
        ]))
    }

    #[test]
    fn project_lenient_skips_missing() {
        let projection = project(&rows(), "key 2", false).unwrap();
        assert_eq!(
            projection,
            map_from(json!(["item 1 value 2", "item 2 value 2"]))
        );
    }

    #[test]
    fn project_strict_requires_key() {
        let err = project(&rows(), "key 2", true).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let projection = project(&rows(), "key 1", true).unwrap();
        assert_eq!(projection.len(), 3);
    }

    #[test]
    fn project_preserves_original_indices() {
        let sequence = map_from(json!({"a": {"id": 1}, "b": {"name": "x"}, "c": {"id": 3}}));
        let projection = project(&sequence, "id", false).unwrap();
        assert_eq!(projection, map_from(json!({"a": 1, "c": 3})));
    }

    #[test]
    fn project_rejects_non_map_items() {
        let sequence = map_from(json!([{"id": 1}, "scalar"]));
        let err = project(&sequence, "id", false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn filter_where_uses_strict_equality() {
        let sequence = map_from(json!([
            {"id": 1, "active": true},
            {"id": "1", "active": true},
            {"id": 1.0, "active": true},
            {"id": 1, "active": false},
            {"active": true}
        ]));
        let conditions = map_from(json!({"id": 1, "active": true}));

        let result = filter_where(&sequence, &conditions, false).unwrap();
        assert_eq!(result, map_from(json!([{"id": 1, "active": true}])));
    }

    #[test]
    fn filter_where_matches_null_conditions_only_when_key_exists() {
        let sequence = map_from(json!([{"a": null}, {"b": 1}]));
        let conditions = map_from(json!({"a": null}));
        let result = filter_where(&sequence, &conditions, false).unwrap();
        assert_eq!(result, map_from(json!([{"a": null}])));
    }

    #[test]
    fn filter_where_key_modes() {
        let sequence = map_from(json!([{"t": "x"}, {"t": "y"}, {"t": "x"}]));
        let conditions = map_from(json!({"t": "x"}));

        let renumbered = filter_where(&sequence, &conditions, false).unwrap();
        assert!(renumbered.is_list());
        assert_eq!(renumbered.len(), 2);

        let preserved = filter_where(&sequence, &conditions, true).unwrap();
        let keys: Vec<Key> = preserved.keys().cloned().collect();
        assert_eq!(keys, vec![Key::Int(0), Key::Int(2)]);
    }

    #[test]
    fn filter_where_edge_cases() {
        let conditions = map_from(json!({"t": "x"}));
        assert!(filter_where(&Map::new(), &conditions, false).unwrap().is_empty());

        let sequence = rows();
        assert_eq!(filter_where(&sequence, &Map::new(), false).unwrap(), sequence);

        let bad = map_from(json!([{"t": "x"}, 5]));
        let err = filter_where(&bad, &conditions, false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn filter_where_compares_nested_maps_in_order() {
        let sequence = map_from(json!([{"m": {"a": 1, "b": 2}}, {"m": {"b": 2, "a": 1}}]));
        let conditions = map_from(json!({"m": {"a": 1, "b": 2}}));
        let result = filter_where(&sequence, &conditions, true).unwrap();
        assert_eq!(result.keys().cloned().collect::<Vec<_>>(), vec![Key::Int(0)]);
    }

    #[test]
    fn get_all_where_key_exists_preserves_indices() {
        let sequence = map_from(json!([{"a": 1}, {"b": 2}, {"a": null}]));
        let result = get_all_where_key_exists(&sequence, "a").unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result.get(2), Some(&Value::from(map_from(json!({"a": null})))));
        assert!(!result.contains_key(1));

        let bad = map_from(json!(["nope"]));
        assert!(get_all_where_key_exists(&bad, "a").is_err());
    }
}
