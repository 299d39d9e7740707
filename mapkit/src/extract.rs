//! Extraction of key/value pairs out of a sequence, and embedding of items
//! into a sequence

use crate::accessors::get;
use mapkit_core::{
    ensure_is_map, ensure_valid_key, DuplicateBehavior, ErrorKind, Key, KeyCollisionMode, Map,
    MapError, Result, Value,
};
use tracing::{debug, trace};

/// Build a map from `sequence`, keyed by each item's `key_index` value and
/// holding its `value_index` value.
///
/// A missing `value_index` yields null. A missing `key_index` yields a null
/// key, which then fails the key type check. When two items resolve to the
/// same key, `duplicate_behavior` decides: keep the first value, keep the last
/// value (the key stays at its first position), or fail.
///
/// # Errors
///
/// - `InvalidArgument` if an item is not a map.
/// - `UnexpectedValue` if a resolved key is not a string or integer.
/// - `DuplicateKey` if `duplicate_behavior` is [`DuplicateBehavior::Throw`]
///   and a key repeats.
///
/// # Example
///
/// ```
/// use mapkit::{extract, DuplicateBehavior, Map, Value};
///
/// let rows = Map::from_list([
///     Value::from(Map::from_iter([("k", Value::Int(1)), ("v", Value::from("a"))])),
///     Value::from(Map::from_iter([("k", Value::Int(1)), ("v", Value::from("b"))])),
/// ]);
///
/// let first = extract(&rows, "k", "v", DuplicateBehavior::TakeFirst).unwrap();
/// assert_eq!(first.get(1), Some(&Value::from("a")));
///
/// let last = extract(&rows, "k", "v", DuplicateBehavior::TakeLast).unwrap();
/// assert_eq!(last.get(1), Some(&Value::from("b")));
///
/// assert!(extract(&rows, "k", "v", DuplicateBehavior::Throw).is_err());
/// ```
pub fn extract(
    sequence: &Map,
    key_index: impl Into<Key>,
    value_index: impl Into<Key>,
    duplicate_behavior: DuplicateBehavior,
) -> Result<Map> {
    let key_index = key_index.into();
    let value_index = value_index.into();
    let null = Value::Null;
    let mut result = Map::new();

    for (index, item) in sequence.iter() {
        let item = ensure_is_map(
            item,
            "the sequence was not a multi-dimensional map",
            ErrorKind::InvalidArgument,
        )?;

        let key = ensure_valid_key(
            get(item, &key_index, &null),
            &format!("value for [{index}][{key_index}] was not a string or integer"),
            ErrorKind::UnexpectedValue,
        )?;
        let value = get(item, &value_index, &null).clone();

        if !result.contains_key(&key) {
            result.insert(key, value);
            continue;
        }

        match duplicate_behavior {
            DuplicateBehavior::Throw => return Err(MapError::DuplicateKey { key }),
            DuplicateBehavior::TakeLast => {
                trace!(%key, "extract keeps later duplicate");
                result.insert(key, value);
            }
            DuplicateBehavior::TakeFirst => {
                trace!(%key, "extract drops later duplicate");
            }
        }
    }

    Ok(result)
}

/// Embed each item of `items` into a copy of `destination` under
/// `field_name`.
///
/// For each `(key, item)`: when `destination[key]` is absent, it becomes
/// `{field_name: item}`; otherwise `item` is stored as `field_name` inside the
/// existing map. Entries are created in the order of `items`. `destination`
/// itself is never modified, so it is still intact when an error comes back.
///
/// # Errors
///
/// - `InvalidArgument` if an existing `destination[key]` is not a map.
/// - `FieldExists` if `field_name` is already present there and `mode` is
///   [`KeyCollisionMode::Error`].
///
/// # Example
///
/// ```
/// use mapkit::{embed_into, KeyCollisionMode, Map, Value};
///
/// let last_names = Map::from_list(["Joe", "Sue"]);
/// let people = Map::from_list([
///     Value::from(Map::from_iter([("firstName", "Billy")])),
///     Value::from(Map::from_iter([("firstName", "Bobby")])),
/// ]);
///
/// let merged = embed_into(&last_names, "lastName", &people, KeyCollisionMode::Error).unwrap();
/// let first = merged.get(0).and_then(Value::as_map).unwrap();
/// assert_eq!(first.get("lastName"), Some(&Value::from("Joe")));
/// ```
pub fn embed_into(
    items: &Map,
    field_name: impl Into<Key>,
    destination: &Map,
    mode: KeyCollisionMode,
) -> Result<Map> {
    let field_name = field_name.into();
    let mut destination = destination.clone();

    for (key, item) in items.iter() {
        if !destination.contains_key(key) {
            let mut record = Map::new();
            record.insert(&field_name, item.clone());
            destination.insert(key, record);
            continue;
        }

        let record = destination
            .get_mut(key)
            .and_then(Value::as_map_mut)
            .ok_or_else(|| {
                MapError::InvalidArgument(format!("destination entry '{key}' was not a map"))
            })?;

        if record.contains_key(&field_name) {
            if !mode.allows_overwrite() {
                return Err(MapError::FieldExists {
                    field: field_name,
                    key: key.clone(),
                });
            }
            debug!(%key, field = %field_name, "embed overwrites existing field");
        }

        record.insert(&field_name, item.clone());
    }

    Ok(destination)
}
