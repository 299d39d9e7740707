//! In-place edits
//!
//! Every function here mutates the map it is given.

use mapkit_core::constants::BLANK_CHARS;
use mapkit_core::{Key, KeyCollisionMode, Map, MapError, Result, Value};
use tracing::debug;

/// Remove every key in `keys` from `map`. Missing keys are ignored.
pub fn unset_all<I, K>(map: &mut Map, keys: I)
where
    I: IntoIterator<Item = K>,
    K: Into<Key>,
{
    for key in keys {
        map.remove(key);
    }
}

/// Replace every empty or whitespace-only string value with null.
///
/// Whitespace is space, tab, newline, carriage return, NUL and vertical tab.
/// Only the top level of `map` is visited.
pub fn nullify_empty_strings(map: &mut Map) {
    for value in map.values_mut() {
        let blank = value
            .as_str()
            .is_some_and(|s| s.trim_matches(&BLANK_CHARS[..]).is_empty());
        if blank {
            *value = Value::Null;
        }
    }
}

/// Move the value at `old_key` to `new_key`.
///
/// The entry is appended at the end, unless it overwrites an existing
/// `new_key`, which keeps that key's position.
///
/// # Errors
///
/// `InvalidArgument` if `old_key` is absent, or if `new_key` exists and `mode`
/// is [`KeyCollisionMode::Error`]. The map is left untouched on error.
pub fn rename(
    map: &mut Map,
    old_key: impl Into<Key>,
    new_key: impl Into<Key>,
    mode: KeyCollisionMode,
) -> Result<()> {
    let old_key = old_key.into();
    let new_key = new_key.into();

    if !map.contains_key(&old_key) {
        return Err(MapError::InvalidArgument(format!(
            "{old_key} does not exist in the given map"
        )));
    }

    if map.contains_key(&new_key) {
        if !mode.allows_overwrite() {
            return Err(MapError::InvalidArgument(format!(
                "{new_key} already exists in the given map"
            )));
        }
        debug!(old = %old_key, new = %new_key, "rename overwrites existing key");
    }

    if let Some(value) = map.remove(&old_key) {
        map.insert(new_key, value);
    }
    Ok(())
}
