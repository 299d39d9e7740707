//! Conditional copying between maps

use mapkit_core::{Key, KeyMap, Map};

/// Copy `source[source_key]` into `dest[dest_key]` for every pair of `key_map`
/// whose source key exists in `source`.
///
/// Pairs whose source key is missing leave `dest` untouched. Mutates `dest`.
pub fn copy_if_keys_exist(source: &Map, dest: &mut Map, key_map: &KeyMap) {
    copy_value_if(source, dest, key_map, |source, key| source.contains_key(key));
}

/// Copy `source[source_key]` into `dest[dest_key]` for every pair of `key_map`
/// whose source value is set (present and not null).
///
/// Pairs failing the check leave `dest` untouched. Mutates `dest`.
pub fn copy_if_set(source: &Map, dest: &mut Map, key_map: &KeyMap) {
    copy_value_if(source, dest, key_map, |source, key| {
        source.get(key).is_some_and(|value| value.is_set())
    });
}

fn copy_value_if<F>(source: &Map, dest: &mut Map, key_map: &KeyMap, condition: F)
where
    F: Fn(&Map, &Key) -> bool,
{
    for (dest_key, source_key) in key_map.iter() {
        if !condition(source, source_key) {
            continue;
        }
        if let Some(value) = source.get(source_key) {
            dest.insert(dest_key, value.clone());
        }
    }
}

/// Copy of `template` with every key also present in `source` overwritten by
/// `source`'s value.
///
/// Keys only in `source` are ignored and `template` keeps its order.
pub fn fill_if_keys_exist(template: &Map, source: &Map) -> Map {
    let mut result = template.clone();
    for (key, slot) in result.iter_mut() {
        if let Some(value) = source.get(key) {
            *slot = value.clone();
        }
    }
    result
}
