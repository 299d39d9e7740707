//! Proptest strategies for keys, values and maps
//!
//! String keys never contain `.` and never look like integers, so paths
//! built from them survive a split on the default delimiter unchanged.

use mapkit_core::{Key, Map, Value};
use proptest::prelude::*;

/// Key usable as a path segment under the default delimiter.
pub fn arb_key() -> impl Strategy<Value = Key> {
    prop_oneof![
        (-50i64..50).prop_map(Key::Int),
        "[a-z][a-zA-Z0-9_]{0,8}".prop_map(Key::from),
    ]
}

/// Any value except a map.
pub fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        any::<f64>()
            .prop_filter("must be finite", |f| f.is_finite())
            .prop_map(Value::Float),
        "[a-zA-Z0-9 ]{0,12}".prop_map(Value::from),
    ]
}

/// Single-level map of scalar values.
pub fn arb_flat_map() -> impl Strategy<Value = Map> {
    prop::collection::vec((arb_key(), arb_scalar()), 0..12)
        .prop_map(|entries| entries.into_iter().collect())
}

/// Value tree at most a few levels deep. Nested maps are never empty.
pub fn arb_nested_value() -> impl Strategy<Value = Value> {
    arb_scalar().prop_recursive(3, 48, 4, |inner| {
        prop::collection::vec((arb_key(), inner), 1..4)
            .prop_map(|entries| Value::Map(entries.into_iter().collect()))
    })
}

/// Map whose values may themselves be non-empty maps.
pub fn arb_nested_map() -> impl Strategy<Value = Map> {
    prop::collection::vec((arb_key(), arb_nested_value()), 0..6)
        .prop_map(|entries| entries.into_iter().collect())
}

/// List of `0..max_len` scalar values keyed `0..n`.
pub fn arb_list(max_len: usize) -> impl Strategy<Value = Map> {
    prop::collection::vec(arb_scalar(), 0..max_len).prop_map(Map::from_list)
}
