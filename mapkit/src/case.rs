//! Key case conversion
//!
//! Conversions apply to the top-level string keys of a map. Integer keys pass
//! through unchanged. When a mask selects several conversions they run in a
//! fixed order: underscore, camelCaps, upper, lower.

use mapkit_core::{CaseMask, Key, Map};
use tracing::debug;

/// Copy of `input` with every string key converted according to `mask`.
///
/// Converted keys go through the usual key normalization, so a result such as
/// `"12"` becomes integer key 12. camelCaps drops only empty segments, so a
/// `"0"` segment survives: `"item_0_name"` becomes `"item0Name"`.
///
/// If two keys convert to the same key, the later value wins and the key
/// keeps the position of the first.
///
/// # Example
///
/// ```
/// use mapkit::{change_key_case, CaseMask, Map, Value};
///
/// let mut input = Map::new();
/// input.insert("fooBar", 1);
///
/// let output = change_key_case(&input, CaseMask::UNDERSCORE | CaseMask::UPPER);
/// assert_eq!(output.get("FOO_BAR"), Some(&Value::Int(1)));
/// ```
pub fn change_key_case(input: &Map, mask: CaseMask) -> Map {
    let mut output = Map::with_capacity(input.len());

    for (key, value) in input.iter() {
        let converted = match key {
            Key::Int(_) => key.clone(),
            Key::Str(text) => Key::from(convert_key(text, mask)),
        };

        if output.insert(converted.clone(), value.clone()).is_some() {
            debug!(key = %converted, original = %key, "key case conversion collided");
        }
    }

    output
}

/// Shorthand for [`change_key_case`] with [`CaseMask::UNDERSCORE`].
pub fn underscore_keys(input: &Map) -> Map {
    change_key_case(input, CaseMask::UNDERSCORE)
}

/// Shorthand for [`change_key_case`] with [`CaseMask::CAMEL_CAPS`].
///
/// `"0"` segments are kept: `"item_0_name"` becomes `"item0Name"`.
pub fn camel_case_keys(input: &Map) -> Map {
    change_key_case(input, CaseMask::CAMEL_CAPS)
}

/// Shorthand for [`change_key_case`] with [`CaseMask::UPPER`].
pub fn upper_case_keys(input: &Map) -> Map {
    change_key_case(input, CaseMask::UPPER)
}

/// Shorthand for [`change_key_case`] with [`CaseMask::LOWER`].
pub fn lower_case_keys(input: &Map) -> Map {
    change_key_case(input, CaseMask::LOWER)
}

fn convert_key(key: &str, mask: CaseMask) -> String {
    let mut key = key.to_string();

    if mask.contains(CaseMask::UNDERSCORE) {
        key = to_underscore(&key);
    }
    if mask.contains(CaseMask::CAMEL_CAPS) {
        key = to_camel_caps(&key);
    }
    if mask.contains(CaseMask::UPPER) {
        key = key.to_ascii_uppercase();
    }
    if mask.contains(CaseMask::LOWER) {
        key = key.to_ascii_lowercase();
    }

    key
}

/// Insert `_` at every lowercase-to-uppercase or lowercase-to-digit boundary.
fn to_underscore(key: &str) -> String {
    let mut output = String::with_capacity(key.len() + 4);
    let mut previous: Option<char> = None;

    for ch in key.chars() {
        let boundary = previous.is_some_and(|p| p.is_ascii_lowercase())
            && (ch.is_ascii_uppercase() || ch.is_ascii_digit());
        if boundary {
            output.push('_');
        }
        output.push(ch);
        previous = Some(ch);
    }

    output
}

/// Join alphanumeric runs as camelCaps: `"foo_bar-baz"` becomes `"fooBarBaz"`.
///
/// Only empty runs are dropped; a `"0"` run is kept, so `"item_0_name"`
/// becomes `"item0Name"`.
fn to_camel_caps(key: &str) -> String {
    let mut output = String::with_capacity(key.len());

    let segments = key
        .split(|ch: char| !ch.is_ascii_alphanumeric())
        .filter(|segment| !segment.is_empty());

    for (position, segment) in segments.enumerate() {
        let segment = segment.to_ascii_lowercase();
        if position == 0 {
            output.push_str(&segment);
            continue;
        }
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            output.push(first.to_ascii_uppercase());
            output.push_str(chars.as_str());
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use mapkit_core::Value;
    use mapkit_test_utils::map_from;
    use serde_json::json;

    #[test]
    fn underscore_splits_lower_to_upper_boundaries() {
        let output = underscore_keys(&map_from(json!({"fooBar": 1})));
        assert_eq!(output, map_from(json!({"foo_Bar": 1})));

        assert_eq!(to_underscore("userID2"), "user_ID2");
        assert_eq!(to_underscore("item2"), "item_2");
        assert_eq!(to_underscore("HTTPServer"), "HTTPServer");
        assert_eq!(to_underscore(""), "");
    }

    #[test]
    fn camel_caps_joins_segments() {
        let output = camel_case_keys(&map_from(json!({"foo_bar": 1})));
        assert_eq!(output, map_from(json!({"fooBar": 1})));

        assert_eq!(to_camel_caps("Foo-BAR baz"), "fooBarBaz");
        assert_eq!(to_camel_caps("__leading__trailing__"), "leadingTrailing");
        assert_eq!(to_camel_caps("item_0_name"), "item0Name");
        assert_eq!(to_camel_caps("---"), "");
    }

    #[test]
    fn camel_caps_keeps_zero_segments() {
        let output = camel_case_keys(&map_from(json!({"item_0_name": 1, "0_x": 2})));
        assert_eq!(output, map_from(json!({"item0Name": 1, "0X": 2})));
    }

    #[test]
    fn upper_and_lower() {
        let input = map_from(json!({"MixedCase": 1}));
        assert_eq!(upper_case_keys(&input), map_from(json!({"MIXEDCASE": 1})));
        assert_eq!(lower_case_keys(&input), map_from(json!({"mixedcase": 1})));
    }

    #[test]
    fn combined_masks_apply_in_fixed_order() {
        let input = map_from(json!({"fooBar": 1}));

        let output = change_key_case(&input, CaseMask::UNDERSCORE | CaseMask::UPPER);
        assert_eq!(output, map_from(json!({"FOO_BAR": 1})));

        let output = change_key_case(&input, CaseMask::UNDERSCORE | CaseMask::CAMEL_CAPS);
        assert_eq!(output, map_from(json!({"fooBar": 1})));

        // lower runs after upper
        let output = change_key_case(&input, CaseMask::UPPER | CaseMask::LOWER);
        assert_eq!(output, map_from(json!({"foobar": 1})));
    }

    #[test]
    fn integer_keys_and_empty_mask_pass_through() {
        let input = map_from(json!({"0": "zero", "Name": "x"}));
        let output = change_key_case(&input, CaseMask::UPPER);
        assert_eq!(output.get(0), Some(&Value::from("zero")));
        assert_eq!(output.get("NAME"), Some(&Value::from("x")));

        assert_eq!(change_key_case(&input, CaseMask::empty()), input);
    }

    #[test]
    fn collisions_keep_later_value_at_first_position() {
        let input = map_from(json!({"Key": 1, "other": 2, "KEY": 3}));
        let output = lower_case_keys(&input);
        assert_eq!(output, map_from(json!({"key": 3, "other": 2})));
    }

    #[test]
    fn nested_maps_are_not_converted() {
        let input = map_from(json!({"outerKey": {"innerKey": 1}}));
        let output = underscore_keys(&input);
        assert_eq!(output, map_from(json!({"outer_Key": {"innerKey": 1}})));
    }

    #[test]
    fn converted_numeric_keys_normalize() {
        let input = map_from(json!({"_1_": "a"}));
        let output = camel_case_keys(&input);
        assert_eq!(output.get(1), Some(&Value::from("a")));
    }
}
