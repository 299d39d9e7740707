//! mapkit core - Data model for loosely structured maps
//!
//! This crate provides the types the mapkit operations work on, with no
//! operations of its own. It includes:
//!
//! - Integer/string keys with canonical-integer normalization
//! - Dynamically typed values
//! - Insertion-ordered maps
//! - Destination/source key maps for copy operators
//! - Key-case bit masks
//! - Duplicate and collision policies
//! - Error types
//! - Constants

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod case;
pub mod constants;
pub mod error;
pub mod key;
pub mod key_map;
pub mod map;
pub mod policy;
pub mod value;

// Re-export commonly used types
pub use case::CaseMask;
pub use constants::DEFAULT_DELIMITER;
pub use error::{ErrorKind, MapError, Result};
pub use key::{ensure_valid_key, Key};
pub use key_map::KeyMap;
pub use map::Map;
pub use policy::{DuplicateBehavior, KeyCollisionMode};
pub use value::Value;

/// Require `value` to be a map.
///
/// Raises an error of `kind` carrying `message` for any other value.
pub fn ensure_is_map<'a>(value: &'a Value, message: &str, kind: ErrorKind) -> Result<&'a Map> {
    value.as_map().ok_or_else(|| kind.into_error(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_is_map_accepts_maps_only() {
        let map = Value::from(Map::new());
        assert!(ensure_is_map(&map, "not a map", ErrorKind::InvalidArgument).is_ok());

        let err = ensure_is_map(&Value::from("x"), "not a map", ErrorKind::UnexpectedValue)
            .unwrap_err();
        assert_eq!(err, MapError::UnexpectedValue("not a map".to_string()));
    }

    #[test]
    fn core_types_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Map>();
        assert_send_sync::<Value>();
        assert_send_sync::<Key>();
        assert_send_sync::<MapError>();
    }
}
