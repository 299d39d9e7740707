//! mapkit - Operations over loosely structured, insertion-ordered maps
//!
//! This crate provides the operation layer on top of `mapkit-core`:
//!
//! - Lookup with defaults and null-aware fallbacks
//! - In-place removal, blank-string nulling and key renaming
//! - Conditional copying driven by key maps
//! - Projection and filtering over sequences of maps
//! - Extraction of key/value pairs and embedding of items
//! - Balanced partitioning
//! - Delimited-path traversal and flattening
//! - Key case conversion
//!
//! Every operation is a free function over [`Map`]. Inputs are borrowed and
//! left untouched unless the signature takes `&mut Map` or an owned `Map`.
//!
//! ```
//! use mapkit::{flatten, get_nested, Map, Value, DEFAULT_DELIMITER};
//!
//! let mut login = Map::new();
//! login.insert("username", "scott");
//! let mut config = Map::new();
//! config.insert("login", login);
//!
//! let flat = flatten(&config, DEFAULT_DELIMITER);
//! assert_eq!(flat.get("login.username"), Some(&Value::from("scott")));
//! assert_eq!(
//!     get_nested(&config, "login.username", DEFAULT_DELIMITER),
//!     flat.get("login.username"),
//! );
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod accessors;
pub mod case;
pub mod copy;
pub mod extract;
pub mod filter;
pub mod mutators;
pub mod nested;
pub mod partition;

// Re-export commonly used types
pub use mapkit_core::{
    CaseMask, DuplicateBehavior, ErrorKind, Key, KeyCollisionMode, KeyMap, Map, MapError, Result,
    Value, DEFAULT_DELIMITER,
};

pub use accessors::{any_keys_exist, get, get_first_set, get_if_set, try_get};
pub use case::{camel_case_keys, change_key_case, lower_case_keys, underscore_keys, upper_case_keys};
pub use copy::{copy_if_keys_exist, copy_if_set, fill_if_keys_exist};
pub use extract::{embed_into, extract};
pub use filter::{filter_where, get_all_where_key_exists, project};
pub use mutators::{nullify_empty_strings, rename, unset_all};
pub use nested::{flatten, get_nested};
pub use partition::partition;
