//! Policies for duplicate keys and field collisions

use crate::error::MapError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What `extract` does when two items resolve to the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DuplicateBehavior {
    /// Keep the value of the first item
    TakeFirst,
    /// Keep the value of the last item
    #[default]
    TakeLast,
    /// Fail with a duplicate-key error
    Throw,
}

impl DuplicateBehavior {
    /// Name used when parsing and displaying.
    pub fn as_str(self) -> &'static str {
        match self {
            DuplicateBehavior::TakeFirst => "takeFirst",
            DuplicateBehavior::TakeLast => "takeLast",
            DuplicateBehavior::Throw => "throw",
        }
    }
}

impl FromStr for DuplicateBehavior {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "takeFirst" => Ok(DuplicateBehavior::TakeFirst),
            "takeLast" => Ok(DuplicateBehavior::TakeLast),
            "throw" => Ok(DuplicateBehavior::Throw),
            other => Err(MapError::InvalidArgument(format!(
                "duplicate behavior '{other}' was not 'takeFirst', 'takeLast', or 'throw'"
            ))),
        }
    }
}

impl fmt::Display for DuplicateBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What to do when a write targets a key or field that already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyCollisionMode {
    /// Refuse to overwrite and report an error
    #[default]
    Error,
    /// Replace the existing value
    Overwrite,
}

impl KeyCollisionMode {
    /// Whether existing values may be replaced.
    pub fn allows_overwrite(self) -> bool {
        matches!(self, KeyCollisionMode::Overwrite)
    }
}

impl From<bool> for KeyCollisionMode {
    /// `true` means overwrite.
    fn from(overwrite: bool) -> Self {
        if overwrite {
            KeyCollisionMode::Overwrite
        } else {
            KeyCollisionMode::Error
        }
    }
}
