//! Key-case bit mask

use crate::constants::{CASE_ALL, CASE_CAMEL_CAPS, CASE_LOWER, CASE_UNDERSCORE, CASE_UPPER};
use serde::{Deserialize, Serialize};
use std::ops::{BitOr, BitOrAssign};

/// Set of key-naming conventions applied by `change_key_case`.
///
/// Flags combine with `|`. Whatever the combination, conversions run in the
/// fixed order underscore, camel caps, upper, lower.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct CaseMask(u8);

impl CaseMask {
    /// Lower-case every character.
    pub const LOWER: CaseMask = CaseMask(CASE_LOWER);
    /// Upper-case every character.
    pub const UPPER: CaseMask = CaseMask(CASE_UPPER);
    /// Join alphanumeric segments into camelCase.
    pub const CAMEL_CAPS: CaseMask = CaseMask(CASE_CAMEL_CAPS);
    /// Insert `_` between a lowercase letter and a following uppercase letter or digit.
    pub const UNDERSCORE: CaseMask = CaseMask(CASE_UNDERSCORE);

    /// Mask with no flags set; leaves keys unchanged.
    pub const fn empty() -> Self {
        CaseMask(0)
    }

    /// Build a mask from raw bits, dropping undefined ones.
    pub const fn from_bits_truncate(bits: u8) -> Self {
        CaseMask(bits & CASE_ALL)
    }

    /// Raw bits of this mask.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether every flag of `other` is set in `self`.
    pub const fn contains(self, other: CaseMask) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether no flag is set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl Default for CaseMask {
    fn default() -> Self {
        CaseMask::LOWER
    }
}

impl From<u8> for CaseMask {
    fn from(bits: u8) -> Self {
        CaseMask::from_bits_truncate(bits)
    }
}

impl From<CaseMask> for u8 {
    fn from(mask: CaseMask) -> Self {
        mask.0
    }
}

impl BitOr for CaseMask {
    type Output = CaseMask;

    fn bitor(self, rhs: CaseMask) -> CaseMask {
        CaseMask(self.0 | rhs.0)
    }
}

impl BitOrAssign for CaseMask {
    fn bitor_assign(&mut self, rhs: CaseMask) {
        self.0 |= rhs.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_values_are_stable() {
        assert_eq!(CaseMask::LOWER.bits(), 1);
        assert_eq!(CaseMask::UPPER.bits(), 2);
        assert_eq!(CaseMask::CAMEL_CAPS.bits(), 4);
        assert_eq!(CaseMask::UNDERSCORE.bits(), 8);
    }

    #[test]
    fn flags_combine() {
        let mask = CaseMask::UNDERSCORE | CaseMask::UPPER;
        assert!(mask.contains(CaseMask::UNDERSCORE));
        assert!(mask.contains(CaseMask::UPPER));
        assert!(!mask.contains(CaseMask::LOWER));

        let mut mask = CaseMask::empty();
        assert!(mask.is_empty());
        mask |= CaseMask::CAMEL_CAPS;
        assert_eq!(mask, CaseMask::CAMEL_CAPS);
    }

    #[test]
    fn default_is_lower() {
        assert_eq!(CaseMask::default(), CaseMask::LOWER);
    }

    #[test]
    fn truncates_unknown_bits() {
        assert_eq!(CaseMask::from_bits_truncate(0xFF).bits(), 15);
    }

    #[test]
    fn serializes_as_bits() {
        let mask: CaseMask = serde_json::from_str("9").unwrap();
        assert_eq!(mask, CaseMask::LOWER | CaseMask::UNDERSCORE);
        assert_eq!(serde_json::to_string(&CaseMask::UPPER).unwrap(), "2");
        let mask: CaseMask = serde_json::from_str("240").unwrap();
        assert!(mask.is_empty());
    }
}
