//! Constants shared across the mapkit crates

/// Default delimiter joining the segments of a nested key path.
pub const DEFAULT_DELIMITER: &str = ".";

/// Case flag selecting lower-cased keys.
pub const CASE_LOWER: u8 = 1 << 0;
/// Case flag selecting upper-cased keys.
pub const CASE_UPPER: u8 = 1 << 1;
/// Case flag selecting camelCase keys.
pub const CASE_CAMEL_CAPS: u8 = 1 << 2;
/// Case flag selecting underscored keys.
pub const CASE_UNDERSCORE: u8 = 1 << 3;
/// Mask covering every defined case flag.
pub const CASE_ALL: u8 = CASE_LOWER | CASE_UPPER | CASE_CAMEL_CAPS | CASE_UNDERSCORE;

/// Characters treated as blank by `nullify_empty_strings`.
pub const BLANK_CHARS: [char; 6] = [' ', '\t', '\n', '\r', '\0', '\x0B'];
