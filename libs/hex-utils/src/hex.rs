//! Hex byte classification and conversion
//!
//! Helpers used by the hex view to decide how a single byte cell is shown.
//! None of these functions fail: malformed input degrades to NaN or `false`.

use crate::radix;

/// Convert a hex string to its numeric value
///
/// Input without a `0x` marker is prefixed before parsing, so `"2A"` and
/// `"0x2A"` both give 42. Malformed input gives NaN.
///
/// # Examples
/// ```
/// use hex_utils::hex2num;
/// assert_eq!(hex2num("2A"), 42.0);
/// assert_eq!(hex2num("0x2A"), 42.0);
/// assert!(hex2num("zz").is_nan());
/// ```
pub fn hex2num(hex: &str) -> f64 {
    if hex.contains("0x") {
        radix::parse_hex_literal(hex)
    } else {
        radix::parse_hex_literal(&format!("0x{}", hex))
    }
}

/// True only for the literal two-character string `"00"`
///
/// This is a string comparison, not a value check: `"0"` and `"0x00"` are false.
pub fn is_hex_zeroed(hex: &str) -> bool {
    hex == "00"
}

/// Classify a hex byte for the ASCII column
///
/// True for the zero byte `"00"`, or when the value is `<= 0` or `> 127`.
/// NaN (malformed input) is false.
pub fn is_hex_ascii(hex: &str) -> bool {
    if is_hex_zeroed(hex) {
        return true;
    }
    let value = hex2num(hex);
    value <= 0.0 || value > 127.0
}

/// Check that `hex` is the canonical base-16 spelling of its own value
///
/// The text is parsed as a base-16 integer and re-encoded in lowercase; the
/// check passes when the re-encoding equals the lowercased input. Prefixes,
/// redundant leading zeros and trailing garbage all fail.
///
/// # Examples
/// ```
/// use hex_utils::is_valid_hex;
/// assert!(is_valid_hex("2a"));
/// assert!(is_valid_hex("2A"));
/// assert!(!is_valid_hex("0x2a"));
/// assert!(!is_valid_hex("zz"));
/// ```
pub fn is_valid_hex(hex: &str) -> bool {
    radix::format_hex(radix::parse_int_hex(hex)) == hex.to_lowercase()
}
