//! Display glyphs for the ASCII column

/// Shown for codes outside `1..=127`
pub const PLACEHOLDER_GLYPH: &str = "·";

/// Convert a character code to a one-character display string
///
/// Codes in `(0, 127]` map to the character with that code (fractions are
/// truncated); everything else, including 0 and NaN, maps to
/// [`PLACEHOLDER_GLYPH`].
///
/// # Examples
/// ```
/// use hex_utils::parse_ascii;
/// assert_eq!(parse_ascii(65), "A");
/// assert_eq!(parse_ascii(0), "·");
/// assert_eq!(parse_ascii(200), "·");
/// ```
pub fn parse_ascii(char_code: impl Into<f64>) -> String {
    let code = char_code.into();
    if code > 0.0 && code <= 127.0 {
        char::from(code.trunc() as u8).to_string()
    } else {
        PLACEHOLDER_GLYPH.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hex::hex2num;

    #[test]
    fn test_printable_codes() {
        assert_eq!(parse_ascii(65), "A");
        assert_eq!(parse_ascii(b'z'), "z");
        assert_eq!(parse_ascii(32u32), " ");
        assert_eq!(parse_ascii(126.9), "~");
    }

    #[test]
    fn test_out_of_range_uses_placeholder() {
        assert_eq!(parse_ascii(0), PLACEHOLDER_GLYPH);
        assert_eq!(parse_ascii(-5), PLACEHOLDER_GLYPH);
        assert_eq!(parse_ascii(128), PLACEHOLDER_GLYPH);
        assert_eq!(parse_ascii(200), PLACEHOLDER_GLYPH);
        assert_eq!(parse_ascii(f64::NAN), PLACEHOLDER_GLYPH);
    }

    #[test]
    fn test_control_codes_pass_through() {
        assert_eq!(parse_ascii(10), "\n");
        assert_eq!(parse_ascii(127), "\u{7f}");
        assert_eq!(parse_ascii(0.5), "\u{0}");
    }

    #[test]
    fn test_composes_with_hex2num() {
        assert_eq!(parse_ascii(hex2num("48")), "H");
        assert_eq!(parse_ascii(hex2num("zz")), PLACEHOLDER_GLYPH);
    }
}
