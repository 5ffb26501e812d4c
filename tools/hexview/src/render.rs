//! Text rendering for hexview output

use colored::*;
use hex_utils::{hex2num, is_hex_ascii, is_hex_zeroed, is_valid_hex, parse_ascii, PLACEHOLDER_GLYPH};

/// Default number of bytes per dump row
pub const DEFAULT_WIDTH: usize = 16;

/// Format a number the way the hex view prints it (`NaN`, integers without `.0`)
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else if value.fract() == 0.0 && value.abs() < 1e21 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

/// ASCII column glyph for one byte token
///
/// Control characters would break the row layout, so they use the placeholder too.
pub fn glyph(token: &str) -> String {
    let text = parse_ascii(hex2num(token));
    if text.chars().all(|c| c.is_ascii_control()) {
        PLACEHOLDER_GLYPH.to_string()
    } else {
        text
    }
}

/// Label/value rows for `hexview check`
pub fn check_rows(hex: &str) -> Vec<(&'static str, String)> {
    let num = hex2num(hex);
    vec![
        ("number", format_number(num)),
        ("zeroed", is_hex_zeroed(hex).to_string()),
        ("non-printable", is_hex_ascii(hex).to_string()),
        ("glyph", parse_ascii(num)),
        ("canonical", is_valid_hex(hex).to_string()),
    ]
}

/// One dump row: offset, hex tokens padded to `width`, ASCII column
pub fn dump_line(offset: usize, tokens: &[String], width: usize) -> String {
    let hex: Vec<&str> = tokens.iter().map(String::as_str).collect();
    let ascii: String = tokens.iter().map(|token| glyph(token)).collect();
    format!(
        "{:08x}  {:<pad$}  |{}|",
        offset,
        hex.join(" "),
        ascii,
        pad = width.saturating_mul(3).saturating_sub(1)
    )
}

/// Every dump row for `tokens`
pub fn dump_lines(tokens: &[String], width: usize) -> Vec<String> {
    let width = width.max(1);
    tokens
        .chunks(width)
        .enumerate()
        .map(|(row, chunk)| dump_line(row * width, chunk, width))
        .collect()
}

/// Colorize a single token: zero bytes dimmed, printable bytes green
pub fn colorize_token(token: &str) -> ColoredString {
    if is_hex_zeroed(token) {
        token.dimmed()
    } else if is_hex_ascii(token) {
        token.normal()
    } else {
        token.green()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(65.0), "65");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(0.5), "0.5");
    }

    #[test]
    fn test_glyph() {
        assert_eq!(glyph("41"), "A");
        assert_eq!(glyph("7e"), "~");
        assert_eq!(glyph("00"), PLACEHOLDER_GLYPH);
        assert_eq!(glyph("0A"), PLACEHOLDER_GLYPH);
        assert_eq!(glyph("7F"), PLACEHOLDER_GLYPH);
        assert_eq!(glyph("C3"), PLACEHOLDER_GLYPH);
        assert_eq!(glyph("zz"), PLACEHOLDER_GLYPH);
    }

    #[test]
    fn test_check_rows() {
        let rows = check_rows("ff");
        assert_eq!(rows[0], ("number", "255".to_string()));
        assert_eq!(rows[1], ("zeroed", "false".to_string()));
        assert_eq!(rows[2], ("non-printable", "true".to_string()));
        assert_eq!(rows[3], ("glyph", PLACEHOLDER_GLYPH.to_string()));
        assert_eq!(rows[4], ("canonical", "true".to_string()));

        let rows = check_rows("00");
        assert_eq!(rows[1].1, "true");
        assert_eq!(rows[4].1, "false");
    }

    #[test]
    fn test_dump_line_pads_short_rows() {
        let line = dump_line(16, &tokens(&["48", "69"]), 4);
        assert_eq!(line, "00000010  48 69        |Hi|");
    }

    #[test]
    fn test_dump_lines() {
        let lines = dump_lines(&tokens(&["48", "65", "6C", "6C", "6F", "00"]), 4);
        assert_eq!(
            lines,
            vec![
                "00000000  48 65 6C 6C  |Hell|".to_string(),
                format!("00000004  6F 00        |o{}|", PLACEHOLDER_GLYPH),
            ]
        );
    }

    #[test]
    fn test_dump_lines_zero_width_is_one() {
        let lines = dump_lines(&tokens(&["41", "42"]), 0);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "00000001  42  |B|");
    }
}
