//! Base-16 number parsing and formatting with double-precision semantics
//!
//! The front-end treats every hex value as an IEEE-754 double, so parsing
//! here yields `f64` (NaN for malformed text) and rounds values wider than
//! 53 bits to the nearest double, exactly like the host's number parser.
//!
//! Two parsers are provided:
//! - [`parse_hex_literal`]: whole-string numeric literal (`0x` + digits, surrounding whitespace allowed)
//! - [`parse_int_hex`]: prefix parse (sign, optional `0x`, longest run of hex digits)

/// Whitespace skipped around numeric text
fn is_number_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// Leading run of hex digit values
fn leading_digits(text: &str) -> Vec<u8> {
    text.chars()
        .map_while(|c| c.to_digit(16).map(|d| d as u8))
        .collect()
}

fn strip_hex_prefix(text: &str) -> &str {
    text.strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text)
}

/// Convert hex digit values to the nearest double
fn digits_to_f64(digits: &[u8]) -> f64 {
    let significant = match digits.iter().position(|&d| d != 0) {
        Some(first) => &digits[first..],
        None => return 0.0,
    };

    // u128 -> f64 rounds to nearest, ties to even
    if significant.len() <= 32 {
        return significant
            .iter()
            .fold(0u128, |acc, &d| (acc << 4) | u128::from(d)) as f64;
    }

    // Keep 120 bits plus a sticky bit for everything below them
    let (head, tail) = significant.split_at(30);
    let mut mantissa = head
        .iter()
        .fold(0u128, |acc, &d| (acc << 4) | u128::from(d));
    mantissa = (mantissa << 1) | u128::from(tail.iter().any(|&d| d != 0));

    let exponent = (tail.len().min(4096) * 4) as i32 - 1;
    (mantissa as f64) * 2f64.powi(exponent)
}

/// Parse a complete hex numeric literal (`0x2A`, ` 0XfF `)
///
/// Returns NaN unless the trimmed text is `0x`/`0X` followed by at least
/// one hex digit and nothing else.
pub fn parse_hex_literal(text: &str) -> f64 {
    let trimmed = text.trim_matches(is_number_whitespace);
    let body = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(body) => body,
        None => return f64::NAN,
    };

    let digits = leading_digits(body);
    if digits.is_empty() || digits.len() != body.len() {
        return f64::NAN;
    }
    digits_to_f64(&digits)
}

/// Parse the leading base-16 integer of `text`
///
/// Skips leading whitespace, accepts one sign and an optional `0x`/`0X`,
/// then consumes the longest run of hex digits. Trailing garbage is
/// ignored; no digits at all yields NaN.
pub fn parse_int_hex(text: &str) -> f64 {
    let text = text.trim_start_matches(is_number_whitespace);
    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let digits = leading_digits(strip_hex_prefix(unsigned));
    if digits.is_empty() {
        return f64::NAN;
    }

    let value = digits_to_f64(&digits);
    if negative {
        -value
    } else {
        value
    }
}

/// Render an integral double in lowercase base 16
///
/// NaN renders as `NaN`, infinities as `Infinity` / `-Infinity`, and both
/// zeros as `0`. Fractional parts are truncated.
pub fn format_hex(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }

    let magnitude = value.abs().trunc();
    let digits = if magnitude < 18_446_744_073_709_551_616.0 {
        format!("{:x}", magnitude as u64)
    } else {
        // magnitude >= 2^64: mantissa * 2^exponent with exponent >= 12
        let bits = magnitude.to_bits();
        let exponent = ((bits >> 52) & 0x7ff) as i32 - 1075;
        let mantissa = (bits & ((1u64 << 52) - 1)) | (1u64 << 52);
        format!(
            "{:x}{}",
            mantissa << (exponent % 4),
            "0".repeat((exponent / 4) as usize)
        )
    };

    if value < 0.0 && magnitude != 0.0 {
        format!("-{}", digits)
    } else {
        digits
    }
}
