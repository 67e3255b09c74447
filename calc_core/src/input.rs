//! # Input Coercion
//!
//! Lenient parsing for the numeric form fields. The estimator never reports
//! a parse error to the user: text that does not start with a number becomes
//! `0`, and negative values are clamped to `0`.
//!
//! Parsing reads the longest numeric prefix, so `"3m"` is `3` and `"2.5 x"`
//! is `2.5`.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::input::{parse_length, parse_quantity};
//!
//! assert_eq!(parse_length("2.5"), 2.5);
//! assert_eq!(parse_length("abc"), 0.0);
//! assert_eq!(parse_quantity("4 pz"), 4);
//! ```

/// Parse a length field (meters).
pub fn parse_length(text: &str) -> f64 {
    non_negative(parse_float_prefix(text))
}

/// Parse the unit price field (currency per kg).
pub fn parse_price(text: &str) -> f64 {
    non_negative(parse_float_prefix(text))
}

/// Parse a quantity field (pieces).
pub fn parse_quantity(text: &str) -> u32 {
    match parse_int_prefix(text) {
        Some(n) if n > 0 => u32::try_from(n).unwrap_or(u32::MAX),
        _ => 0,
    }
}

/// Clamp a parsed value into the accepted range: finite and not negative.
pub fn non_negative(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v,
        _ => 0.0,
    }
}

/// Parse the longest leading decimal number (sign, digits, fraction, exponent).
///
/// Returns `None` when no digits lead the text.
pub fn parse_float_prefix(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    // Exponent only counts when digits follow it
    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().ok()
}

/// Parse the longest leading integer (sign and digits).
pub fn parse_int_prefix(text: &str) -> Option<i64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let sign_len = usize::from(matches!(bytes.first(), Some(b'+') | Some(b'-')));
    let digits = count_digits(&bytes[sign_len..]);
    if digits == 0 {
        return None;
    }

    let literal = &s[..sign_len + digits];
    match literal.parse::<i64>() {
        Ok(n) => Some(n),
        // Too many digits for i64: saturate in the literal's direction
        Err(_) if literal.starts_with('-') => Some(i64::MIN),
        Err(_) => Some(i64::MAX),
    }
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_float_prefix() {
        assert_eq!(parse_float_prefix("3"), Some(3.0));
        assert_eq!(parse_float_prefix("  2.5"), Some(2.5));
        assert_eq!(parse_float_prefix("2.5m"), Some(2.5));
        assert_eq!(parse_float_prefix(".5"), Some(0.5));
        assert_eq!(parse_float_prefix("4."), Some(4.0));
        assert_eq!(parse_float_prefix("-1.5"), Some(-1.5));
        assert_eq!(parse_float_prefix("1e3"), Some(1000.0));
        assert_eq!(parse_float_prefix("1e"), Some(1.0));
        assert_eq!(parse_float_prefix("1.5e-1x"), Some(0.15));
        assert_eq!(parse_float_prefix(""), None);
        assert_eq!(parse_float_prefix("."), None);
        assert_eq!(parse_float_prefix("-"), None);
        assert_eq!(parse_float_prefix("abc"), None);
    }

    #[test]
    fn test_parse_int_prefix() {
        assert_eq!(parse_int_prefix("7"), Some(7));
        assert_eq!(parse_int_prefix("3.9"), Some(3));
        assert_eq!(parse_int_prefix(" 12 pz"), Some(12));
        assert_eq!(parse_int_prefix("-4"), Some(-4));
        assert_eq!(parse_int_prefix("99999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_int_prefix("x1"), None);
    }

    #[test]
    fn test_parse_length_falls_back_to_zero() {
        assert_eq!(parse_length("3"), 3.0);
        assert_eq!(parse_length(""), 0.0);
        assert_eq!(parse_length("m"), 0.0);
        assert_eq!(parse_length("-2"), 0.0);
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("28"), 28.0);
        assert_eq!(parse_price("32.5"), 32.5);
        assert_eq!(parse_price("-5"), 0.0);
        assert_eq!(parse_price("precio"), 0.0);
        assert_eq!(parse_price("1e400"), 0.0);
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("2"), 2);
        assert_eq!(parse_quantity("2.7"), 2);
        assert_eq!(parse_quantity(""), 0);
        assert_eq!(parse_quantity("-3"), 0);
        assert_eq!(parse_quantity("99999999999"), u32::MAX);
    }
}
