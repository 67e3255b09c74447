//! # Number Formatting
//!
//! Display rules for weights, lengths and money in reports and front ends.
//!
//! - Weights use a fixed number of decimals with ties rounded up
//!   (`9.65` → `9.7`, `0.25` → `0.3`).
//! - Lengths print in shortest decimal form (`1` → `1`, `2.5` → `2.5`).
//! - Money uses the es-MX grouping: `,` for thousands, `.` for decimals,
//!   at most three fraction digits and no trailing zeros (`1621.2` → `1,621.2`).

/// Digits kept past the requested precision when expanding the exact value.
const GUARD_DIGITS: usize = 24;

/// Maximum fraction digits shown for money amounts
pub const CURRENCY_MAX_FRACTION_DIGITS: usize = 3;

/// Format with a fixed number of decimals, rounding ties away from zero.
///
/// Rust's `{:.N}` rounds exact ties to even; reports need the half-up rule.
pub fn format_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let magnitude = fixed_half_up(value.abs(), digits);
    if value < 0.0 {
        format!("-{}", magnitude)
    } else {
        magnitude
    }
}

/// Weight with one decimal (e.g., `57.9`)
pub fn format_weight(kg: f64) -> String {
    format_fixed(kg, 1)
}

/// Length in shortest decimal form.
///
/// Always plain positional notation: very small or very large lengths print
/// every digit (`1e-7` → `0.0000001`) instead of switching to exponent form.
pub fn format_length(m: f64) -> String {
    format!("{}", m)
}

/// Money amount with es-MX thousands grouping, without currency symbol.
///
/// # Example
///
/// ```rust
/// use calc_core::format::format_currency;
///
/// assert_eq!(format_currency(1621.2), "1,621.2");
/// assert_eq!(format_currency(1234567.0), "1,234,567");
/// assert_eq!(format_currency(0.0), "0");
/// ```
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = fixed_half_up(value.abs(), CURRENCY_MAX_FRACTION_DIGITS);
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, f.trim_end_matches('0')),
        None => (fixed.as_str(), ""),
    };

    let mut out = group_thousands(int_part, ',');
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }

    if value < 0.0 && out.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        format!("-{}", out)
    } else {
        out
    }
}

/// Truncate the (nearly exact) decimal expansion and bump the last kept digit
/// when the first dropped digit is 5 or more.
fn fixed_half_up(value: f64, digits: usize) -> String {
    let expanded = format!("{:.*}", digits + GUARD_DIGITS, value);
    let (kept, dropped) = expanded.split_at(expanded.len() - GUARD_DIGITS);

    let mut kept = kept.as_bytes().to_vec();
    if dropped.as_bytes()[0] >= b'5' {
        increment_decimal(&mut kept);
    }
    if kept.last() == Some(&b'.') {
        kept.pop();
    }

    kept.into_iter().map(char::from).collect()
}

/// Add one unit in the last place of an ASCII decimal string.
fn increment_decimal(digits: &mut Vec<u8>) {
    let mut i = digits.len();
    while i > 0 {
        i -= 1;
        match digits[i] {
            b'.' => continue,
            b'9' => digits[i] = b'0',
            d => {
                digits[i] = d + 1;
                return;
            }
        }
    }
    digits.insert(0, b'1');
}

fn group_thousands(int_part: &str, separator: char) -> String {
    let len = int_part.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_weight() {
        assert_eq!(format_weight(9.65), "9.7");
        assert_eq!(format_weight(57.9), "57.9");
        assert_eq!(format_weight(9.65 * 3.0 * 2.0), "57.9");
        assert_eq!(format_weight(0.0), "0.0");
        assert_eq!(format_weight(69.1), "69.1");
    }

    #[test]
    fn test_format_fixed_rounds_ties_up() {
        assert_eq!(format_fixed(0.25, 1), "0.3");
        assert_eq!(format_fixed(2.5, 0), "3");
        // 9.95 is stored just below the tie
        assert_eq!(format_fixed(9.95, 1), "9.9");
        assert_eq!(format_fixed(9.96, 1), "10.0");
        assert_eq!(format_fixed(99.96, 1), "100.0");
        assert_eq!(format_fixed(-0.25, 1), "-0.3");
    }

    #[test]
    fn test_format_length() {
        assert_eq!(format_length(1.0), "1");
        assert_eq!(format_length(2.5), "2.5");
        assert_eq!(format_length(0.0), "0");
        assert_eq!(format_length(1e-7), "0.0000001");
        assert_eq!(format_length(1e21), "1000000000000000000000");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(9.65 * 3.0 * 2.0 * 28.0), "1,621.2");
        assert_eq!(format_currency(270.2), "270.2");
        assert_eq!(format_currency(1000.0), "1,000");
        assert_eq!(format_currency(999.9999), "1,000");
        assert_eq!(format_currency(1234567.891), "1,234,567.891");
        assert_eq!(format_currency(12.3456), "12.346");
        assert_eq!(format_currency(0.0), "0");
        assert_eq!(format_currency(-1500.5), "-1,500.5");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1", ','), "1");
        assert_eq!(group_thousands("123", ','), "123");
        assert_eq!(group_thousands("1234", ','), "1,234");
        assert_eq!(group_thousands("123456", ','), "123,456");
        assert_eq!(group_thousands("1234567", ','), "1,234,567");
    }
}
