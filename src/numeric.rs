//! Leading-number parsers for numeric (-n) and human-numeric (-h) modes.
//!
//! Both parsers accept only unsigned decimal prefixes (digits and dots);
//! signs and exponents are not recognised. `None` means the key has no
//! usable numeric prefix, which the comparator treats as "sorts before any
//! number".

use crate::key::skip_leading_blanks;

/// Length of the leading run of ASCII digits and dots
#[inline]
fn numeric_prefix_len(s: &str) -> usize {
    s.bytes()
        .take_while(|b| b.is_ascii_digit() || *b == b'.')
        .count()
}

/// Parse the leading decimal number of `s`, skipping leading blanks
pub fn parse_numeric(s: &str) -> Option<f64> {
    let (s, _) = skip_leading_blanks(s);
    let end = numeric_prefix_len(s);
    if end == 0 {
        return None;
    }
    s[..end].parse::<f64>().ok()
}

/// Binary multiplier for a size suffix: K=1024 up to E=1024^6
fn unit_multiplier(unit: u8) -> Option<f64> {
    let power = match unit.to_ascii_uppercase() {
        b'K' => 1,
        b'M' => 2,
        b'G' => 3,
        b'T' => 4,
        b'P' => 5,
        b'E' => 6,
        _ => return None,
    };
    Some(1024f64.powi(power))
}

/// Parse a human readable size such as `2K` or `1.5G`
///
/// The suffix is the single character right after the number. An unknown
/// suffix leaves the value unscaled and anything past the suffix is ignored.
pub fn parse_human(s: &str) -> Option<f64> {
    let (s, _) = skip_leading_blanks(s);
    let end = numeric_prefix_len(s);
    if end == 0 {
        return None;
    }

    let value = s[..end].parse::<f64>().ok()?;
    match s.as_bytes().get(end).copied().and_then(unit_multiplier) {
        Some(multiplier) => Some(value * multiplier),
        None => Some(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numeric_prefix() {
        assert_eq!(parse_numeric("42"), Some(42.0));
        assert_eq!(parse_numeric("  \t3.25 apples"), Some(3.25));
        assert_eq!(parse_numeric("10abc"), Some(10.0));
        assert_eq!(parse_numeric("007"), Some(7.0));
    }

    #[test]
    fn test_parse_numeric_rejects() {
        assert_eq!(parse_numeric(""), None);
        assert_eq!(parse_numeric("   "), None);
        assert_eq!(parse_numeric("abc"), None);
        assert_eq!(parse_numeric("-5"), None);
        assert_eq!(parse_numeric("1.2.3"), None);
        assert_eq!(parse_numeric("."), None);
    }

    #[test]
    fn test_parse_human_units() {
        assert_eq!(parse_human("1K"), Some(1024.0));
        assert_eq!(parse_human("2M"), Some(2.0 * 1024.0 * 1024.0));
        assert_eq!(parse_human("3.5G"), Some(3.5 * (1u64 << 30) as f64));
        assert_eq!(parse_human("1t"), Some((1u64 << 40) as f64));
        assert_eq!(parse_human("1P"), Some((1u64 << 50) as f64));
        assert_eq!(parse_human("1E"), Some((1u64 << 60) as f64));
    }

    #[test]
    fn test_parse_human_trailing_text_ignored() {
        assert_eq!(parse_human("3.5Gв"), Some(3.5 * (1u64 << 30) as f64));
        assert_eq!(parse_human(" 4KiB"), Some(4096.0));
    }

    #[test]
    fn test_parse_human_without_unit() {
        assert_eq!(parse_human("512"), Some(512.0));
        assert_eq!(parse_human("12abc"), Some(12.0));
        assert_eq!(parse_human("7 K"), Some(7.0));
    }

    #[test]
    fn test_parse_human_rejects() {
        assert_eq!(parse_human("abc"), None);
        assert_eq!(parse_human("K"), None);
        assert_eq!(parse_human(""), None);
        assert_eq!(parse_human("1.2.3K"), None);
    }
}
