//! Lenient parsing for numbers typed into forms.

/// Leading integer of `raw`, the way a browser's `parseInt` reads it:
/// surrounding whitespace is ignored, an optional sign is accepted, and
/// parsing stops at the first non-digit. `None` when there are no digits.
pub fn parse_int_prefix(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let magnitude = rest[..digits]
        .parse::<i64>()
        .unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// A non-negative count from form input. Anything unreadable is zero and
/// negatives clamp to zero.
pub fn coerce_count(raw: &str) -> u32 {
    parse_int_prefix(raw)
        .map(|n| n.clamp(0, i64::from(u32::MAX)) as u32)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_leading_integer() {
        assert_eq!(parse_int_prefix("42"), Some(42));
        assert_eq!(parse_int_prefix("  7 chapters"), Some(7));
        assert_eq!(parse_int_prefix("3.9"), Some(3));
        assert_eq!(parse_int_prefix("-5"), Some(-5));
        assert_eq!(parse_int_prefix("+8"), Some(8));
        assert_eq!(parse_int_prefix("abc"), None);
        assert_eq!(parse_int_prefix(""), None);
        assert_eq!(parse_int_prefix("-"), None);
    }

    #[test]
    fn count_falls_back_to_zero() {
        assert_eq!(coerce_count("12"), 12);
        assert_eq!(coerce_count("twelve"), 0);
        assert_eq!(coerce_count("-3"), 0);
        assert_eq!(coerce_count("99999999999"), u32::MAX);
    }
}
