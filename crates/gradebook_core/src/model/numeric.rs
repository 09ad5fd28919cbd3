//! Numeric parsing for raw form input.
//!
//! Mark cells accept anything the user types and keep the leading numeric
//! prefix (`"42abc"` -> 42, `""` -> NaN). Max-marks input must be a number
//! in full.

use once_cell::sync::Lazy;
use regex::Regex;

static LEADING_NUMBER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)")
        .expect("valid leading number regex")
});
static FULL_NUMBER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)$")
        .expect("valid full number regex")
});

/// Parses the leading numeric prefix of `raw`.
///
/// Returns `NaN` when no prefix is a number. Leading whitespace is skipped.
pub fn parse_leading_number(raw: &str) -> f64 {
    LEADING_NUMBER_RE
        .find(raw.trim_start())
        .map_or(f64::NAN, |m| literal_to_f64(m.as_str()))
}

/// Parses `raw` as a number only when the whole trimmed input is numeric.
pub fn parse_strict_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if !FULL_NUMBER_RE.is_match(trimmed) {
        return None;
    }
    Some(literal_to_f64(trimmed))
}

fn literal_to_f64(literal: &str) -> f64 {
    match literal {
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        other => other.parse::<f64>().unwrap_or(f64::NAN),
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_leading_number, parse_strict_number};

    #[test]
    fn leading_number_keeps_numeric_prefix() {
        assert_eq!(parse_leading_number("42"), 42.0);
        assert_eq!(parse_leading_number("  17.5"), 17.5);
        assert_eq!(parse_leading_number("42abc"), 42.0);
        assert_eq!(parse_leading_number("-3"), -3.0);
        assert_eq!(parse_leading_number(".5"), 0.5);
        assert_eq!(parse_leading_number("1e2"), 100.0);
        assert_eq!(parse_leading_number("1e"), 1.0);
    }

    #[test]
    fn leading_number_without_digits_is_nan() {
        assert!(parse_leading_number("").is_nan());
        assert!(parse_leading_number("abc").is_nan());
        assert!(parse_leading_number("-").is_nan());
    }

    #[test]
    fn strict_number_requires_whole_input() {
        assert_eq!(parse_strict_number(" 50 "), Some(50.0));
        assert_eq!(parse_strict_number("12.5"), Some(12.5));
        assert_eq!(parse_strict_number("12abc"), None);
        assert_eq!(parse_strict_number(""), None);
        assert_eq!(parse_strict_number("Infinity"), Some(f64::INFINITY));
    }
}
