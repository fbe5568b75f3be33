//! Character-level signals over raw URL text.

use once_cell::sync::Lazy;
use regex::Regex;

// Decimal digits in any script (general category Nd), e.g. `٣` or `７`.
static DECIMAL_DIGIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\p{Nd}").expect("digit pattern is valid"));

/// Substrings that show up disproportionately in phishing URLs.
pub const SUSPICIOUS_KEYWORDS: [&str; 8] = [
    "login", "verify", "secure", "account", "update", "bank", "confirm", "click",
];

pub(crate) fn count_char(s: &str, needle: char) -> u64 {
    s.chars().filter(|&c| c == needle).count() as u64
}

/// Length in Unicode scalar values, not bytes.
pub(crate) fn char_len(s: &str) -> u64 {
    s.chars().count() as u64
}

pub(crate) fn count_decimal_digits(s: &str) -> u64 {
    DECIMAL_DIGIT.find_iter(s).count() as u64
}

/// True if any [`SUSPICIOUS_KEYWORDS`] entry occurs in `s`, ignoring case.
pub fn has_suspicious_keyword(s: &str) -> bool {
    let lower = s.to_lowercase();
    SUSPICIOUS_KEYWORDS.iter().any(|kw| lower.contains(kw))
}
