// ABOUTME: Shared text and number parsing helpers used by the extraction strategies.
// ABOUTME: Handles thousands separators, digit stripping, whitespace squeezing, and safe truncation.

//! Number and text parsing helpers.
//!
//! Statistics pages render counts as localized text (`"1,234명"`, `"오늘 12"`),
//! so every strategy funnels element text through these helpers. Parse
//! failures resolve to "no value" (or 0 where the caller defaults), never to
//! an error.

use once_cell::sync::Lazy;
use regex::Regex;

/// First run of digits, optionally with comma thousands separators.
static FIRST_NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d[\d,]*").unwrap());

/// Extracts the first number from text, tolerating comma separators.
///
/// Returns `None` when the text contains no digit run or the run does not fit
/// in a `u64`.
pub fn first_number(text: &str) -> Option<u64> {
    let m = FIRST_NUMBER_RE.find(text)?;
    let digits: String = m.as_str().chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

/// Strips every non-digit character and parses what remains, defaulting to 0.
///
/// `"1,234명"` → 1234, `"조회 56회"` → 56, `"없음"` → 0. Also returns 0 when
/// the concatenated digits overflow a `u64`.
pub fn digits_value(text: &str) -> u64 {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

/// Collapses whitespace runs to single spaces and trims the ends.
pub fn squeeze_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncates a string to at most `max` characters.
///
/// Operates on characters, not bytes, so multibyte titles never split a
/// code point or panic.
pub fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
