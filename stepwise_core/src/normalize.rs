//! Text normalization shared by intent matching and keyword rules.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// Anything that is neither a word character nor whitespace.
pub const PUNCTUATION_PATTERN: &str = r"[^\w\s]";

#[expect(clippy::expect_used, reason = "Pattern is a compile-time constant")]
static PUNCTUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(PUNCTUATION_PATTERN).expect("punctuation pattern is valid"));

/// Lowercase `text`, strip punctuation and trim surrounding whitespace.
///
/// Idempotent: `normalize(&normalize(s)) == normalize(s)`.
#[must_use]
pub fn normalize(text: &str) -> String {
    let lower = text.to_lowercase();
    PUNCTUATION.replace_all(&lower, "").trim().to_string()
}

/// Split an already normalized string into its distinct words.
#[must_use]
pub fn tokenize(normalized: &str) -> HashSet<&str> {
    normalized.split_whitespace().collect()
}
