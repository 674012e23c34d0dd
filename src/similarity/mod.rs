//! Fuzzy string similarity
//!
//! Scores two text fragments on a 0-100 scale using Levenshtein distance.
//!
//! ## Measures
//!
//! - **Ratio**: edit-distance similarity over the whole of both strings
//! - **Partial ratio**: the shorter string is compared with same-length
//!   windows of the longer one, aligned on their common character runs, and
//!   the best window wins, so a short query inside a long description still
//!   scores highly
//!
//! Both measures are case-insensitive (NFC-normalized, then lowercased),
//! symmetric, and return 0 when either side is empty.

use std::borrow::Cow;
use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use unicode_normalization::{IsNormalized, UnicodeNormalization, is_nfc_quick};

/// Highest possible similarity score.
pub const MAX_SCORE: u8 = 100;

/// Which similarity measure to apply to a pair of fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SimilarityMeasure {
    /// Full-string edit-distance ratio
    #[default]
    Ratio,
    /// Best-aligned substring ratio
    Partial,
}

impl SimilarityMeasure {
    /// Score two strings with this measure.
    #[must_use]
    pub fn score(self, a: &str, b: &str) -> u8 {
        match self {
            Self::Ratio => ratio(a, b),
            Self::Partial => partial_ratio(a, b),
        }
    }

    /// Parse a measure name as used in config files and environment variables.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "ratio" | "full" => Some(Self::Ratio),
            "partial" | "partial_ratio" => Some(Self::Partial),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ratio => "ratio",
            Self::Partial => "partial",
        }
    }
}

/// Similarity used by search: the partial (best-alignment) ratio.
#[must_use]
pub fn score(a: &str, b: &str) -> u8 {
    partial_ratio(a, b)
}

/// Full-string similarity in `[0, 100]`.
#[must_use]
pub fn ratio(a: &str, b: &str) -> u8 {
    let a = normalize(a);
    let b = normalize(b);
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    levenshtein_ratio(&a, &b)
}

/// Best-alignment similarity in `[0, 100]`.
///
/// The shorter string is compared against windows of the longer string
/// having the same character length. Only windows aligned with a common run
/// of characters are tried, so the cost tracks the number of matching blocks
/// instead of every offset. Strings of equal length are compared whole,
/// which keeps the measure symmetric.
#[must_use]
pub fn partial_ratio(a: &str, b: &str) -> u8 {
    let a = normalize(a);
    let b = normalize(b);
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    if a_chars.len() == b_chars.len() {
        return levenshtein_ratio(&a, &b);
    }

    let (needle, haystack, needle_chars, haystack_chars) = if a_chars.len() < b_chars.len() {
        (a.as_str(), b.as_str(), &a_chars, &b_chars)
    } else {
        (b.as_str(), a.as_str(), &b_chars, &a_chars)
    };

    if haystack.contains(needle) {
        return MAX_SCORE;
    }

    let width = needle_chars.len();
    let mut tried = HashSet::new();
    let mut best = 0;
    for (needle_start, haystack_start, _) in matching_blocks(needle_chars, haystack_chars) {
        let start = haystack_start
            .saturating_sub(needle_start)
            .min(haystack_chars.len() - width);
        if !tried.insert(start) {
            continue;
        }
        let window: String = haystack_chars[start..start + width].iter().collect();
        best = best.max(levenshtein_ratio(needle, &window));
        if best == MAX_SCORE {
            break;
        }
    }
    best
}

/// Common runs of `a` and `b` as `(a_start, b_start, len)`, ordered by
/// position in `a`.
///
/// The longest common run is taken first, then the parts to its left and
/// right are searched the same way.
fn matching_blocks(a: &[char], b: &[char]) -> Vec<(usize, usize, usize)> {
    let mut positions: HashMap<char, Vec<usize>> = HashMap::new();
    for (j, ch) in b.iter().enumerate() {
        positions.entry(*ch).or_default().push(j);
    }

    let mut blocks = Vec::new();
    let mut pending = vec![(0, a.len(), 0, b.len())];
    while let Some((a_lo, a_hi, b_lo, b_hi)) = pending.pop() {
        let (i, j, len) = longest_match(a, &positions, (a_lo, a_hi), (b_lo, b_hi));
        if len == 0 {
            continue;
        }
        blocks.push((i, j, len));
        if a_lo < i && b_lo < j {
            pending.push((a_lo, i, b_lo, j));
        }
        if i + len < a_hi && j + len < b_hi {
            pending.push((i + len, a_hi, j + len, b_hi));
        }
    }
    blocks.sort_unstable();
    blocks
}

/// Longest run shared by `a[a_range]` and the indexed string within
/// `b_range`. Ties go to the earliest start in `a`, then in `b`.
fn longest_match(
    a: &[char],
    positions: &HashMap<char, Vec<usize>>,
    (a_lo, a_hi): (usize, usize),
    (b_lo, b_hi): (usize, usize),
) -> (usize, usize, usize) {
    let mut best = (a_lo, b_lo, 0);
    // run length of the match ending at each b index, for the previous a index
    let mut runs: HashMap<usize, usize> = HashMap::new();
    for (i, ch) in a.iter().enumerate().take(a_hi).skip(a_lo) {
        let mut next_runs = HashMap::new();
        if let Some(js) = positions.get(ch) {
            let first = js.partition_point(|&j| j < b_lo);
            for &j in js[first..].iter().take_while(|&&j| j < b_hi) {
                let len = j
                    .checked_sub(1)
                    .and_then(|prev| runs.get(&prev))
                    .copied()
                    .unwrap_or(0)
                    + 1;
                next_runs.insert(j, len);
                if len > best.2 {
                    best = (i + 1 - len, j + 1 - len, len);
                }
            }
        }
        runs = next_runs;
    }
    best
}

/// Lowercase after canonical composition so "é" and "e\u{301}" compare equal.
#[must_use]
pub fn normalize(text: &str) -> String {
    compose(text).to_lowercase()
}

/// Canonical composition (NFC), borrowing text that is already composed.
#[must_use]
pub fn compose(text: &str) -> Cow<'_, str> {
    match is_nfc_quick(text.chars()) {
        IsNormalized::Yes => Cow::Borrowed(text),
        IsNormalized::No | IsNormalized::Maybe => Cow::Owned(text.nfc().collect()),
    }
}

#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn levenshtein_ratio(a: &str, b: &str) -> u8 {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 0;
    }
    let distance = strsim::levenshtein(a, b);
    let similarity = 1.0 - distance as f64 / longest as f64;
    (similarity * f64::from(MAX_SCORE)).round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_strings_score_100() {
        assert_eq!(ratio("Chicken Soup", "chicken soup"), 100);
        assert_eq!(partial_ratio("Chicken Soup", "CHICKEN SOUP"), 100);
    }

    #[test]
    fn test_empty_scores_zero() {
        assert_eq!(ratio("", "anything"), 0);
        assert_eq!(partial_ratio("anything", ""), 0);
        assert_eq!(score("", ""), 0);
    }

    #[test]
    fn test_partial_finds_query_inside_long_field() {
        assert_eq!(partial_ratio("chicken", "Spicy Chicken Curry"), 100);
        assert!(ratio("chicken", "Spicy Chicken Curry") < 70);
    }

    #[test]
    fn test_partial_tolerates_typos() {
        let typo = partial_ratio("chickn", "Spicy Chicken Curry");
        assert!(typo > 70, "typo scored {typo}");
    }

    #[test]
    fn test_unrelated_text_scores_low() {
        assert!(partial_ratio("chicken", "Vegetable Stew") <= 70);
    }

    #[test]
    fn test_partial_aligns_long_query_in_long_text() {
        let text = "Season early, taste often, and rest your meat. ".repeat(53);
        let query = text[10..160].replacen("taste", "tasty", 1);
        assert!(text.chars().count() > 2400);
        assert_eq!(query.chars().count(), 150);

        let score = partial_ratio(&query, &text);
        assert!(score >= 95, "long query scored {score}");
        assert_eq!(score, partial_ratio(&text, &query));
    }

    #[test]
    fn test_partial_without_common_characters() {
        assert_eq!(partial_ratio("xyz", "abcdefgh"), 0);
    }

    #[test]
    fn test_matching_blocks_are_ordered_and_disjoint() {
        let a: Vec<char> = "chiken-soup".chars().collect();
        let b: Vec<char> = "chicken-soup".chars().collect();
        let blocks = matching_blocks(&a, &b);
        assert_eq!(blocks, vec![(0, 0, 3), (3, 4, 8)]);
    }

    #[test]
    fn test_symmetry() {
        let pairs = [
            ("garlic", "garlic bread"),
            ("soup", "stew"),
            ("abc", "cba"),
            ("tomato basil", "basil tomato"),
        ];
        for (a, b) in pairs {
            assert_eq!(ratio(a, b), ratio(b, a));
            assert_eq!(partial_ratio(a, b), partial_ratio(b, a));
        }
    }

    #[test]
    fn test_unicode_normalization() {
        assert_eq!(ratio("cr\u{e8}me", "cre\u{300}me"), 100);
        assert_eq!(partial_ratio("CR\u{c8}ME", "cr\u{e8}me br\u{fb}l\u{e9}e"), 100);
    }

    #[test]
    fn test_compose_borrows_composed_text() {
        assert!(matches!(compose("cr\u{e8}me"), Cow::Borrowed(_)));
        assert_eq!(compose("cre\u{300}me"), "cr\u{e8}me");
    }

    #[test]
    fn test_ratio_counts_characters_not_bytes() {
        // one substitution over four characters
        assert_eq!(ratio("café", "cafe"), 75);
    }

    #[test]
    fn test_measure_dispatch() {
        assert_eq!(SimilarityMeasure::Partial.score("soup", "chicken soup"), 100);
        assert_eq!(
            SimilarityMeasure::Ratio.score("soup", "chicken soup"),
            ratio("soup", "chicken soup")
        );
    }

    #[test]
    fn test_measure_from_name() {
        assert_eq!(SimilarityMeasure::from_name("Partial"), Some(SimilarityMeasure::Partial));
        assert_eq!(SimilarityMeasure::from_name(" ratio "), Some(SimilarityMeasure::Ratio));
        assert_eq!(SimilarityMeasure::from_name("jaro"), None);
    }
}
