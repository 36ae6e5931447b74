// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query normalization: raw text in, canonical tokens out.
//!
//! The same `tokenize` runs over queries, dictionary words, and record fields.
//! That is the whole trick: "Cars!" in a query and "car" in a tag both land on
//! `car`, so every later stage compares like with like.
//!
//! # Pipeline
//!
//! 1. Fold: lowercase, strip diacritics, turn every non-letter into a space
//! 2. Split on whitespace
//! 3. Drop stopwords
//! 4. Singularize (irregular table first, then suffix rules)
//! 5. Drop anything that singularized into a stopword
//!
//! Tokens of three characters or fewer skip the suffix rules. Without that
//! guard "bus" becomes "bu" and "gas" becomes "ga".
//!
//! # Idempotence
//!
//! `tokenize(tokenize(x).join(" ")) == tokenize(x)`. Folded output is
//! letters-only, stopwords are removed after singularization, and
//! singularization runs to a fixpoint, so a second pass has nothing to do.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Words that carry no signal in an asset query.
///
/// The tail holds contraction fragments: folding turns "children's" into
/// "children s", and a lone "s" would otherwise match half the catalog.
pub const STOPWORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "in", "into", "is", "it",
    "its", "of", "on", "or", "that", "the", "this", "to", "was", "were", "with",
    // contraction fragments
    "d", "ll", "m", "re", "s", "t", "ve",
];

/// Plural → singular for nouns the suffix rules get wrong.
const IRREGULAR: &[(&str, &str)] = &[
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("people", "person"),
    ("mice", "mouse"),
    ("geese", "goose"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("oxen", "ox"),
    ("dice", "die"),
    ("leaves", "leaf"),
    ("knives", "knife"),
    ("wives", "wife"),
    ("lives", "life"),
    ("wolves", "wolf"),
    ("calves", "calf"),
    ("shelves", "shelf"),
    ("halves", "half"),
    ("loaves", "loaf"),
    ("thieves", "thief"),
    ("cacti", "cactus"),
    ("fungi", "fungus"),
    ("indices", "index"),
    ("data", "datum"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
];

/// Lowercase, strip diacritics, and reduce everything that is not a letter
/// to single spaces.
///
/// - "Café_Racer-2024!" → "cafe racer"
/// - "naïve" → "naive"
#[cfg(feature = "unicode-normalization")]
pub fn fold(value: &str) -> String {
    let stripped: String = value
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| if c.is_alphabetic() { c } else { ' ' })
        .collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Fold without diacritic stripping (no unicode-normalization dependency).
#[cfg(not(feature = "unicode-normalization"))]
pub fn fold(value: &str) -> String {
    let stripped: String = value
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphabetic() { c } else { ' ' })
        .collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Combining marks left behind by NFD decomposition.
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(&word)
}

/// Split text into normalized tokens, in order, duplicates kept.
///
/// ```ignore
/// assert_eq!(tokenize("The Red Cars"), vec!["red", "car"]);
/// assert!(tokenize("   ").is_empty());
/// ```
pub fn tokenize(value: &str) -> Vec<String> {
    fold(value)
        .split(' ')
        .filter(|w| !w.is_empty() && !is_stopword(w))
        .map(singularize)
        .filter(|w| !w.is_empty() && !is_stopword(w))
        .collect()
}

/// Tokens joined by single spaces. Empty for empty or stopword-only input.
pub fn normalize_query(value: &str) -> String {
    tokenize(value).join(" ")
}

/// Reduce an English plural to its singular form.
///
/// Applies one rule at a time until nothing changes, so the result is always
/// a fixpoint: `singularize(singularize(w)) == singularize(w)`.
pub fn singularize(word: &str) -> String {
    let mut current = word.to_string();
    // Every suffix rule shortens the word, so this terminates well before the
    // bound; the bound only guards against a cycle in the irregular table.
    for _ in 0..=word.len() {
        match singularize_once(&current) {
            Some(next) if next != current => current = next,
            _ => break,
        }
    }
    current
}

fn singularize_once(word: &str) -> Option<String> {
    if let Some(&(_, singular)) = IRREGULAR.iter().find(|(plural, _)| *plural == word) {
        return Some(singular.to_string());
    }

    if word.chars().count() <= 3 {
        return None;
    }

    // All suffixes below are ASCII, so byte slicing stays on char boundaries.
    if let Some(stem) = word.strip_suffix("ies") {
        return Some(format!("{stem}y"));
    }
    if let Some(stem) = word.strip_suffix("ves") {
        return Some(format!("{stem}f"));
    }
    if ["xes", "ses", "zes", "shes", "ches"]
        .iter()
        .any(|suffix| word.ends_with(suffix))
    {
        return Some(word[..word.len() - 2].to_string());
    }
    // "ss", "us" and "is" endings are singular already: glass, status, axis.
    if word.ends_with('s') && !["ss", "us", "is"].iter().any(|end| word.ends_with(end)) {
        return Some(word[..word.len() - 1].to_string());
    }
    None
}
