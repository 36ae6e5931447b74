// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Normalizer properties.

use lumen::util::normalize::{fold, is_stopword, singularize};
use lumen::{normalize_query, tokenize};
use proptest::prelude::*;

/// Word-ish text with plurals, stopwords, accents and punctuation mixed in.
fn messy_text() -> impl Strategy<Value = String> {
    let piece = prop::sample::select(vec![
        "Cars", "bus", "buses", "the", "AND", "Café", "naïve", "statuses", "children's",
        "boxes", "leaves", "ies", "s", "glass", "Übergrößen", "2024", "--", "it's", "don't",
        "Berries", "quizzes", "wolves", "heroes", "ss", "series",
    ]);
    prop::collection::vec(piece, 0..8).prop_map(|pieces| pieces.join(" "))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// normalize(normalize(x)) == normalize(x)
    #[test]
    fn prop_normalize_idempotent_on_arbitrary_text(text in any::<String>()) {
        let once = normalize_query(&text);
        prop_assert_eq!(normalize_query(&once), once);
    }

    #[test]
    fn prop_normalize_idempotent_on_messy_words(text in messy_text()) {
        let once = normalize_query(&text);
        prop_assert_eq!(normalize_query(&once), once);
    }

    #[test]
    fn prop_singularize_is_fixpoint(word in "[a-z]{1,12}") {
        let once = singularize(&word);
        prop_assert_eq!(singularize(&once), once);
    }

    #[test]
    fn prop_tokens_are_clean(text in messy_text()) {
        for token in tokenize(&text) {
            prop_assert!(!token.is_empty());
            prop_assert!(!token.contains(' '));
            prop_assert!(!is_stopword(&token), "stopword {:?} survived", token);
            prop_assert_eq!(fold(&token), token.clone());
        }
    }

    #[test]
    fn prop_case_insensitive(text in "[a-zA-Z ]{0,30}") {
        prop_assert_eq!(normalize_query(&text), normalize_query(&text.to_uppercase()));
    }
}

#[test]
fn test_whitespace_only_normalizes_to_empty() {
    for text in ["", " ", "\t\n", "   \u{3000}  "] {
        assert!(normalize_query(text).is_empty());
    }
}
