// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance and correction against linear-scan oracles.

use super::oracles::{oracle_correct, oracle_nearest};
use lumen::fuzzy::{correct, damerau_within, near_words, nearest};
use lumen::Dictionary;
use proptest::prelude::*;

/// Short words over a tiny alphabet, so near-collisions are common.
fn small_word() -> impl Strategy<Value = String> {
    "[abcd]{0,7}"
}

fn dictionary() -> impl Strategy<Value = Dictionary> {
    prop::collection::vec("[abcd]{1,7}", 0..40)
        .prop_map(|words| Dictionary::from_texts(words.iter().map(String::as_str)))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// `damerau_within` is exactly `osa_distance` filtered by the bound.
    #[test]
    fn diff_damerau_matches_osa(a in small_word(), b in small_word(), max in 0usize..4) {
        let expected = strsim::osa_distance(&a, &b);
        let got = damerau_within(&a, &b, max);
        if expected <= max {
            prop_assert_eq!(got, Some(expected));
        } else {
            prop_assert_eq!(got, None);
        }
    }

    #[test]
    fn prop_damerau_symmetric(a in small_word(), b in small_word()) {
        prop_assert_eq!(damerau_within(&a, &b, 8), damerau_within(&b, &a, 8));
    }

    #[test]
    fn prop_adjacent_swap_is_one_edit(word in "[a-z]{2,10}", at in 0usize..9) {
        let mut chars: Vec<char> = word.chars().collect();
        let i = at % (chars.len() - 1);
        prop_assume!(chars[i] != chars[i + 1]);
        chars.swap(i, i + 1);
        let swapped: String = chars.into_iter().collect();
        prop_assert_eq!(damerau_within(&word, &swapped, 2), Some(1));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Length-bucketed search with a shrinking bound picks the same word as
    /// a first-wins scan of the sorted dictionary.
    #[test]
    fn diff_nearest_matches_linear_scan(dict in dictionary(), token in small_word(), max in 0usize..3) {
        let got = nearest(&token, &dict, max).map(|(w, d)| (w.to_string(), d));
        prop_assert_eq!(got, oracle_nearest(&token, &dict, max));
    }

    #[test]
    fn diff_correct_matches_linear_scan(dict in dictionary(), token in small_word()) {
        prop_assert_eq!(correct(&token, &dict, 2), oracle_correct(&token, &dict, 2));
    }

    #[test]
    fn prop_near_words_sorted_and_bounded(dict in dictionary(), token in small_word(), limit in 0usize..8) {
        let words = near_words(&token, &dict, 2, limit);
        prop_assert!(words.len() <= limit);

        let keyed: Vec<(usize, &str)> = words
            .iter()
            .map(|w| (strsim::osa_distance(&token, w), w.as_str()))
            .collect();
        prop_assert!(keyed.iter().all(|(d, _)| *d <= 2));
        prop_assert!(keyed.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn prop_dictionary_words_correct_to_themselves(dict in dictionary()) {
        for word in dict.words() {
            prop_assert_eq!(correct(word, &dict, 2), word);
        }
    }
}
