// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Spelling correction against the catalog dictionary.
//!
//! Each token maps to exactly one form: itself if the dictionary knows it,
//! otherwise the nearest dictionary word within the edit bound, otherwise
//! itself again. "Nearest" is a fixed contract:
//!
//! - smallest edit distance wins
//! - among equal distances, the lexicographically smallest word wins
//!
//! That is exactly what a first-wins linear scan over the sorted dictionary
//! picks. The implementation only visits length buckets that could contain a
//! match and shrinks the bound as better candidates turn up, but the answer
//! never differs from the linear scan.

use crate::dictionary::Dictionary;
use crate::fuzzy::damerau::damerau_within;

/// Correct one normalized token.
pub fn correct(token: &str, dictionary: &Dictionary, max_distance: usize) -> String {
    if dictionary.contains(token) {
        return token.to_string();
    }
    match nearest(token, dictionary, max_distance) {
        Some((word, distance)) => {
            tracing::debug!(token, corrected = word, distance, "corrected token");
            word.to_string()
        }
        None => token.to_string(),
    }
}

/// The nearest dictionary word within `max_distance`, with its distance.
pub fn nearest<'d>(
    token: &str,
    dictionary: &'d Dictionary,
    max_distance: usize,
) -> Option<(&'d str, usize)> {
    let len = token.chars().count();
    let mut best: Option<(&'d str, usize)> = None;

    for word in dictionary.words_near_length(len, max_distance) {
        // Anything farther than the current best can't win; equal distance
        // still can, on the lexicographic tiebreak.
        let bound = best.map_or(max_distance, |(_, d)| d);
        let Some(distance) = damerau_within(token, word, bound) else {
            continue;
        };
        best = match best {
            Some((best_word, best_distance))
                if (best_distance, best_word) <= (distance, word) =>
            {
                Some((best_word, best_distance))
            }
            _ => Some((word, distance)),
        };
    }

    best
}

/// Up to `limit` dictionary words within `max_distance`, closest first.
///
/// Ordered by (distance, word), so the token itself leads when it is a
/// dictionary word.
pub fn near_words(
    token: &str,
    dictionary: &Dictionary,
    max_distance: usize,
    limit: usize,
) -> Vec<String> {
    let len = token.chars().count();
    let mut found: Vec<(usize, &str)> = dictionary
        .words_near_length(len, max_distance)
        .filter_map(|word| damerau_within(token, word, max_distance).map(|d| (d, word)))
        .collect();
    found.sort_unstable();
    found
        .into_iter()
        .take(limit)
        .map(|(_, word)| word.to_string())
        .collect()
}
