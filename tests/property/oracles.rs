// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reference oracles for differential testing.
//!
//! Slow and simple on purpose. When an oracle and the real implementation
//! disagree, the oracle is right.

use lumen::{Dictionary, ScoredCandidate};

/// Nearest dictionary word by a full linear scan, with `strsim`'s OSA
/// distance. Ties go to the first word in sorted order.
pub fn oracle_nearest(token: &str, dictionary: &Dictionary, max: usize) -> Option<(String, usize)> {
    let mut best: Option<(String, usize)> = None;
    for word in dictionary.words() {
        let distance = strsim::osa_distance(token, word);
        if distance > max {
            continue;
        }
        match &best {
            Some((_, best_distance)) if *best_distance <= distance => {}
            _ => best = Some((word.to_string(), distance)),
        }
    }
    best
}

/// Correction by linear scan: members stay, others take the nearest word.
pub fn oracle_correct(token: &str, dictionary: &Dictionary, max: usize) -> String {
    if dictionary.words().any(|w| w == token) {
        return token.to_string();
    }
    oracle_nearest(token, dictionary, max)
        .map(|(word, _)| word)
        .unwrap_or_else(|| token.to_string())
}

/// Rank by explicit sort key: score desc, created desc, id asc.
pub fn oracle_rank(results: &[ScoredCandidate]) -> Vec<String> {
    let mut keyed: Vec<_> = results
        .iter()
        .map(|c| {
            (
                std::cmp::Reverse(c.score),
                std::cmp::Reverse(c.record.created_at),
                c.record.id.clone(),
            )
        })
        .collect();
    keyed.sort();
    keyed.into_iter().map(|(_, _, id)| id).collect()
}
