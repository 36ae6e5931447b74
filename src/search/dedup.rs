// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result deduplication.
//!
//! An asset appears at most once in a ranked list. The store may hand back the
//! same record twice (a replica mid-sync, or the fallback retry overlapping a
//! first pass), and the id is the only identity that counts.
//!
//! `ResultMerger` keys on the record id and nothing else. When an id shows up
//! again, the better-ranked candidate by `compare_scored` is kept; on a full
//! tie the first one seen stays.

use crate::scoring::ranking::compare_scored;
use crate::types::ScoredCandidate;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Collects scored candidates, keeping the best one per record id.
#[derive(Debug, Default)]
pub struct ResultMerger {
    map: HashMap<String, ScoredCandidate>,
}

impl ResultMerger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: HashMap::with_capacity(capacity),
        }
    }

    /// Merge a single candidate, keeping the best per id.
    pub fn merge(&mut self, candidate: ScoredCandidate) {
        match self.map.get_mut(&candidate.record.id) {
            Some(existing) => {
                if compare_scored(&candidate, existing) == Ordering::Less {
                    *existing = candidate;
                }
            }
            None => {
                self.map.insert(candidate.record.id.clone(), candidate);
            }
        }
    }

    pub fn merge_all(&mut self, candidates: impl IntoIterator<Item = ScoredCandidate>) {
        for candidate in candidates {
            self.merge(candidate);
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// The full ranked list, best first.
    pub fn into_sorted(self) -> Vec<ScoredCandidate> {
        let mut results: Vec<_> = self.map.into_values().collect();
        results.sort_by(compare_scored);
        results
    }
}
