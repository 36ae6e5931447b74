// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The spelling vocabulary, built once from a full catalog scan.
//!
//! Every word of every title, category, secondary category, tag and keyword,
//! normalized exactly like a query token. The corrector only ever proposes
//! words from this set.
//!
//! Words are kept twice: a sorted set for membership and ordered iteration,
//! and a length-bucketed index so the corrector can skip every word whose
//! length alone rules it out.
//!
//! # Staleness
//!
//! The dictionary is built on first use and never rebuilt. Assets added to the
//! catalog afterwards are still found by retrieval, but their new words are
//! not correction targets until the process restarts.

use crate::error::StoreError;
use crate::store::CatalogStore;
use crate::types::{PartialRecord, SearchField};
use crate::util::normalize::tokenize;
use parking_lot::RwLock;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use std::time::Instant;

/// A deduplicated set of normalized vocabulary words.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: BTreeSet<String>,
    by_length: BTreeMap<usize, Vec<String>>,
}

impl Dictionary {
    /// Build from arbitrary text values; each value is tokenized.
    pub fn from_texts<'a>(texts: impl IntoIterator<Item = &'a str>) -> Self {
        let words: BTreeSet<String> = texts.into_iter().flat_map(tokenize).collect();
        Self::from_words(words)
    }

    /// Build from projected catalog records. Absent fields contribute nothing.
    pub fn from_records(records: &[PartialRecord]) -> Self {
        Self::from_texts(records.iter().flat_map(PartialRecord::texts))
    }

    fn from_words(words: BTreeSet<String>) -> Self {
        let mut by_length: BTreeMap<usize, Vec<String>> = BTreeMap::new();
        // BTreeSet iteration is sorted, so every bucket ends up sorted too.
        for word in &words {
            by_length
                .entry(word.chars().count())
                .or_default()
                .push(word.clone());
        }
        Self { words, by_length }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words in lexicographic order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Words whose char length is within `slack` of `len`.
    ///
    /// Iteration is bucket by bucket, so the overall order is not
    /// lexicographic; callers that need a deterministic winner must break
    /// ties themselves.
    pub fn words_near_length(&self, len: usize, slack: usize) -> impl Iterator<Item = &str> {
        let lo = len.saturating_sub(slack);
        let hi = len.saturating_add(slack);
        self.by_length
            .range(lo..=hi)
            .flat_map(|(_, bucket)| bucket.iter().map(String::as_str))
    }
}

/// Lazily built, process-lifetime dictionary slot.
///
/// Concurrent first callers may each scan the store. They all compute the
/// same dictionary, so whichever write lands last is as good as any other.
#[derive(Debug, Default)]
pub struct DictionaryCell {
    slot: RwLock<Option<Arc<Dictionary>>>,
}

impl DictionaryCell {
    pub fn new() -> Self {
        Self::default()
    }

    /// The dictionary if it has been built.
    pub fn get(&self) -> Option<Arc<Dictionary>> {
        self.slot.read().clone()
    }

    /// Return the dictionary, scanning the catalog on first use.
    ///
    /// A failed scan caches nothing; the next call tries again.
    pub async fn ensure_built<S>(&self, store: &S) -> Result<Arc<Dictionary>, StoreError>
    where
        S: CatalogStore + ?Sized,
    {
        if let Some(dictionary) = self.get() {
            return Ok(dictionary);
        }

        let started = Instant::now();
        let records = store.scan_all(&SearchField::DICTIONARY).await?;
        let dictionary = Arc::new(Dictionary::from_records(&records));
        tracing::info!(
            records = records.len(),
            words = dictionary.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "built spelling dictionary"
        );

        *self.slot.write() = Some(Arc::clone(&dictionary));
        Ok(dictionary)
    }
}
