// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search service: one object owning everything a query needs.
//!
//! ```text
//!   query ──► tokenize ──► correct ──► key ──► cache hit? ──► slice page
//!                            ▲                    │ miss
//!                      dictionary                 ▼
//!                    (built once)       retrieve ──► score ──► dedup/rank
//!                                                                 │
//!                                                      cache insert ──► slice page
//! ```
//!
//! # Entry points
//!
//! | Call           | Touches the store          | Fails with                          |
//! |----------------|----------------------------|-------------------------------------|
//! | `search_first` | dictionary build, on miss  | `StoreUnavailable`, `ScoringFailed` |
//! | `search_next`  | never                      | `StaleCursor`                       |
//! | `suggest`      | always                     | `StoreUnavailable`                  |
//!
//! The service is `Send + Sync` for any `CatalogStore`, so one instance behind
//! an `Arc` serves every task. Locks guard only the dictionary slot and the
//! cache map, and are never held across a store call.

use crate::cache::ResultCache;
use crate::config::SearchConfig;
use crate::dictionary::{Dictionary, DictionaryCell};
use crate::error::{Result, SearchError, StoreError};
use crate::fuzzy::correct::correct;
use crate::scoring::score_all;
use crate::search::dedup::ResultMerger;
use crate::search::retrieve::{retrieve, RetrieveOptions};
use crate::store::{CatalogStore, Clause, Filter, MatchMode};
use crate::types::{SearchField, SearchPage};
use crate::util::normalize::{fold, tokenize};
use chrono::Utc;
use std::collections::HashSet;

/// Typo-tolerant search over a catalog store.
#[derive(Debug)]
pub struct SearchService<S> {
    store: S,
    config: SearchConfig,
    dictionary: DictionaryCell,
    cache: ResultCache,
}

impl<S: CatalogStore> SearchService<S> {
    pub fn new(store: S) -> Self {
        Self::with_config(store, SearchConfig::default())
    }

    pub fn with_config(store: S, config: SearchConfig) -> Self {
        let cache = ResultCache::new(config.cache_capacity, config.cache_ttl());
        Self {
            store,
            config,
            dictionary: DictionaryCell::new(),
            cache,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn clamp_limit(&self, limit: usize) -> usize {
        self.config.clamp_limit(limit)
    }

    /// Cached ranked lists currently held.
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// First page for `query`, computing and caching the ranked list on a miss.
    pub async fn search_first(&self, query: &str, limit: usize) -> Result<SearchPage> {
        let limit = self.clamp_limit(limit);
        let tokens = tokenize(query);
        if tokens.is_empty() {
            return Ok(SearchPage::empty());
        }

        let dictionary = self
            .dictionary
            .ensure_built(&self.store)
            .await
            .map_err(store_failure)?;
        let corrected = self.correct_tokens(&tokens, &dictionary);
        let key = corrected.join(" ");
        tracing::debug!(query, key = %key, "search_first");

        if let Some(results) = self.cache.get(&key) {
            tracing::debug!(key = %key, total = results.len(), "cache hit");
            return Ok(SearchPage::slice(&results, 0, limit));
        }

        let options = RetrieveOptions {
            candidate_cap: self.config.candidate_cap,
            max_edit_distance: self.config.max_edit_distance,
            near_words_per_token: self.config.near_words_per_token,
        };
        let retrieval = retrieve(&self.store, &corrected, &dictionary, &options)
            .await
            .map_err(store_failure)?;

        // Scoring is CPU-bound over up to `candidate_cap` records; keep it off
        // the async workers.
        let candidates = retrieval.candidates;
        let tokens = corrected.clone();
        let weights = self.config.weights;
        let ranked = tokio::task::spawn_blocking(move || {
            let scored = score_all(candidates, &tokens, &weights, Utc::now());
            let mut merger = ResultMerger::with_capacity(scored.len());
            merger.merge_all(scored);
            merger.into_sorted()
        })
        .await
        .map_err(|e| SearchError::ScoringFailed(format!("scoring task failed: {e}")))?;
        tracing::debug!(
            key = %key,
            total = ranked.len(),
            fallback = retrieval.fallback_used,
            "ranked candidates"
        );

        let results = self.cache.insert(key, ranked);
        Ok(SearchPage::slice(&results, 0, limit))
    }

    /// The page starting at `cursor` of a ranked list cached by `search_first`.
    ///
    /// Never touches the store. If the list is gone (expired, evicted, or
    /// never computed) the caller has to start over.
    pub async fn search_next(&self, query: &str, cursor: usize, limit: usize) -> Result<SearchPage> {
        let limit = self.clamp_limit(limit);
        let tokens = tokenize(query);
        if tokens.is_empty() {
            return Ok(SearchPage::empty());
        }

        let stale = || SearchError::StaleCursor {
            query: query.to_string(),
        };
        // No dictionary means no search_first has succeeded yet.
        let dictionary = self.dictionary.get().ok_or_else(stale)?;
        let key = self.correct_tokens(&tokens, &dictionary).join(" ");
        tracing::debug!(query, key = %key, cursor, "search_next");

        let results = self.cache.get(&key).ok_or_else(stale)?;
        Ok(SearchPage::slice(&results, cursor, limit))
    }

    /// Distinct titles of assets whose title, name, tag or keyword starts
    /// with `prefix`.
    pub async fn suggest(&self, prefix: &str) -> Result<Vec<String>> {
        let prefix = prefix.trim();
        if prefix.chars().count() < self.config.suggest_min_chars {
            return Ok(Vec::new());
        }
        // Folded only: a half-typed word must not be singularized or dropped.
        let term = fold(prefix);
        if term.is_empty() {
            return Ok(Vec::new());
        }

        let filter = Filter::new().and(Clause::any_field(
            &term,
            MatchMode::Prefix,
            &SearchField::SUGGEST,
        ));
        let records = self
            .store
            .find(&filter, self.config.suggest_limit)
            .await
            .map_err(store_failure)?;

        let mut seen = HashSet::new();
        let titles: Vec<String> = records
            .into_iter()
            .map(|record| record.title)
            .filter(|title| !title.is_empty() && seen.insert(title.clone()))
            .collect();
        tracing::debug!(prefix, suggestions = titles.len(), "suggest");
        Ok(titles)
    }

    /// Correct each token, dropping repeats. The result is the cache key's
    /// word list and the scorer's token list.
    fn correct_tokens(&self, tokens: &[String], dictionary: &Dictionary) -> Vec<String> {
        let mut corrected: Vec<String> = Vec::with_capacity(tokens.len());
        for token in tokens {
            let word = correct(token, dictionary, self.config.max_edit_distance);
            if !corrected.contains(&word) {
                corrected.push(word);
            }
        }
        corrected
    }
}

fn store_failure(err: StoreError) -> SearchError {
    tracing::warn!(error = %err, "catalog store call failed");
    SearchError::StoreUnavailable(err)
}
