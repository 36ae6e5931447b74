// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranked-result cache: pagination without re-querying the store.
//!
//! One entry per corrected query holds the full ranked list. `search_first`
//! fills it, `search_next` slices it. Two bounds keep it small:
//!
//! | Bound    | Default | Enforced                                   |
//! |----------|---------|--------------------------------------------|
//! | capacity | 500     | on insert, oldest-inserted entry goes first |
//! | TTL      | 10 min  | on read (that entry) and on insert (all)   |
//!
//! Eviction is FIFO by insertion, not LRU: reading an entry does not save it.
//! Nothing runs in the background; an idle cache just holds stale entries
//! until the next call touches it.
//!
//! Time comes from `tokio::time::Instant` so a paused test clock drives TTL.

use crate::types::ScoredCandidate;
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// One cached ranked list.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub key: String,
    pub created: Instant,
    pub results: Arc<[ScoredCandidate]>,
}

impl CacheEntry {
    fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.created) >= ttl
    }
}

#[derive(Debug, Default)]
struct CacheState {
    entries: HashMap<String, CacheEntry>,
    /// Keys in insertion order, oldest at the front.
    order: VecDeque<String>,
}

impl CacheState {
    fn remove(&mut self, key: &str) {
        if self.entries.remove(key).is_some() {
            self.order.retain(|k| k != key);
        }
    }
}

/// Bounded, expiring map from corrected query to ranked results.
#[derive(Debug)]
pub struct ResultCache {
    state: Mutex<CacheState>,
    capacity: usize,
    ttl: Duration,
}

impl ResultCache {
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            state: Mutex::new(CacheState::default()),
            capacity,
            ttl,
        }
    }

    /// The live entry for `key`. An expired entry is dropped on the way.
    pub fn get(&self, key: &str) -> Option<Arc<[ScoredCandidate]>> {
        let now = Instant::now();
        let mut state = self.state.lock();
        match state.entries.get(key) {
            None => return None,
            Some(entry) if !entry.is_expired(now, self.ttl) => {
                return Some(Arc::clone(&entry.results));
            }
            Some(_) => {}
        }
        tracing::debug!(key, "cache entry expired");
        state.remove(key);
        None
    }

    /// Store a ranked list under `key` and hand back the shared copy.
    ///
    /// Sweeps expired entries first, then evicts from the front until the
    /// cache is back within capacity. The new key always goes to the back.
    pub fn insert(&self, key: String, results: Vec<ScoredCandidate>) -> Arc<[ScoredCandidate]> {
        let now = Instant::now();
        let results: Arc<[ScoredCandidate]> = results.into();
        let mut state = self.state.lock();

        let ttl = self.ttl;
        let expired: Vec<String> = state
            .entries
            .values()
            .filter(|entry| entry.is_expired(now, ttl))
            .map(|entry| entry.key.clone())
            .collect();
        for key in &expired {
            state.remove(key);
        }

        state.remove(&key);
        state.order.push_back(key.clone());
        state.entries.insert(
            key.clone(),
            CacheEntry {
                key,
                created: now,
                results: Arc::clone(&results),
            },
        );

        while state.entries.len() > self.capacity {
            let Some(oldest) = state.order.pop_front() else {
                break;
            };
            tracing::debug!(key = %oldest, "cache entry evicted");
            state.entries.remove(&oldest);
        }

        results
    }

    /// Entries currently held, expired or not.
    pub fn len(&self) -> usize {
        self.state.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.lock().entries.is_empty()
    }
}
