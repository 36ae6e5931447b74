// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! A caller sees the catalog store failing, a pagination cursor pointing at a
//! cache entry that no longer exists, or (rarely) a scoring pass that died.
//! "No results" is never an error; it is an empty page.

use std::path::PathBuf;
use thiserror::Error;

/// Failures talking to the catalog store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("catalog store unavailable: {0}")]
    Unavailable(String),

    #[error("failed to read catalog '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failures surfaced by the search service.
#[derive(Error, Debug)]
pub enum SearchError {
    /// The store failed during dictionary build, retrieval, or suggestion.
    /// Callers must report a service failure, not an empty page.
    #[error(transparent)]
    StoreUnavailable(#[from] StoreError),

    /// `search_next` for a query with no live cache entry. Restart with
    /// `search_first`.
    #[error("stale cursor for query '{query}': restart from the first page")]
    StaleCursor { query: String },

    /// The scoring pass did not complete. Nothing is cached.
    #[error("{0}")]
    ScoringFailed(String),
}

impl SearchError {
    pub fn is_stale_cursor(&self) -> bool {
        matches!(self, SearchError::StaleCursor { .. })
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;
