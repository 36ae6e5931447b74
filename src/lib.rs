// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Typo-tolerant search over a media-asset catalog.
//!
//! Free-text queries go in; ranked, paginated asset records come out. The
//! engine forgives case, accents, plurals and small typos, never owns the
//! catalog, and serves follow-up pages from a bounded in-memory cache.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ util::       │────▶│ fuzzy::      │────▶│ search::     │
//! │  normalize   │     │  correct     │     │  retrieve    │
//! │ (tokenize)   │     │ (dictionary) │     │ (store.find) │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!                                                  │
//!                                                  ▼
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   cache      │◀────│ search::     │◀────│  scoring     │
//! │ (FIFO + TTL) │     │  dedup       │     │ (weights)    │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!        │
//!        ▼
//!   SearchPage { items, cursor, total }
//! ```
//!
//! `service::SearchService` wires the stages together and owns all mutable
//! state: the lazily built dictionary and the result cache.
//!
//! # Modules
//!
//! | Module       | Role                                         |
//! |--------------|----------------------------------------------|
//! | `types`      | Asset records, fields, pages                 |
//! | `util`       | Query and field normalization                |
//! | `dictionary` | Catalog vocabulary for correction            |
//! | `fuzzy`      | Bounded edit distance, spelling correction   |
//! | `store`      | Catalog store trait and in-memory adapter    |
//! | `search`     | Candidate retrieval and deduplication        |
//! | `scoring`    | Relevance scores and ranking order           |
//! | `cache`      | Ranked-result cache                          |
//! | `service`    | The public entry points                      |
//!
//! # Usage
//!
//! ```ignore
//! use lumen::{MemoryCatalog, SearchService};
//!
//! let catalog = MemoryCatalog::load_json("catalog.json")?;
//! let service = SearchService::new(catalog);
//!
//! let page = service.search_first("red cars", 24).await?;
//! if let Some(cursor) = page.cursor {
//!     let next = service.search_next("red cars", cursor, 24).await?;
//! }
//! ```

pub mod cache;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod fuzzy;
pub mod scoring;
pub mod search;
pub mod service;
pub mod store;
pub mod types;
pub mod util;

#[doc(hidden)]
pub mod testing;

pub use cache::ResultCache;
pub use config::SearchConfig;
pub use dictionary::Dictionary;
pub use error::{Result, SearchError, StoreError};
pub use scoring::{compare_scored, FieldWeights};
pub use service::SearchService;
pub use store::{CatalogStore, Clause, Filter, MatchMode, MemoryCatalog, Predicate};
pub use types::{AssetRecord, FileRefs, PartialRecord, ScoredCandidate, SearchField, SearchPage};
pub use util::normalize::{normalize_query, tokenize};
