// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The catalog store seam.
//!
//! The search core never owns asset records. It asks a `CatalogStore` for
//! two things: records matching a filter (capped), and a projection of every
//! record (for the dictionary). Anything that can answer those two questions
//! can back the engine: a document database adapter, a REST client, or the
//! in-memory `MemoryCatalog` shipped here.
//!
//! # Filter shape
//!
//! A `Filter` is an AND of `Clause`s; a `Clause` is an OR of `Predicate`s;
//! a `Predicate` tests one field against one term. An empty filter matches
//! every record.
//!
//! # Predicate semantics
//!
//! `Word` and `Substring` terms are normalized tokens (see `util::normalize`),
//! compared against field values normalized the same way, so matching is
//! case-insensitive and plural-insensitive. `Prefix` serves half-typed input:
//! its term is only folded, and it is compared against the folded value with
//! plurals and stopwords left in place.
//!
//! | Mode        | A value matches when...                       |
//! |-------------|-----------------------------------------------|
//! | `Word`      | one of its words equals the term              |
//! | `Prefix`    | the folded value starts with the term         |
//! | `Substring` | the normalized value contains the term        |

mod legacy;
mod memory;

pub use memory::MemoryCatalog;

use crate::error::StoreError;
use crate::types::{AssetRecord, PartialRecord, SearchField};
use async_trait::async_trait;
use std::sync::Arc;

/// How a predicate compares its term with a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchMode {
    Word,
    Prefix,
    Substring,
}

/// One field tested against one term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    pub field: SearchField,
    pub term: String,
    pub mode: MatchMode,
}

impl Predicate {
    pub fn new(field: SearchField, term: impl Into<String>, mode: MatchMode) -> Self {
        Self {
            field,
            term: term.into(),
            mode,
        }
    }

    /// Test against a value already prepared for this predicate's mode:
    /// folded for `Prefix`, normalized into space-joined tokens otherwise.
    pub fn matches_prepared(&self, value: &str) -> bool {
        match self.mode {
            MatchMode::Word => value.split(' ').any(|word| word == self.term),
            MatchMode::Prefix => value.starts_with(self.term.as_str()),
            MatchMode::Substring => value.contains(self.term.as_str()),
        }
    }
}

/// A disjunction: satisfied when any predicate matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Clause {
    pub any_of: Vec<Predicate>,
}

impl Clause {
    /// `term` tested with `mode` against each of `fields`.
    pub fn any_field(term: &str, mode: MatchMode, fields: &[SearchField]) -> Self {
        Self {
            any_of: fields
                .iter()
                .map(|&field| Predicate::new(field, term, mode))
                .collect(),
        }
    }

    /// Every term against every field, all in one disjunction.
    pub fn any_term<'a>(
        terms: impl IntoIterator<Item = &'a str>,
        mode: MatchMode,
        fields: &[SearchField],
    ) -> Self {
        let any_of = terms
            .into_iter()
            .flat_map(|term| {
                fields
                    .iter()
                    .map(move |&field| Predicate::new(field, term, mode))
            })
            .collect();
        Self { any_of }
    }
}

/// A conjunction of clauses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    pub all_of: Vec<Clause>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn and(mut self, clause: Clause) -> Self {
        self.all_of.push(clause);
        self
    }
}

/// Read access to the asset catalog.
///
/// Implementations must be `Send + Sync`: one store is shared by every
/// concurrent search call.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Records matching `filter`, at most `cap` of them.
    async fn find(&self, filter: &Filter, cap: usize) -> Result<Vec<AssetRecord>, StoreError>;

    /// A projection of `fields` for every record in the catalog.
    async fn scan_all(&self, fields: &[SearchField]) -> Result<Vec<PartialRecord>, StoreError>;
}

#[async_trait]
impl<S> CatalogStore for Arc<S>
where
    S: CatalogStore + ?Sized,
{
    async fn find(&self, filter: &Filter, cap: usize) -> Result<Vec<AssetRecord>, StoreError> {
        (**self).find(filter, cap).await
    }

    async fn scan_all(&self, fields: &[SearchField]) -> Result<Vec<PartialRecord>, StoreError> {
        (**self).scan_all(fields).await
    }
}
