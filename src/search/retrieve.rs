// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Candidate retrieval: the coarse filter before scoring.
//!
//! Two passes at most:
//!
//! 1. **Primary.** Every token must appear as a substring of at least one
//!    searchable field. Substring subsumes the word and prefix forms, so a
//!    record that would score anything at all for every token gets through.
//! 2. **Fallback.** Only when the primary pool is empty. Each token's
//!    closest dictionary words are pooled and any record containing any of
//!    them qualifies. This catches typos the corrector left alone because
//!    no single correction was within the bound for the whole query.
//!
//! There is never a second retry, and a fallback with no near words is not
//! issued at all.

use crate::dictionary::Dictionary;
use crate::error::StoreError;
use crate::fuzzy::correct::near_words;
use crate::store::{CatalogStore, Clause, Filter, MatchMode};
use crate::types::{AssetRecord, SearchField};

/// What the retriever found, and how.
#[derive(Debug, Clone, Default)]
pub struct Retrieval {
    pub candidates: Vec<AssetRecord>,
    pub fallback_used: bool,
}

/// Knobs for one retrieval.
#[derive(Debug, Clone, Copy)]
pub struct RetrieveOptions {
    pub candidate_cap: usize,
    pub max_edit_distance: usize,
    pub near_words_per_token: usize,
}

/// AND over tokens, each an OR over every searchable field.
pub fn primary_filter(tokens: &[String]) -> Filter {
    tokens.iter().fold(Filter::new(), |filter, token| {
        filter.and(Clause::any_field(token, MatchMode::Substring, &SearchField::ALL))
    })
}

/// Near words for every token, pooled in first-seen order without repeats.
pub fn fallback_terms(tokens: &[String], dictionary: &Dictionary, options: &RetrieveOptions) -> Vec<String> {
    let mut terms: Vec<String> = Vec::new();
    for token in tokens {
        for word in near_words(
            token,
            dictionary,
            options.max_edit_distance,
            options.near_words_per_token,
        ) {
            if !terms.contains(&word) {
                terms.push(word);
            }
        }
    }
    terms
}

/// Fetch the candidate pool for already-corrected tokens.
pub async fn retrieve<S>(
    store: &S,
    tokens: &[String],
    dictionary: &Dictionary,
    options: &RetrieveOptions,
) -> Result<Retrieval, StoreError>
where
    S: CatalogStore + ?Sized,
{
    let candidates = store.find(&primary_filter(tokens), options.candidate_cap).await?;
    tracing::debug!(pool = candidates.len(), "primary retrieval");
    if !candidates.is_empty() {
        return Ok(Retrieval {
            candidates,
            fallback_used: false,
        });
    }

    let terms = fallback_terms(tokens, dictionary, options);
    if terms.is_empty() {
        return Ok(Retrieval::default());
    }

    let filter = Filter::new().and(Clause::any_term(
        terms.iter().map(String::as_str),
        MatchMode::Substring,
        &SearchField::ALL,
    ));
    let candidates = store.find(&filter, options.candidate_cap).await?;
    tracing::debug!(?terms, pool = candidates.len(), "fallback retrieval");
    Ok(Retrieval {
        candidates,
        fallback_used: true,
    })
}
