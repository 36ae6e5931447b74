// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The records the engine reads and the pages it hands back.
//!
//! Asset records belong to the catalog store. By the time one reaches this
//! crate it has a fixed shape: every string present (possibly empty), every
//! list present (possibly empty). Legacy documents with missing or oddly
//! typed fields are straightened out at the store boundary, never here.
//!
//! # Lifetimes
//!
//! | Type              | Lives for            | Owner            |
//! |-------------------|----------------------|------------------|
//! | `AssetRecord`     | catalog lifetime     | catalog store    |
//! | `PartialRecord`   | one dictionary build | dictionary       |
//! | `ScoredCandidate` | one cache entry      | result cache     |
//! | `SearchPage`      | one call             | caller           |

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// =============================================================================
// FIELDS
// =============================================================================

/// A searchable text field of an asset record.
///
/// The derived `Ord` is declaration order and carries no ranking meaning;
/// relevance weights live in `scoring::FieldWeights`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub enum SearchField {
    Title,
    Name,
    Description,
    Category,
    SecondaryCategory,
    Alt,
    Tags,
    Keywords,
}

impl SearchField {
    /// Every field the candidate filter looks at.
    pub const ALL: [SearchField; 8] = [
        SearchField::Title,
        SearchField::Name,
        SearchField::Description,
        SearchField::Category,
        SearchField::SecondaryCategory,
        SearchField::Alt,
        SearchField::Tags,
        SearchField::Keywords,
    ];

    /// Fields that feed the spelling dictionary.
    ///
    /// Description, alt text and file names are left out: they are long,
    /// noisy, and would pull the corrector toward words nobody searches for.
    pub const DICTIONARY: [SearchField; 5] = [
        SearchField::Title,
        SearchField::Category,
        SearchField::SecondaryCategory,
        SearchField::Tags,
        SearchField::Keywords,
    ];

    /// Fields used for title suggestions.
    pub const SUGGEST: [SearchField; 4] = [
        SearchField::Title,
        SearchField::Name,
        SearchField::Tags,
        SearchField::Keywords,
    ];
}

// =============================================================================
// RECORDS
// =============================================================================

/// Where the asset's bytes live. Carried through untouched for the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRefs {
    #[serde(default)]
    pub file_name: String,
    #[serde(default)]
    pub thumbnail_file_name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub slug: String,
}

/// One asset in the catalog.
///
/// `id` is the identity used for deduplication. Two records with the same id
/// are the same asset, whatever their other fields say.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRecord {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub secondary_category: String,
    #[serde(default)]
    pub alt: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub files: FileRefs,
    #[serde(default = "unix_epoch")]
    pub created_at: DateTime<Utc>,
}

fn unix_epoch() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH
}

impl AssetRecord {
    /// A record with only an id; every other field empty.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            name: String::new(),
            description: String::new(),
            category: String::new(),
            secondary_category: String::new(),
            alt: String::new(),
            tags: Vec::new(),
            keywords: Vec::new(),
            files: FileRefs::default(),
            created_at: unix_epoch(),
        }
    }

    /// Non-empty values of a field. Scalar fields yield at most one value.
    pub fn values(&self, field: SearchField) -> Vec<&str> {
        match field {
            SearchField::Title => non_empty(&self.title),
            SearchField::Name => non_empty(&self.name),
            SearchField::Description => non_empty(&self.description),
            SearchField::Category => non_empty(&self.category),
            SearchField::SecondaryCategory => non_empty(&self.secondary_category),
            SearchField::Alt => non_empty(&self.alt),
            SearchField::Tags => self
                .tags
                .iter()
                .map(String::as_str)
                .filter(|v| !v.trim().is_empty())
                .collect(),
            SearchField::Keywords => self
                .keywords
                .iter()
                .map(String::as_str)
                .filter(|v| !v.trim().is_empty())
                .collect(),
        }
    }
}

fn non_empty(value: &str) -> Vec<&str> {
    if value.trim().is_empty() {
        Vec::new()
    } else {
        vec![value]
    }
}

/// Projection of a record returned by a full catalog scan.
///
/// Only the requested fields are populated; the dictionary builder never
/// needs the whole record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialRecord {
    pub fields: Vec<(SearchField, Vec<String>)>,
}

impl PartialRecord {
    /// Project `fields` out of a full record.
    pub fn project(record: &AssetRecord, fields: &[SearchField]) -> Self {
        Self {
            fields: fields
                .iter()
                .map(|&field| {
                    let values = record
                        .values(field)
                        .into_iter()
                        .map(str::to_string)
                        .collect();
                    (field, values)
                })
                .collect(),
        }
    }

    /// All text values across the projected fields.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .flat_map(|(_, values)| values.iter().map(String::as_str))
    }
}

// =============================================================================
// RESULTS
// =============================================================================

/// A candidate record with its relevance score.
#[derive(Debug, Clone)]
pub struct ScoredCandidate {
    pub record: Arc<AssetRecord>,
    pub score: u64,
}

/// One page of ranked results.
///
/// `cursor` is the offset of the next page, or `None` when the ranked list
/// is exhausted. `total` counts the whole ranked list, not this page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    pub items: Vec<AssetRecord>,
    pub cursor: Option<usize>,
    pub total: usize,
}

impl SearchPage {
    /// The page for an empty query or an empty result.
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            cursor: None,
            total: 0,
        }
    }

    /// Slice `[offset, offset + limit)` out of a ranked list.
    pub fn slice(results: &[ScoredCandidate], offset: usize, limit: usize) -> Self {
        let total = results.len();
        let start = offset.min(total);
        let end = start.saturating_add(limit).min(total);
        let items = results[start..end]
            .iter()
            .map(|c| AssetRecord::clone(&c.record))
            .collect();
        let cursor = if end < total { Some(end) } else { None };
        Self {
            items,
            cursor,
            total,
        }
    }
}
