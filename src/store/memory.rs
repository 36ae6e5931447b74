// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! An in-memory catalog store.
//!
//! Holds every record alongside two views of its field values, computed once
//! on insert: normalized (for `Word` and `Substring`) and folded (for
//! `Prefix`). Predicate evaluation is then plain string comparison. Matches
//! come back newest first, the order a catalog listing would show them in.

use super::legacy::LegacyDocument;
use super::{CatalogStore, Clause, Filter, MatchMode};
use crate::error::StoreError;
use crate::types::{AssetRecord, PartialRecord, SearchField};
use crate::util::normalize::{fold, normalize_query};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::path::Path;
use std::sync::Arc;

type FieldValues = Vec<(SearchField, Vec<String>)>;

/// A record plus its searchable values, per field, in both views.
#[derive(Debug)]
struct StoredRecord {
    record: Arc<AssetRecord>,
    normalized: FieldValues,
    folded: FieldValues,
}

fn prepare(record: &AssetRecord, transform: fn(&str) -> String) -> FieldValues {
    SearchField::ALL
        .iter()
        .map(|&field| {
            let values = record
                .values(field)
                .into_iter()
                .map(transform)
                .filter(|v| !v.is_empty())
                .collect();
            (field, values)
        })
        .collect()
}

impl StoredRecord {
    fn new(record: AssetRecord) -> Self {
        Self {
            normalized: prepare(&record, normalize_query),
            folded: prepare(&record, fold),
            record: Arc::new(record),
        }
    }

    fn values(&self, field: SearchField, mode: MatchMode) -> &[String] {
        let view = match mode {
            MatchMode::Prefix => &self.folded,
            MatchMode::Word | MatchMode::Substring => &self.normalized,
        };
        view.iter()
            .find(|(f, _)| *f == field)
            .map(|(_, values)| values.as_slice())
            .unwrap_or(&[])
    }

    fn satisfies(&self, clause: &Clause) -> bool {
        clause.any_of.iter().any(|predicate| {
            self.values(predicate.field, predicate.mode)
                .iter()
                .any(|value| predicate.matches_prepared(value))
        })
    }

    fn matches(&self, filter: &Filter) -> bool {
        filter.all_of.iter().all(|clause| self.satisfies(clause))
    }
}

/// Catalog store backed by a vector in memory.
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    records: RwLock<Vec<StoredRecord>>,
}

impl MemoryCatalog {
    pub fn new(records: impl IntoIterator<Item = AssetRecord>) -> Self {
        Self {
            records: RwLock::new(records.into_iter().map(StoredRecord::new).collect()),
        }
    }

    /// Parse a JSON array of catalog documents in any of the legacy shapes.
    pub fn from_json_str(json: &str) -> Result<Self, StoreError> {
        let documents: Vec<LegacyDocument> = serde_json::from_str(json)?;
        Ok(Self::new(
            documents
                .into_iter()
                .enumerate()
                .map(|(position, doc)| doc.into_record(position)),
        ))
    }

    /// Load a JSON catalog export from disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&json)?;
        tracing::info!(path = %path.display(), records = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    /// Add a record. Replaces any existing record with the same id.
    pub fn insert(&self, record: AssetRecord) {
        let mut records = self.records.write();
        records.retain(|stored| stored.record.id != record.id);
        records.push(StoredRecord::new(record));
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalog {
    async fn find(&self, filter: &Filter, cap: usize) -> Result<Vec<AssetRecord>, StoreError> {
        let records = self.records.read();
        let mut matched: Vec<&Arc<AssetRecord>> = records
            .iter()
            .filter(|stored| stored.matches(filter))
            .map(|stored| &stored.record)
            .collect();
        matched.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(matched
            .into_iter()
            .take(cap)
            .map(|record| AssetRecord::clone(record))
            .collect())
    }

    async fn scan_all(&self, fields: &[SearchField]) -> Result<Vec<PartialRecord>, StoreError> {
        let records = self.records.read();
        Ok(records
            .iter()
            .map(|stored| PartialRecord::project(&stored.record, fields))
            .collect())
    }
}
