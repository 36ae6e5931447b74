// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Legacy catalog documents → fixed-shape `AssetRecord`s.
//!
//! Catalog exports accumulated several shapes over the years: `_id` as a
//! string or as `{"$oid": ...}`, tags as arrays or comma-separated strings,
//! timestamps as ISO strings, epoch millis, or `{"$date": ...}`, and fields
//! that are simply missing. All of that is resolved here, once, so nothing
//! downstream ever probes a record's shape.

use crate::types::{AssetRecord, FileRefs};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

/// A catalog document as exported, before normalization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LegacyDocument {
    #[serde(rename = "_id", alias = "id", default)]
    id: Value,
    #[serde(default)]
    title: Value,
    #[serde(default)]
    name: Value,
    #[serde(default)]
    description: Value,
    #[serde(default)]
    category: Value,
    #[serde(default)]
    secondary_category: Value,
    #[serde(default)]
    alt: Value,
    #[serde(default)]
    tags: Value,
    #[serde(default)]
    keywords: Value,
    #[serde(default)]
    file_name: Value,
    #[serde(default)]
    thumbnail_file_name: Value,
    #[serde(default)]
    url: Value,
    #[serde(default)]
    slug: Value,
    #[serde(default, alias = "createdAt")]
    uploaded_at: Value,
}

impl LegacyDocument {
    /// Normalize into a record. `position` names records that carry no id.
    pub(crate) fn into_record(self, position: usize) -> AssetRecord {
        let id = match identifier(&self.id) {
            Some(id) => id,
            None => format!("#{position}"),
        };
        AssetRecord {
            id,
            title: text(&self.title),
            name: text(&self.name),
            description: text(&self.description),
            category: text(&self.category),
            secondary_category: text(&self.secondary_category),
            alt: text(&self.alt),
            tags: list(&self.tags),
            keywords: list(&self.keywords),
            files: FileRefs {
                file_name: text(&self.file_name),
                thumbnail_file_name: text(&self.thumbnail_file_name),
                url: text(&self.url),
                slug: text(&self.slug),
            },
            created_at: timestamp(&self.uploaded_at).unwrap_or(DateTime::<Utc>::UNIX_EPOCH),
        }
    }
}

fn identifier(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Object(map) => map.get("$oid").and_then(identifier),
        _ => None,
    }
}

fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

fn list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .map(text)
            .filter(|item| !item.is_empty())
            .collect(),
        Value::String(s) => s
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

fn timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|t| t.with_timezone(&Utc)),
        Value::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        Value::Object(map) => map.get("$date").and_then(timestamp),
        _ => None,
    }
}
