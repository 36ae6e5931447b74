// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit tests, integration tests and benches.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::store::MemoryCatalog;
use crate::types::AssetRecord;
use chrono::{Duration, Utc};

/// A record with an id and a title; everything else empty, created at the
/// Unix epoch so it earns no recency bonus.
pub fn make_record(id: &str, title: &str) -> AssetRecord {
    let mut record = AssetRecord::new(id);
    record.title = title.to_string();
    record
}

/// A record with only tags.
pub fn make_tagged(id: &str, tags: &[&str]) -> AssetRecord {
    let mut record = AssetRecord::new(id);
    record.tags = tags.iter().map(|t| t.to_string()).collect();
    record
}

/// Move a record's creation time to `days` days before now.
pub fn created_days_ago(mut record: AssetRecord, days: i64) -> AssetRecord {
    record.created_at = Utc::now() - Duration::days(days);
    record
}

/// The three-asset catalog used throughout the search tests:
///
/// | id | title            | tags            |
/// |----|------------------|-----------------|
/// | A  | Red Sports Car   |                 |
/// | B  | City Bus         |                 |
/// | C  |                  | car, vehicle    |
pub fn vehicle_records() -> Vec<AssetRecord> {
    vec![
        make_record("A", "Red Sports Car"),
        make_record("B", "City Bus"),
        make_tagged("C", &["car", "vehicle"]),
    ]
}

pub fn vehicle_catalog() -> MemoryCatalog {
    MemoryCatalog::new(vehicle_records())
}

/// `count` records whose titles all contain "photo", for pagination tests.
/// Ids are zero-padded so their order matches creation order.
pub fn photo_records(count: usize) -> Vec<AssetRecord> {
    (0..count)
        .map(|i| {
            let mut record = make_record(&format!("p{i:04}"), &format!("Photo {i}"));
            record.created_at = chrono::DateTime::<Utc>::UNIX_EPOCH + Duration::hours(i as i64);
            record
        })
        .collect()
}
