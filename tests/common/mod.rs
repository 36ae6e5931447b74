// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shared test utilities and fixtures.

#![allow(dead_code)]

use async_trait::async_trait;
use lumen::{
    AssetRecord, CatalogStore, Filter, MemoryCatalog, PartialRecord, SearchConfig, SearchField,
    SearchService, StoreError,
};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub use lumen::testing::{
    created_days_ago, make_record, make_tagged, photo_records, vehicle_catalog, vehicle_records,
};

// ============================================================================
// STORES
// ============================================================================

/// A catalog that can be switched off and counts every call it receives.
#[derive(Debug, Default)]
pub struct FlakyStore {
    inner: MemoryCatalog,
    down: AtomicBool,
    find_calls: AtomicUsize,
    scan_calls: AtomicUsize,
}

impl FlakyStore {
    pub fn new(records: Vec<AssetRecord>) -> Self {
        Self {
            inner: MemoryCatalog::new(records),
            ..Self::default()
        }
    }

    pub fn set_down(&self, down: bool) {
        self.down.store(down, Ordering::SeqCst);
    }

    pub fn find_calls(&self) -> usize {
        self.find_calls.load(Ordering::SeqCst)
    }

    pub fn scan_calls(&self) -> usize {
        self.scan_calls.load(Ordering::SeqCst)
    }

    pub fn insert(&self, record: AssetRecord) {
        self.inner.insert(record);
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.down.load(Ordering::SeqCst) {
            Err(StoreError::Unavailable("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl CatalogStore for FlakyStore {
    async fn find(&self, filter: &Filter, cap: usize) -> Result<Vec<AssetRecord>, StoreError> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.inner.find(filter, cap).await
    }

    async fn scan_all(&self, fields: &[SearchField]) -> Result<Vec<PartialRecord>, StoreError> {
        self.scan_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.inner.scan_all(fields).await
    }
}

// ============================================================================
// SERVICES
// ============================================================================

pub fn service(records: Vec<AssetRecord>) -> SearchService<MemoryCatalog> {
    SearchService::new(MemoryCatalog::new(records))
}

/// A service over a shared `FlakyStore`, so the test keeps a handle on it.
pub fn flaky_service(
    records: Vec<AssetRecord>,
    config: SearchConfig,
) -> (Arc<FlakyStore>, SearchService<Arc<FlakyStore>>) {
    let store = Arc::new(FlakyStore::new(records));
    let service = SearchService::with_config(Arc::clone(&store), config);
    (store, service)
}

pub fn ids(items: &[AssetRecord]) -> Vec<&str> {
    items.iter().map(|r| r.id.as_str()).collect()
}

// ============================================================================
// LOG CAPTURE
// ============================================================================

/// Captures tracing output for tests.
pub struct TestTracing {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl TestTracing {
    pub fn new() -> Self {
        Self {
            buffer: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Route this thread's events into the buffer until the guard drops.
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let writer = self.buffer.clone();
        let make_writer = move || TestWriter(writer.clone());
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .without_time()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(make_writer)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn output(&self) -> String {
        let buf = self.buffer.lock().unwrap();
        String::from_utf8_lossy(&buf).to_string()
    }

    pub fn assert_contains(&self, needle: &str) {
        let out = self.output();
        assert!(
            out.contains(needle),
            "expected logs to contain `{needle}`, got:\n{out}"
        );
    }
}

struct TestWriter(Arc<Mutex<Vec<u8>>>);

impl std::io::Write for TestWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
