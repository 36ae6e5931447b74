// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Store outages and stale cursors.

use super::common::{flaky_service, ids, vehicle_records, TestTracing};
use lumen::{SearchConfig, SearchError, StoreError};

#[tokio::test]
async fn test_outage_during_dictionary_build() {
    let (store, service) = flaky_service(vehicle_records(), SearchConfig::default());
    store.set_down(true);

    let err = service.search_first("car", 10).await.unwrap_err();
    assert!(matches!(
        err,
        SearchError::StoreUnavailable(StoreError::Unavailable(_))
    ));
    assert_eq!(service.cache_len(), 0);
    assert_eq!(store.find_calls(), 0);
}

#[tokio::test]
async fn test_outage_during_retrieval_caches_nothing() {
    let (store, service) = flaky_service(vehicle_records(), SearchConfig::default());
    service.search_first("car", 10).await.unwrap();

    store.set_down(true);
    let err = service.search_first("bus", 10).await.unwrap_err();
    assert!(matches!(err, SearchError::StoreUnavailable(_)));
    assert_eq!(service.cache_len(), 1);
    assert!(service.search_next("bus", 0, 10).await.unwrap_err().is_stale_cursor());
}

#[tokio::test]
async fn test_recovers_when_store_returns() {
    let (store, service) = flaky_service(vehicle_records(), SearchConfig::default());
    store.set_down(true);
    assert!(service.search_first("car", 10).await.is_err());

    store.set_down(false);
    let page = service.search_first("car", 10).await.unwrap();
    assert_eq!(ids(&page.items), vec!["A", "C"]);
}

#[tokio::test]
async fn test_outage_is_not_an_empty_page() {
    let (store, service) = flaky_service(Vec::new(), SearchConfig::default());
    assert!(service.search_first("car", 10).await.unwrap().items.is_empty());

    store.set_down(true);
    assert!(service.search_first("bus", 10).await.is_err());
}

#[tokio::test]
async fn test_outage_is_logged() {
    let tracing = TestTracing::new();
    let _guard = tracing.install();

    let (store, service) = flaky_service(vehicle_records(), SearchConfig::default());
    store.set_down(true);
    let _ = service.search_first("car", 10).await;

    tracing.assert_contains("WARN");
    tracing.assert_contains("catalog store call failed");
    tracing.assert_contains("connection refused");
}

#[tokio::test]
async fn test_stale_cursor_message_names_query() {
    let (_store, service) = flaky_service(vehicle_records(), SearchConfig::default());
    service.search_first("car", 10).await.unwrap();

    let err = service.search_next("bus", 10, 10).await.unwrap_err();
    assert!(err.to_string().contains("'bus'"));
}
