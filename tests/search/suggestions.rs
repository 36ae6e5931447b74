// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Title suggestions for typed prefixes.

use super::common::{flaky_service, make_record, make_tagged, photo_records, vehicle_records};
use lumen::{SearchConfig, SearchError};

#[tokio::test]
async fn test_short_prefix_skips_store() {
    let (store, service) = flaky_service(vehicle_records(), SearchConfig::default());
    assert!(service.suggest("r").await.unwrap().is_empty());
    assert!(service.suggest("  c  ").await.unwrap().is_empty());
    assert_eq!(store.find_calls(), 0);
}

#[tokio::test]
async fn test_title_prefix() {
    let (_store, service) = flaky_service(vehicle_records(), SearchConfig::default());
    assert_eq!(service.suggest("Red Sp").await.unwrap(), vec!["Red Sports Car"]);
}

#[tokio::test]
async fn test_half_typed_plurals_and_stopwords() {
    let (_store, service) = flaky_service(
        vec![
            make_record("a", "Boxes of Apples"),
            make_record("b", "Houses on the Hill"),
            make_record("c", "The Sunset"),
        ],
        SearchConfig::default(),
    );
    assert_eq!(service.suggest("boxe").await.unwrap(), vec!["Boxes of Apples"]);
    assert_eq!(service.suggest("house").await.unwrap(), vec!["Houses on the Hill"]);
    assert_eq!(service.suggest("The").await.unwrap(), vec!["The Sunset"]);
    assert_eq!(service.suggest("box").await.unwrap(), vec!["Boxes of Apples"]);
}

#[tokio::test]
async fn test_tag_prefix_returns_titles() {
    let mut bus = make_record("B", "City Bus");
    bus.tags = vec!["vehicle".to_string()];
    let (_store, service) = flaky_service(vec![bus], SearchConfig::default());
    assert_eq!(service.suggest("veh").await.unwrap(), vec!["City Bus"]);
}

#[tokio::test]
async fn test_untitled_matches_skipped() {
    let (_store, service) = flaky_service(vec![make_tagged("C", &["car"])], SearchConfig::default());
    assert!(service.suggest("car").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_titles_distinct() {
    let (_store, service) = flaky_service(
        vec![
            make_record("a", "Harbor"),
            make_record("b", "Harbor"),
            make_record("c", "Harbor Lights"),
        ],
        SearchConfig::default(),
    );
    let mut titles = service.suggest("harb").await.unwrap();
    titles.sort();
    assert_eq!(titles, vec!["Harbor", "Harbor Lights"]);
}

#[tokio::test]
async fn test_capped_by_suggest_limit() {
    let (_store, service) = flaky_service(photo_records(30), SearchConfig::default());
    assert_eq!(service.suggest("pho").await.unwrap().len(), 10);
}

#[tokio::test]
async fn test_store_outage() {
    let (store, service) = flaky_service(vehicle_records(), SearchConfig::default());
    store.set_down(true);
    assert!(matches!(
        service.suggest("red").await,
        Err(SearchError::StoreUnavailable(_))
    ));
}
