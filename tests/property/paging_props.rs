// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Service-level invariants over random catalogs.

use super::common::{ids, service};
use lumen::{AssetRecord, SearchPage};
use proptest::prelude::*;
use std::collections::HashSet;

const VOCABULARY: &[&str] = &[
    "red", "blue", "car", "cars", "bus", "city", "sunset", "beach", "mountain", "lake",
    "photo", "vintage", "portrait", "karr", "sunsets",
];

fn word() -> impl Strategy<Value = &'static str> {
    prop::sample::select(VOCABULARY)
}

fn record() -> impl Strategy<Value = (Vec<&'static str>, Vec<&'static str>)> {
    (
        prop::collection::vec(word(), 0..4),
        prop::collection::vec(word(), 0..3),
    )
}

fn catalog() -> impl Strategy<Value = Vec<AssetRecord>> {
    prop::collection::vec(record(), 0..60).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (title, tags))| {
                let mut record = AssetRecord::new(format!("r{i:03}"));
                record.title = title.join(" ");
                record.tags = tags.into_iter().map(str::to_string).collect();
                record
            })
            .collect()
    })
}

fn query() -> impl Strategy<Value = String> {
    prop::collection::vec(word(), 1..3).prop_map(|words| words.join(" "))
}

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
        .block_on(future)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_first_page_bounded(records in catalog(), q in query(), limit in 10usize..40) {
        let page = block_on(async { service(records).search_first(&q, limit).await.unwrap() });
        prop_assert!(page.items.len() <= limit);
        prop_assert!(page.total >= page.items.len());
        prop_assert_eq!(page.cursor.is_some(), page.total > page.items.len());
    }

    /// Chained cursors visit every ranked item exactly once, in order.
    #[test]
    fn prop_pages_partition(records in catalog(), q in query(), limit in 10usize..15) {
        let (full, chained) = block_on(async {
            let service = service(records);
            let full = service.search_first(&q, 200).await.unwrap();

            let mut pages: Vec<SearchPage> = vec![service.search_first(&q, limit).await.unwrap()];
            while let Some(cursor) = pages.last().and_then(|p| p.cursor) {
                pages.push(service.search_next(&q, cursor, limit).await.unwrap());
            }
            let chained: Vec<String> = pages
                .iter()
                .flat_map(|p| p.items.iter().map(|r| r.id.clone()))
                .collect();
            (full, chained)
        });

        prop_assert_eq!(&chained, &ids(&full.items).iter().map(|s| s.to_string()).collect::<Vec<_>>());
        let unique: HashSet<&String> = chained.iter().collect();
        prop_assert_eq!(unique.len(), chained.len());
    }

    /// Asking twice gives the same order.
    #[test]
    fn prop_repeat_is_stable(records in catalog(), q in query()) {
        let (first, second) = block_on(async {
            let service = service(records);
            let first = service.search_first(&q, 50).await.unwrap();
            let second = service.search_first(&q, 50).await.unwrap();
            (first, second)
        });
        prop_assert_eq!(first, second);
    }

    /// Plural and singular spellings land on the same ranked list.
    #[test]
    fn prop_plural_equivalent(records in catalog()) {
        let (singular, plural) = block_on(async {
            let service = service(records);
            let singular = service.search_first("sunset", 50).await.unwrap();
            let plural = service.search_first("sunsets", 50).await.unwrap();
            (singular, plural)
        });
        prop_assert_eq!(singular, plural);
    }
}
