// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search pipeline stages between correction and caching.
//!
//! `retrieve` pulls a bounded candidate pool from the store; `dedup` folds
//! the scored pool into one ranked entry per asset.

pub mod dedup;
pub mod retrieve;

pub use dedup::ResultMerger;
pub use retrieve::{retrieve, Retrieval, RetrieveOptions};
