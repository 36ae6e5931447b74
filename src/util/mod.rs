// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text helpers shared by the query path, the dictionary, and the store.

pub mod normalize;

pub use normalize::{fold, normalize_query, singularize, tokenize};
