// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via edit distance.
//!
//! `damerau` measures, `correct` decides. The scorer also uses `damerau`
//! directly for its near-miss tier.

pub mod correct;
pub mod damerau;

pub use correct::{correct, near_words, nearest};
pub use damerau::{damerau_within, within};
