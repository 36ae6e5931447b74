// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how candidates get their numbers and their order.
//!
//! Field weight dominates. A whole-word hit in the title outscores every
//! kind of hit in the description, and the scoring constants are chosen so
//! that stays true for the default weights.

mod core;
pub mod ranking;

pub use self::core::*;
pub use ranking::{compare_scored, rank};
