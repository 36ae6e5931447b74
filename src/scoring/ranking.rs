// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored candidates get sorted.
//!
//! Sort order:
//! 1. **Score** - higher wins
//! 2. **Created** - newer wins
//! 3. **Id** - ascending, so equal records still order the same way every time
//!
//! The id tiebreak makes the order total. Pagination depends on that: a cached
//! list sliced twice must give the same pages.

use crate::types::ScoredCandidate;
use std::cmp::Ordering;

/// Compare two scored candidates for ranking. `Less` means `a` ranks first.
pub fn compare_scored(a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| b.record.created_at.cmp(&a.record.created_at))
        .then_with(|| a.record.id.cmp(&b.record.id))
}

/// Sort a candidate list into ranked order, in place.
pub fn rank(results: &mut [ScoredCandidate]) {
    results.sort_by(compare_scored);
}
