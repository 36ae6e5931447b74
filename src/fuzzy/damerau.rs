// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bounded Damerau–Levenshtein distance with early exits.
//!
//! The variant is optimal string alignment: insertion, deletion, substitution,
//! and transposition of two adjacent characters, each costing one edit. "teh"
//! is one edit from "the", not two.
//!
//! Two exits keep the common case cheap:
//! 1. `|len(a) - len(b)|` is a lower bound on the distance. If it exceeds the
//!    bound, no DP runs at all.
//! 2. If every cell of a DP row exceeds the bound, later rows can only be
//!    larger, so the comparison is abandoned.
//!
//! The second exit still holds with transpositions: a transposition cell
//! `d[i+1][j]` costs `d[i-1][j-2] + 1`, which is never below `d[i][j-1]`,
//! and that cell is already over the bound.

/// Edit distance between `a` and `b` if it is at most `max`, else `None`.
///
/// Distances are counted in chars, not bytes.
pub fn damerau_within(a: &str, b: &str, max: usize) -> Option<usize> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (n, m) = (a.len(), b.len());

    if n.abs_diff(m) > max {
        return None;
    }
    if n == 0 {
        return Some(m);
    }
    if m == 0 {
        return Some(n);
    }

    // Three rolling rows: i-2, i-1, i.
    let mut before_prev = vec![0usize; m + 1];
    let mut prev: Vec<usize> = (0..=m).collect();
    let mut curr = vec![0usize; m + 1];

    for i in 1..=n {
        curr[0] = i;
        let mut row_min = curr[0];

        for j in 1..=m {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            let mut cell = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                cell = cell.min(before_prev[j - 2] + 1);
            }
            curr[j] = cell;
            row_min = row_min.min(cell);
        }

        if row_min > max {
            return None;
        }

        std::mem::swap(&mut before_prev, &mut prev);
        std::mem::swap(&mut prev, &mut curr);
    }

    let distance = prev[m];
    (distance <= max).then_some(distance)
}

/// Are these strings within `max` edits of each other?
#[inline]
pub fn within(a: &str, b: &str, max: usize) -> bool {
    damerau_within(a, b, max).is_some()
}
