// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind relevance scores.
//!
//! Every (field, token) pair earns points for the strongest way the token
//! matches that field, scaled by the field's weight:
//!
//! | Tier        | Condition                                   | Points      |
//! |-------------|---------------------------------------------|-------------|
//! | `Exact`     | a field word equals the token               | `w × 6`     |
//! | `Prefix`    | a field word starts with the token          | `w × 4`     |
//! | `Substring` | the normalized field contains the token     | `w × 2`     |
//! | `NearMiss`  | a title/keyword word is one edit away       | `⌊w × 0.8⌋` |
//!
//! On top of that: a phrase bonus when the whole query appears contiguously
//! in the title or a keyword, a completeness bonus when every token matched
//! somewhere (a smaller per-token bonus otherwise), and a capped bonus for
//! assets added in the last 30 days.
//!
//! # Tier ordering
//!
//! Within a single field the multipliers are strictly decreasing, so for equal
//! weight: exact > prefix > substring > near-miss. Integer arithmetic keeps
//! scores exactly reproducible across runs and platforms.
//!
//! The weights are tuning knobs, not a contract. They can be overridden via
//! `SearchConfig::weights`.

use crate::fuzzy::damerau::within;
use crate::types::{AssetRecord, ScoredCandidate, SearchField};
use crate::util::normalize::tokenize;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Multiplier for an exact whole-word match.
pub const EXACT_MULTIPLIER: u64 = 6;

/// Multiplier for a word-prefix match.
pub const PREFIX_MULTIPLIER: u64 = 4;

/// Multiplier for a substring match.
pub const SUBSTRING_MULTIPLIER: u64 = 2;

/// Near-miss earns 0.8 × weight, floored. Kept as a ratio to stay integral.
pub const NEAR_MISS_NUMERATOR: u64 = 4;
pub const NEAR_MISS_DENOMINATOR: u64 = 5;

/// Maximum edit distance for the near-miss tier.
pub const NEAR_MISS_DISTANCE: usize = 1;

/// Fields eligible for the near-miss tier.
pub const NEAR_MISS_FIELDS: [SearchField; 2] = [SearchField::Title, SearchField::Keywords];

/// Bonus when all tokens appear contiguously in the title or in one keyword.
pub const PHRASE_BONUS: u64 = 40;

/// Bonus when every token matched at least one field.
pub const ALL_TOKENS_BONUS: u64 = 30;

/// Per-token bonus when only some tokens matched.
pub const PARTIAL_TOKEN_BONUS: u64 = 4;

/// Recency bonus for a brand-new asset. Decays linearly to zero.
pub const RECENCY_MAX_BONUS: u64 = 5;

/// Age at which the recency bonus reaches zero.
pub const RECENCY_WINDOW_DAYS: i64 = 30;

// =============================================================================
// WEIGHTS AND TIERS
// =============================================================================

/// Per-field weights. Title dominates; tags and keywords come next; the
/// long free-text fields barely register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct FieldWeights {
    pub title: u64,
    pub keywords: u64,
    pub tags: u64,
    pub category: u64,
    pub secondary_category: u64,
    pub name: u64,
    pub description: u64,
    pub alt: u64,
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self {
            title: 10,
            keywords: 7,
            tags: 6,
            category: 5,
            secondary_category: 4,
            name: 3,
            description: 2,
            alt: 2,
        }
    }
}

impl FieldWeights {
    pub fn weight(&self, field: SearchField) -> u64 {
        match field {
            SearchField::Title => self.title,
            SearchField::Name => self.name,
            SearchField::Description => self.description,
            SearchField::Category => self.category,
            SearchField::SecondaryCategory => self.secondary_category,
            SearchField::Alt => self.alt,
            SearchField::Tags => self.tags,
            SearchField::Keywords => self.keywords,
        }
    }
}

/// How strongly a token matched a field. Ordered weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchTier {
    NearMiss,
    Substring,
    Prefix,
    Exact,
}

impl MatchTier {
    /// Points for this tier in a field of the given weight.
    pub fn points(self, weight: u64) -> u64 {
        match self {
            MatchTier::Exact => weight * EXACT_MULTIPLIER,
            MatchTier::Prefix => weight * PREFIX_MULTIPLIER,
            MatchTier::Substring => weight * SUBSTRING_MULTIPLIER,
            MatchTier::NearMiss => weight * NEAR_MISS_NUMERATOR / NEAR_MISS_DENOMINATOR,
        }
    }
}

// =============================================================================
// RECORD TEXT
// =============================================================================

/// One normalized field value: its words and their space-joined form.
#[derive(Debug, Clone)]
struct ValueText {
    words: Vec<String>,
    joined: String,
}

/// All searchable values of a record, normalized once per scoring pass.
#[derive(Debug)]
pub struct RecordText {
    fields: Vec<(SearchField, Vec<ValueText>)>,
}

impl RecordText {
    pub fn new(record: &AssetRecord) -> Self {
        let fields = SearchField::ALL
            .iter()
            .map(|&field| {
                let values = record
                    .values(field)
                    .into_iter()
                    .map(|value| {
                        let words = tokenize(value);
                        let joined = words.join(" ");
                        ValueText { words, joined }
                    })
                    .filter(|value| !value.words.is_empty())
                    .collect();
                (field, values)
            })
            .collect();
        Self { fields }
    }

    fn values(&self, field: SearchField) -> &[ValueText] {
        self.fields
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, values)| values.as_slice())
            .unwrap_or(&[])
    }

    /// The strongest tier at which `token` matches `field`, if any.
    pub fn best_tier(&self, field: SearchField, token: &str) -> Option<MatchTier> {
        let values = self.values(field);
        let words = || values.iter().flat_map(|v| v.words.iter());

        if words().any(|w| w == token) {
            return Some(MatchTier::Exact);
        }
        if words().any(|w| w.starts_with(token)) {
            return Some(MatchTier::Prefix);
        }
        if values.iter().any(|v| v.joined.contains(token)) {
            return Some(MatchTier::Substring);
        }
        if NEAR_MISS_FIELDS.contains(&field)
            && words().any(|w| within(w, token, NEAR_MISS_DISTANCE))
        {
            return Some(MatchTier::NearMiss);
        }
        None
    }

    /// Do all tokens appear, in order and adjacent, in the title or in a
    /// single keyword?
    pub fn contains_phrase(&self, tokens: &[String]) -> bool {
        if tokens.is_empty() {
            return false;
        }
        let title_words: Vec<&String> = self
            .values(SearchField::Title)
            .iter()
            .flat_map(|v| v.words.iter())
            .collect();
        let in_title = title_words
            .windows(tokens.len())
            .any(|window| window.iter().zip(tokens).all(|(w, t)| *w == t));
        in_title
            || self
                .values(SearchField::Keywords)
                .iter()
                .any(|v| v.words.windows(tokens.len()).any(|window| window == tokens))
    }
}

// =============================================================================
// SCORING
// =============================================================================

/// Linear recency bonus: full for an asset created now, zero at 30 days.
/// Timestamps in the future get the full bonus.
pub fn recency_bonus(created_at: DateTime<Utc>, now: DateTime<Utc>) -> u64 {
    let window = RECENCY_WINDOW_DAYS * 24 * 60 * 60;
    let age = (now - created_at).num_seconds();
    if age <= 0 {
        return RECENCY_MAX_BONUS;
    }
    if age >= window {
        return 0;
    }
    (RECENCY_MAX_BONUS * (window - age) as u64 / window as u64).min(RECENCY_MAX_BONUS)
}

/// Score one record against the corrected query tokens.
pub fn score_record(
    record: &AssetRecord,
    tokens: &[String],
    weights: &FieldWeights,
    now: DateTime<Utc>,
) -> u64 {
    let text = RecordText::new(record);
    let mut total = 0u64;
    let mut matched_tokens = 0u64;

    for token in tokens {
        let mut matched = false;
        for field in SearchField::ALL {
            if let Some(tier) = text.best_tier(field, token) {
                total += tier.points(weights.weight(field));
                matched = true;
            }
        }
        if matched {
            matched_tokens += 1;
        }
    }

    if tokens.len() >= 2 && text.contains_phrase(tokens) {
        total += PHRASE_BONUS;
    }

    if !tokens.is_empty() && matched_tokens == tokens.len() as u64 {
        total += ALL_TOKENS_BONUS;
    } else {
        total += PARTIAL_TOKEN_BONUS * matched_tokens;
    }

    total + recency_bonus(record.created_at, now)
}

/// Score a whole candidate pool. Either every candidate is scored or, if
/// scoring panics, the call fails; there is no partial result.
pub fn score_all(
    candidates: Vec<AssetRecord>,
    tokens: &[String],
    weights: &FieldWeights,
    now: DateTime<Utc>,
) -> Vec<ScoredCandidate> {
    let score = |record: AssetRecord| {
        let score = score_record(&record, tokens, weights, now);
        ScoredCandidate {
            record: Arc::new(record),
            score,
        }
    };

    #[cfg(feature = "parallel")]
    {
        candidates.into_par_iter().map(score).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        candidates.into_iter().map(score).collect()
    }
}
