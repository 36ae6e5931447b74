// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search service configuration.
//!
//! Every field has a default, so an empty TOML file (or none at all) gives a
//! working service. A partial file overrides only what it names:
//!
//! ```toml
//! candidate_cap = 2000
//! cache_ttl_secs = 120
//!
//! [weights]
//! title = 12
//! ```

use crate::scoring::FieldWeights;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Most records the store may return per retrieval.
    pub candidate_cap: usize,
    /// Page size bounds; requested limits are clamped into them.
    pub min_limit: usize,
    pub max_limit: usize,
    /// Page size the CLI uses when none is given.
    pub default_limit: usize,
    pub cache_capacity: usize,
    pub cache_ttl_secs: u64,
    /// Edit bound for spelling correction and fallback near words.
    pub max_edit_distance: usize,
    pub near_words_per_token: usize,
    pub suggest_limit: usize,
    pub suggest_min_chars: usize,
    pub weights: FieldWeights,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            candidate_cap: 1200,
            min_limit: 10,
            max_limit: 200,
            default_limit: 24,
            cache_capacity: 500,
            cache_ttl_secs: 600,
            max_edit_distance: 2,
            near_words_per_token: 5,
            suggest_limit: 10,
            suggest_min_chars: 2,
            weights: FieldWeights::default(),
        }
    }
}

impl SearchConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config")
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    /// Clamp a requested page size into `[min_limit, max_limit]`.
    ///
    /// A misconfigured `min_limit > max_limit` resolves to `max_limit`.
    pub fn clamp_limit(&self, limit: usize) -> usize {
        limit.max(self.min_limit).min(self.max_limit)
    }
}
