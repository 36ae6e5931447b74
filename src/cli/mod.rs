// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the lumen command-line interface.
//!
//! Three subcommands over a JSON catalog export: `search` for the first page
//! (or every page with `--all`), `next` to fetch a later page through the
//! cursor path, and `suggest` for title completions.

pub mod display;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lumen", about = "Typo-tolerant search over a media catalog", version)]
pub struct Cli {
    /// TOML file overriding the search defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a catalog and print the first page of results
    Search {
        /// JSON array of catalog documents
        catalog: PathBuf,

        /// Free-text query
        query: String,

        /// Page size (clamped to the configured bounds)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Follow cursors and print every page
        #[arg(long)]
        all: bool,

        /// Print pages as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the page that starts at a cursor
    ///
    /// Runs the first search in the same process, so the cursor is served
    /// from the result cache exactly as a follow-up request would be.
    Next {
        catalog: PathBuf,

        query: String,

        /// Offset of the page to fetch
        #[arg(short, long)]
        cursor: usize,

        #[arg(short, long)]
        limit: Option<usize>,

        #[arg(long)]
        json: bool,
    },

    /// Suggest titles for a typed prefix
    Suggest {
        catalog: PathBuf,

        prefix: String,
    },
}
