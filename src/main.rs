// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use lumen::{MemoryCatalog, SearchConfig, SearchPage, SearchService};
use std::path::Path;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::display::{print_page, print_suggestions};
use cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => SearchConfig::load(path)?,
        None => SearchConfig::default(),
    };

    match cli.command {
        Commands::Search {
            catalog,
            query,
            limit,
            all,
            json,
        } => {
            let service = open(&catalog, config)?;
            let limit = limit.unwrap_or(service.config().default_limit);
            run_search(&service, &query, limit, all, json).await
        }
        Commands::Next {
            catalog,
            query,
            cursor,
            limit,
            json,
        } => {
            let service = open(&catalog, config)?;
            let limit = limit.unwrap_or(service.config().default_limit);
            run_next(&service, &query, cursor, limit, json).await
        }
        Commands::Suggest { catalog, prefix } => {
            let service = open(&catalog, config)?;
            let titles = service.suggest(&prefix).await?;
            print_suggestions(&prefix, &titles);
            Ok(())
        }
    }
}

fn open(catalog: &Path, config: SearchConfig) -> Result<SearchService<MemoryCatalog>> {
    let store = MemoryCatalog::load_json(catalog)
        .with_context(|| format!("Failed to open catalog: {}", catalog.display()))?;
    Ok(SearchService::with_config(store, config))
}

async fn run_search(
    service: &SearchService<MemoryCatalog>,
    query: &str,
    limit: usize,
    all: bool,
    json: bool,
) -> Result<()> {
    let started = Instant::now();
    let mut page = service.search_first(query, limit).await?;
    emit(query, &page, 0, started, json)?;

    if all {
        let mut offset = page.items.len();
        while let Some(cursor) = page.cursor {
            let started = Instant::now();
            page = service.search_next(query, cursor, limit).await?;
            emit(query, &page, offset, started, json)?;
            offset += page.items.len();
        }
    }
    Ok(())
}

async fn run_next(
    service: &SearchService<MemoryCatalog>,
    query: &str,
    cursor: usize,
    limit: usize,
    json: bool,
) -> Result<()> {
    service.search_first(query, limit).await?;
    let started = Instant::now();
    let page = service.search_next(query, cursor, limit).await?;
    emit(query, &page, cursor, started, json)
}

fn emit(query: &str, page: &SearchPage, offset: usize, started: Instant, json: bool) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(page).context("Failed to serialize page")?;
        println!("{out}");
    } else {
        print_page(query, page, offset, started.elapsed());
    }
    Ok(())
}
