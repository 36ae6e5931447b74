// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for the lumen CLI.
//!
//! OneDark colors on dark terminals, One Light on light ones. `LUMEN_THEME`
//! ("dark" or "light") wins, then the `COLORFGBG` hint, then dark. Colors are
//! off when `NO_COLOR` is set or stdout is not a terminal, so piped output
//! stays plain.

use lumen::{AssetRecord, SearchPage};
use std::io::IsTerminal;
use std::sync::OnceLock;
use std::time::Duration;

/// Widest a title may print before it is cut with an ellipsis.
pub const TITLE_WIDTH: usize = 48;

// ═══════════════════════════════════════════════════════════════════════════
// THEME
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("LUMEN_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg": backgrounds 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(Ok(bg)) = colorfgbg.split(';').next_back().map(str::parse::<u8>) {
            if bg >= 7 && bg != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Cyan,
    Green,
    Yellow,
    Magenta,
    Gray,
}

impl Color {
    fn rgb(self) -> (u8, u8, u8) {
        match (theme(), self) {
            (Theme::Dark, Color::Cyan) => (86, 182, 194),
            (Theme::Dark, Color::Green) => (152, 195, 121),
            (Theme::Dark, Color::Yellow) => (229, 192, 123),
            (Theme::Dark, Color::Magenta) => (198, 120, 221),
            (Theme::Dark, Color::Gray) => (92, 99, 112),
            (Theme::Light, Color::Cyan) => (1, 132, 188),
            (Theme::Light, Color::Green) => (80, 161, 79),
            (Theme::Light, Color::Yellow) => (193, 132, 1),
            (Theme::Light, Color::Magenta) => (166, 38, 164),
            (Theme::Light, Color::Gray) => (160, 161, 167),
        }
    }

    fn escape(self) -> String {
        let (r, g, b) = self.rgb();
        format!("\x1b[38;2;{};{};{}m", r, g, b)
    }
}

pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    std::io::stdout().is_terminal()
}

/// Apply a theme color (plus modifiers) when colors are on.
pub fn paint(color: Color, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color.escape(), text, RESET)
    } else {
        text.to_string()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// FORMATTING
// ═══════════════════════════════════════════════════════════════════════════

/// Cut `text` to `width` chars, ending in "…" when anything was dropped.
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(1)).collect();
    format!("{kept}…")
}

/// The first non-empty of title, name, file name, or the id.
pub fn display_title(record: &AssetRecord) -> &str {
    [
        record.title.as_str(),
        record.name.as_str(),
        record.files.file_name.as_str(),
    ]
    .into_iter()
    .find(|s| !s.trim().is_empty())
    .unwrap_or(record.id.as_str())
}

pub fn format_tags(tags: &[String]) -> String {
    tags.iter()
        .map(|t| format!("#{t}"))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn format_elapsed(elapsed: Duration) -> String {
    let micros = elapsed.as_micros();
    if micros < 1_000 {
        format!("{micros}µs")
    } else {
        format!("{:.1}ms", micros as f64 / 1_000.0)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// OUTPUT
// ═══════════════════════════════════════════════════════════════════════════

/// Print one page. `offset` is the rank of the page's first item, minus one.
pub fn print_page(query: &str, page: &SearchPage, offset: usize, elapsed: Duration) {
    if page.items.is_empty() {
        println!("{}", paint(Color::Gray, &[], &format!("No results for \"{query}\"")));
        return;
    }

    for (i, record) in page.items.iter().enumerate() {
        let rank = paint(Color::Gray, &[], &format!("{:>4}.", offset + i + 1));
        let title = paint(Color::Cyan, &[BOLD], &truncate(display_title(record), TITLE_WIDTH));
        let category = if record.category.is_empty() {
            String::new()
        } else {
            paint(Color::Magenta, &[], &format!(" [{}]", record.category))
        };
        println!("{rank} {title}{category}");

        let mut detail = vec![paint(Color::Gray, &[], &record.id)];
        if !record.tags.is_empty() {
            detail.push(paint(Color::Green, &[], &format_tags(&record.tags)));
        }
        detail.push(paint(Color::Gray, &[], &record.created_at.format("%Y-%m-%d").to_string()));
        println!("      {}", detail.join("  "));
    }

    let shown_to = offset + page.items.len();
    let next = match page.cursor {
        Some(cursor) => format!("next cursor {cursor}"),
        None => "end of results".to_string(),
    };
    println!(
        "{}",
        paint(
            Color::Yellow,
            &[],
            &format!(
                "{}–{} of {} · {} · {}",
                offset + 1,
                shown_to,
                page.total,
                next,
                format_elapsed(elapsed)
            ),
        )
    );
}

pub fn print_suggestions(prefix: &str, titles: &[String]) {
    if titles.is_empty() {
        println!("{}", paint(Color::Gray, &[], &format!("No suggestions for \"{prefix}\"")));
        return;
    }
    for title in titles {
        println!("{}", paint(Color::Cyan, &[], title));
    }
}
