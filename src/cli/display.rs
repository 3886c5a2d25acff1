// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the scrollback CLI.
//!
//! Grouped search results rendered the way you'd want to read them in a
//! terminal: session header, then each match with its timestamp, role, and
//! excerpt. `<mark>` spans coming out of the engine are translated to ANSI
//! highlights on a TTY and stripped everywhere else, so piped output stays
//! clean text.
//!
//! Color policy: `NO_COLOR` wins, then TTY detection. Machine consumers
//! should use `--json` instead of scraping this output.

use std::sync::OnceLock;

use scrollback::{SearchEngine, SearchResult};

const MARK_OPEN: &str = "<mark>";
const MARK_CLOSE: &str = "</mark>";

const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const CYAN: &str = "\x1b[36m";
const HIGHLIGHT: &str = "\x1b[1;33m"; // bold yellow
const RESET: &str = "\x1b[0m";

/// Cached color decision
static USE_COLOR: OnceLock<bool> = OnceLock::new();

/// Whether to emit ANSI escapes: `NO_COLOR` unset and stdout is a TTY.
fn use_color() -> bool {
    *USE_COLOR.get_or_init(|| {
        std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
    })
}

fn paint(text: &str, code: &str) -> String {
    if use_color() {
        format!("{}{}{}", code, text, RESET)
    } else {
        text.to_string()
    }
}

/// Translate engine `<mark>` spans into ANSI highlights (or strip them).
fn render_excerpt(excerpt: &str) -> String {
    if use_color() {
        ansi_marks(excerpt)
    } else {
        strip_marks(excerpt)
    }
}

/// Nested marks collapse cleanly: every opening tag re-arms the highlight,
/// every closing tag resets, so doubly-wrapped spans render highlighted once.
fn ansi_marks(excerpt: &str) -> String {
    excerpt
        .replace(MARK_OPEN, HIGHLIGHT)
        .replace(MARK_CLOSE, RESET)
}

fn strip_marks(excerpt: &str) -> String {
    excerpt.replace(MARK_OPEN, "").replace(MARK_CLOSE, "")
}

/// Print grouped search results.
pub fn print_results(query: &str, results: &[SearchResult], shown: usize) {
    if results.is_empty() {
        println!("No matches for {}", paint(query, BOLD));
        return;
    }

    let total_matches: usize = results.iter().map(|r| r.matches.len()).sum();
    println!(
        "{} match(es) in {} session(s) for {}",
        total_matches,
        results.len(),
        paint(query, BOLD)
    );

    for result in &results[..shown] {
        println!();
        println!(
            "{} {} {}",
            paint(&result.project, CYAN),
            paint("·", DIM),
            paint(&result.session_title, BOLD)
        );
        println!("  {}", paint(&result.session_id, DIM));

        for m in &result.matches {
            println!(
                "  {} {:<9} {}",
                paint(&m.timestamp.format("%Y-%m-%d %H:%M").to_string(), DIM),
                m.role,
                render_excerpt(&m.excerpt)
            );
        }
    }

    if shown < results.len() {
        println!();
        println!(
            "{}",
            paint(
                &format!("... {} more session(s) not shown", results.len() - shown),
                DIM
            )
        );
    }
}

/// Print corpus and index statistics.
pub fn print_stats(engine: &SearchEngine, conversations: usize, sessions: usize) {
    println!("Conversations   {}", conversations);
    println!("Sessions        {}", sessions);
    println!("Messages        {}  (searchable)", engine.message_count());
    println!("Unique terms    {}", engine.term_count());
    println!("Postings        {}", engine.posting_count());
}
