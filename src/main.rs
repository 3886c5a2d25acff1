// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;

use clap::Parser;

use scrollback::{build_engine, search, Conversation};

mod cli;
use cli::display;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Search {
            corpus,
            query,
            project,
            session,
            limit,
            json,
        } => run_search(&corpus, &query, &project, &session, limit, json),
        Commands::Stats { corpus } => run_stats(&corpus),
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

/// Load a corpus file: a JSON array of conversations.
fn load_corpus(path: &str) -> Result<Vec<Conversation>, String> {
    let raw = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read corpus {}: {}", path, e))?;
    serde_json::from_str(&raw).map_err(|e| format!("Invalid corpus JSON in {}: {}", path, e))
}

fn run_search(
    corpus_path: &str,
    query: &str,
    project: &str,
    session: &str,
    limit: usize,
    json: bool,
) -> Result<(), String> {
    let corpus = load_corpus(corpus_path)?;
    let engine = build_engine(&corpus);

    let results = search(&engine, query, project, session);
    let shown = if limit == 0 {
        results.len()
    } else {
        limit.min(results.len())
    };

    if json {
        let out = serde_json::to_string_pretty(&results[..shown])
            .map_err(|e| format!("Failed to serialize results: {}", e))?;
        println!("{}", out);
    } else {
        display::print_results(query, &results, shown);
    }

    Ok(())
}

fn run_stats(corpus_path: &str) -> Result<(), String> {
    let corpus = load_corpus(corpus_path)?;
    let engine = build_engine(&corpus);

    let sessions: usize = corpus.iter().map(|c| c.sessions.len()).sum();
    display::print_stats(&engine, corpus.len(), sessions);

    Ok(())
}
