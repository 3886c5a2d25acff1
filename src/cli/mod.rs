// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the scrollback command-line interface.
//!
//! Two subcommands: `search` to query a transcript corpus and `stats` to
//! print corpus and index statistics. The corpus is a JSON file holding an
//! array of conversations - the same shape the library's corpus-loader
//! contract describes, so anything that can dump its transcripts to JSON can
//! be searched from the shell.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "scrollback",
    about = "Full-text search over AI coding-session transcripts",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a corpus and display results grouped by session
    Search {
        /// Path to corpus JSON (array of conversations)
        #[arg(short, long)]
        corpus: String,

        /// Search query; double-quoted groups match as exact phrases
        query: String,

        /// Only match messages from this project (display path or slug)
        #[arg(short, long, default_value = "")]
        project: String,

        /// Only match messages from this session id
        #[arg(short, long, default_value = "")]
        session: String,

        /// Maximum number of sessions to display (0 = all)
        ///
        /// The engine itself never paginates; this truncates the returned
        /// sequence for display.
        #[arg(short, long, default_value = "0")]
        limit: usize,

        /// Emit results as JSON instead of terminal output
        #[arg(long)]
        json: bool,
    },

    /// Print corpus and index statistics
    Stats {
        /// Path to corpus JSON (array of conversations)
        #[arg(short, long)]
        corpus: String,
    },
}
