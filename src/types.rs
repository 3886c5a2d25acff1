// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a transcript search engine.
//!
//! These types define how transcripts flow into the engine and how results
//! flow back out. Three layers:
//!
//! | Layer            | Types                                      | Owner           |
//! |------------------|--------------------------------------------|-----------------|
//! | Corpus input     | `Conversation`, `Session`, `Message`,      | corpus loader   |
//! |                  | `ContentBlock`                             |                 |
//! | Engine internals | `IndexedMessage`, `SearchEngine`           | this crate      |
//! | Query/results    | `ParsedQuery`, `SearchResult`,             | presentation    |
//! |                  | `MatchResult`                              | layer           |
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **SearchEngine**: immutable after [`build_engine`](crate::build_engine)
//!   returns. Nothing in this crate writes to `messages` or `index` afterwards,
//!   which is what makes unsynchronized concurrent searches sound.
//!
//! - **Posting lists**: every position is `< messages.len()`, strictly
//!   ascending, and unique per term. Positions are appended in table order and
//!   [`tokenize`](crate::tokenize) dedupes terms per message, so both hold by
//!   construction. `check_engine_well_formed` verifies them anyway.
//!
//! - **IndexedMessage**: referenced only by integer position. The struct never
//!   escapes the crate; results carry copies of the fields they need.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// CORPUS INPUT MODEL
// =============================================================================

/// One project's worth of transcripts: a display path plus its sessions,
/// in the order the corpus loader discovered them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    /// Project display path, e.g. `/Users/harry/dev/scrollback`.
    pub project: String,
    pub sessions: Vec<Session>,
}

/// A single recorded session within a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub title: String,
    pub messages: Vec<Message>,
}

/// A single transcript message. `role` is carried as an opaque string
/// ("user", "assistant", "tool", ...) - the engine never interprets it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub role: String,
    pub timestamp: DateTime<Utc>,
    pub content: Vec<ContentBlock>,
}

/// A typed content segment within a message.
///
/// Closed tagged variant matching the transcript wire format. Only [`Text`]
/// is index-eligible; everything else (thinking, tool invocations, tool
/// output) is opaque to the engine and can neither be searched nor leak into
/// excerpts. The gate is [`ContentBlock::searchable_text`] - there is no
/// string comparison on type tags anywhere else.
///
/// [`Text`]: ContentBlock::Text
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text {
        text: String,
    },
    Thinking {
        thinking: String,
    },
    ToolUse {
        name: String,
        input: serde_json::Value,
    },
    ToolResult {
        content: serde_json::Value,
    },
    /// Forward compatibility: unknown block types deserialize here instead of
    /// failing the whole corpus.
    #[serde(other)]
    Other,
}

impl ContentBlock {
    /// The text payload if this block participates in search, `None` otherwise.
    pub fn searchable_text(&self) -> Option<&str> {
        match self {
            ContentBlock::Text { text } => Some(text),
            _ => None,
        }
    }
}

// =============================================================================
// ENGINE INTERNALS
// =============================================================================

/// Denormalized, read-only record for one searchable message.
///
/// Built once per message at index time so that a matching position can be
/// turned into a result without touching the corpus again.
#[derive(Debug, Clone)]
pub(crate) struct IndexedMessage {
    pub project: String,
    pub project_slug: String,
    pub session_id: String,
    pub session_title: String,
    pub message_id: String,
    pub role: String,
    /// Space-joined concatenation of the message's text segments.
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// The complete searchable engine: message table plus inverted index.
///
/// Construct with [`build_engine`](crate::build_engine); query with
/// [`search`](crate::search). A rebuild produces a fresh instance - swapping
/// the current one is the serving layer's job, and in-flight searches against
/// the old instance stay valid.
#[derive(Debug)]
pub struct SearchEngine {
    pub(crate) messages: Vec<IndexedMessage>,
    /// term -> ascending positions into `messages`, unique per term.
    pub(crate) index: HashMap<String, Vec<u32>>,
}

impl SearchEngine {
    /// Number of messages in the table (messages with no text are never added).
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// Number of unique terms in the inverted index.
    pub fn term_count(&self) -> usize {
        self.index.len()
    }

    /// Total posting-list entries across all terms.
    pub fn posting_count(&self) -> usize {
        self.index.values().map(Vec::len).sum()
    }
}

// =============================================================================
// QUERY AND RESULT TYPES
// =============================================================================

/// A parsed query: individual terms (lookup order, deduplicated) plus
/// lowercased phrases requiring exact substring containment.
///
/// Ephemeral - produced per query by [`parse_query`](crate::parse_query) and
/// dropped when the search returns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedQuery {
    pub terms: Vec<String>,
    pub phrases: Vec<String>,
}

impl ParsedQuery {
    /// A query with no terms and no phrases matches nothing.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty() && self.phrases.is_empty()
    }
}

/// All matches within one session, for one query.
///
/// One `SearchResult` exists per distinct (project slug, session id) pair with
/// at least one surviving match; `matches` is ascending by timestamp.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub project: String,
    pub project_slug: String,
    pub session_id: String,
    pub session_title: String,
    pub matches: Vec<MatchResult>,
}

impl SearchResult {
    /// Timestamp of the most recent match, used for result ordering.
    /// `None` for an empty match list (cannot occur for engine output, but
    /// ordering must not fault on it).
    pub(crate) fn last_activity(&self) -> Option<DateTime<Utc>> {
        self.matches.last().map(|m| m.timestamp)
    }
}

/// A single matching message with its highlighted excerpt.
///
/// `excerpt` carries `<mark>` spans around matched phrases and terms; it is
/// NOT HTML-escaped here - escaping for safe display is the presentation
/// layer's responsibility.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub message_id: String,
    pub role: String,
    pub excerpt: String,
    pub timestamp: DateTime<Utc>,
}
