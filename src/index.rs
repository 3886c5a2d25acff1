//! Inverted index construction.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **POSTING_ASCENDING**: each posting list is strictly ascending by
//!    position (positions are appended in table order, once per term).
//! 2. **POSTING_IN_BOUNDS**: every position is a valid `messages` index.
//! 3. **NON_EMPTY**: every term has at least one posting.
//! 4. **NORMALIZED**: every indexed term is its own tokenization - lowercase,
//!    alphanumeric, at least two characters.
//!
//! Construction is a single-threaded, one-shot pass. There is no partial or
//! streaming state: `build_engine` returns a fully formed engine, and nothing
//! mutates it afterwards.

use std::collections::HashMap;

use crate::tokenize::{slugify, tokenize};
use crate::types::{ContentBlock, Conversation, IndexedMessage, SearchEngine};

/// Build a search engine from an ordered collection of conversations.
///
/// Walks every message of every session in supplied order. A message's
/// searchable content is the space-joined concatenation of its text segments;
/// tool payloads, tool output, and thinking blocks never enter the index or
/// the excerpts. Messages with no text at all are skipped entirely - they get
/// no table entry and no postings.
///
/// Supplied order affects only the positional indices of the message table,
/// never query results.
pub fn build_engine(conversations: &[Conversation]) -> SearchEngine {
    let mut messages: Vec<IndexedMessage> = Vec::new();
    let mut index: HashMap<String, Vec<u32>> = HashMap::new();

    for conversation in conversations {
        let slug = slugify(&conversation.project);

        for session in &conversation.sessions {
            for message in &session.messages {
                let content = message
                    .content
                    .iter()
                    .filter_map(ContentBlock::searchable_text)
                    .collect::<Vec<_>>()
                    .join(" ");
                if content.is_empty() {
                    continue;
                }

                let position = messages.len() as u32;
                for term in tokenize(&content) {
                    index.entry(term).or_default().push(position);
                }

                messages.push(IndexedMessage {
                    project: conversation.project.clone(),
                    project_slug: slug.clone(),
                    session_id: session.id.clone(),
                    session_title: session.title.clone(),
                    message_id: message.id.clone(),
                    role: message.role.clone(),
                    content,
                    timestamp: message.timestamp,
                });
            }
        }
    }

    SearchEngine { messages, index }
}

/// Verify the index invariants listed in the module docs.
///
/// Diagnostic only - `build_engine` upholds these by construction, but the
/// check is cheap enough to run in tests and debug assertions.
pub fn check_engine_well_formed(engine: &SearchEngine) -> bool {
    for (term, postings) in &engine.index {
        // NON_EMPTY
        if postings.is_empty() {
            return false;
        }

        // NORMALIZED: the term must tokenize to exactly itself.
        if tokenize(term) != [term.clone()] {
            return false;
        }

        // POSTING_ASCENDING (strict, which also guarantees uniqueness)
        if postings.windows(2).any(|w| w[0] >= w[1]) {
            return false;
        }

        // POSTING_IN_BOUNDS
        if postings
            .iter()
            .any(|&p| p as usize >= engine.messages.len())
        {
            return false;
        }
    }

    true
}
