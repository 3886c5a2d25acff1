//! In-memory full-text search for AI coding-session transcripts.
//!
//! This crate indexes a corpus of chat transcripts (projects -> sessions ->
//! messages -> content blocks) and answers free-text queries with boolean AND
//! matching, quoted-phrase filtering, and highlighted excerpts, grouped by
//! conversation and ranked by recency. Everything runs from memory; queries
//! never block on I/O.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌─────────────┐     ┌──────────────┐
//! │ tokenize.rs  │────▶│  index.rs   │────▶│  search.rs   │
//! │ (tokenize,   │     │(build_engine│     │ (search,     │
//! │  slugify)    │     │ + postings) │     │  AND match)  │
//! └──────────────┘     └─────────────┘     └──────┬───────┘
//!        ▲                                        │
//!        │             ┌─────────────┐     ┌──────▼───────┐
//!        └─────────────│  query.rs   │     │  excerpt.rs  │
//!                      │(parse_query)│     │ (windowing,  │
//!                      └─────────────┘     │  <mark> tags)│
//!                                          └──────────────┘
//! ```
//!
//! # Concurrency model
//!
//! [`build_engine`] is a one-shot, single-threaded bulk operation. The
//! returned [`SearchEngine`] is immutable: [`search`] only reads, so any
//! number of queries may run concurrently against a shared reference with no
//! locking. Rebuilding after a corpus change means constructing a new engine
//! and swapping the reference - in-flight queries against the old instance
//! are unaffected.
//!
//! # Usage
//!
//! ```
//! use scrollback::{build_engine, search};
//! use scrollback::testing::single_message_corpus;
//!
//! let corpus = single_message_corpus("/dev/alpha", "s1", "Hello Claude");
//! let engine = build_engine(&corpus);
//!
//! let results = search(&engine, "hello", "", "");
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].matches[0].excerpt, "<mark>Hello</mark> Claude");
//! ```

// Module declarations
mod excerpt;
mod index;
mod query;
mod search;
mod tokenize;
mod types;

pub mod testing;

// Re-exports for public API
pub use excerpt::{build_excerpt, CONTEXT_CHARS, MAX_EXCERPT_CHARS};
pub use index::{build_engine, check_engine_well_formed};
pub use query::parse_query;
pub use search::{find_matching_messages, search};
pub use tokenize::{slugify, tokenize};
pub use types::{
    ContentBlock, Conversation, MatchResult, Message, ParsedQuery, SearchEngine, SearchResult,
    Session,
};
