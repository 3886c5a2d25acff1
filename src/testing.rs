//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use chrono::{DateTime, Utc};

use crate::types::{ContentBlock, Conversation, Message, Session};

/// Base instant for deterministic test timestamps (2023-11-14T22:13:20Z).
const TEST_EPOCH: i64 = 1_700_000_000;

/// Deterministic timestamp `offset_secs` after the test epoch.
pub fn ts(offset_secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(TEST_EPOCH + offset_secs, 0)
        .expect("test epoch offset in range")
}

/// Create a message with a single text block.
///
/// This is the canonical implementation used across all tests.
pub fn make_message(id: &str, role: &str, at_secs: i64, text: &str) -> Message {
    Message {
        id: id.to_string(),
        role: role.to_string(),
        timestamp: ts(at_secs),
        content: vec![ContentBlock::Text {
            text: text.to_string(),
        }],
    }
}

/// Create a session with the given messages.
pub fn make_session(id: &str, title: &str, messages: Vec<Message>) -> Session {
    Session {
        id: id.to_string(),
        title: title.to_string(),
        messages,
    }
}

/// Create a conversation for one project.
pub fn make_conversation(project: &str, sessions: Vec<Session>) -> Conversation {
    Conversation {
        project: project.to_string(),
        sessions,
    }
}

/// One-project, one-session, one-message corpus - the smallest useful fixture.
pub fn single_message_corpus(project: &str, session: &str, text: &str) -> Vec<Conversation> {
    vec![make_conversation(
        project,
        vec![make_session(
            session,
            &format!("Session {}", session),
            vec![make_message("m1", "user", 0, text)],
        )],
    )]
}
