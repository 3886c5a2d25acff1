//! Index construction property tests.
//!
//! These verify the posting-list invariants over random corpora:
//! - The engine is well-formed (ascending, in-bounds, normalized, non-empty)
//! - Every term of every indexed message has a posting for that message
//! - Messages without text never enter the table

use proptest::prelude::*;
use scrollback::testing::{make_conversation, make_message, make_session};
use scrollback::{build_engine, check_engine_well_formed, find_matching_messages, tokenize, Conversation};

/// Generate random word-like strings.
fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9]{2,8}").unwrap()
}

/// Generate random message text (multiple words).
fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 1..10).prop_map(|words| words.join(" "))
}

/// Generate a small corpus of conversations.
fn corpus_strategy() -> impl Strategy<Value = Vec<Conversation>> {
    prop::collection::vec(
        prop::collection::vec(text_strategy(), 1..5),
        1..4,
    )
    .prop_map(|projects| {
        projects
            .into_iter()
            .enumerate()
            .map(|(p, texts)| {
                let messages = texts
                    .into_iter()
                    .enumerate()
                    .map(|(m, text)| {
                        make_message(&format!("m-{}-{}", p, m), "user", (p * 100 + m) as i64, &text)
                    })
                    .collect();
                make_conversation(
                    &format!("/proj/{}", p),
                    vec![make_session(&format!("s-{}", p), "Session", messages)],
                )
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: every built engine is well-formed.
    #[test]
    fn prop_engine_well_formed(corpus in corpus_strategy()) {
        let engine = build_engine(&corpus);
        prop_assert!(check_engine_well_formed(&engine));
    }

    /// Property: every message is reachable through each of its own terms.
    #[test]
    fn prop_message_reachable_by_own_terms(corpus in corpus_strategy()) {
        let engine = build_engine(&corpus);

        let mut position = 0u32;
        for conversation in &corpus {
            for session in &conversation.sessions {
                for message in &session.messages {
                    let text: Vec<&str> = message
                        .content
                        .iter()
                        .filter_map(|b| b.searchable_text())
                        .collect();
                    let text = text.join(" ");
                    if text.is_empty() {
                        continue;
                    }
                    for term in tokenize(&text) {
                        let matches = find_matching_messages(&engine, &[term.clone()]);
                        prop_assert!(
                            matches.contains(&position),
                            "term {:?} does not reach message {}",
                            term,
                            position
                        );
                    }
                    position += 1;
                }
            }
        }
    }

    /// Property: message count never exceeds the corpus message total, and
    /// term count never exceeds the posting count.
    #[test]
    fn prop_counts_consistent(corpus in corpus_strategy()) {
        let engine = build_engine(&corpus);
        let total: usize = corpus
            .iter()
            .flat_map(|c| &c.sessions)
            .map(|s| s.messages.len())
            .sum();

        prop_assert!(engine.message_count() <= total);
        prop_assert!(engine.term_count() <= engine.posting_count());
    }
}
