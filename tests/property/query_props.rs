//! Query parser property tests.

use proptest::prelude::*;
use scrollback::{parse_query, tokenize};

/// Word-like fragments for building queries.
fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9]{2,8}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Property: phrases are lowercase, trimmed, and non-empty.
    #[test]
    fn prop_phrases_normalized(query in ".{0,120}") {
        let parsed = parse_query(&query);
        for phrase in &parsed.phrases {
            prop_assert!(!phrase.is_empty());
            prop_assert_eq!(&phrase.to_lowercase(), phrase);
            prop_assert_eq!(phrase.trim(), phrase.as_str());
        }
    }

    /// Property: terms behave like tokenizer output - unique and normalized.
    #[test]
    fn prop_terms_unique(query in ".{0,120}") {
        let parsed = parse_query(&query);
        let unique: std::collections::HashSet<_> = parsed.terms.iter().collect();
        prop_assert_eq!(unique.len(), parsed.terms.len());
    }

    /// Property: every token of every phrase ends up in the term list, so
    /// phrase queries still narrow through the index.
    #[test]
    fn prop_phrase_tokens_unioned_into_terms(
        words in prop::collection::vec(word_strategy(), 1..4)
    ) {
        let query = format!("\"{}\"", words.join(" "));
        let parsed = parse_query(&query);

        for token in tokenize(&words.join(" ")) {
            prop_assert!(
                parsed.terms.contains(&token),
                "phrase token {:?} missing from terms {:?}",
                token,
                parsed.terms
            );
        }
    }

    /// Property: an unquoted query has no phrases and tokenizes directly.
    #[test]
    fn prop_unquoted_query_is_pure_terms(
        words in prop::collection::vec(word_strategy(), 0..6)
    ) {
        let query = words.join(" ");
        let parsed = parse_query(&query);

        prop_assert!(parsed.phrases.is_empty());
        prop_assert_eq!(parsed.terms, tokenize(&query));
    }

    /// Property: parsing never panics on arbitrary input, quotes included.
    #[test]
    fn prop_parse_total(query in "[\\s\\S]{0,200}") {
        let _ = parse_query(&query);
    }
}
