//! Tokenizer property tests.
//!
//! These pin the normalization contract:
//! - Every term is lowercase, alphanumeric, and at least two characters
//! - Output is deduplicated, preserving first occurrence
//! - Tokenization is idempotent over its own output

use proptest::prelude::*;
use scrollback::tokenize;
use std::collections::HashSet;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: every produced term is lowercase alphanumeric, >= 2 chars.
    #[test]
    fn prop_terms_are_normalized(text in ".{0,200}") {
        for term in tokenize(&text) {
            prop_assert!(term.chars().count() >= 2, "short term {:?}", term);
            prop_assert!(
                term.chars().all(|c| c.is_alphanumeric()),
                "non-alphanumeric term {:?}",
                term
            );
            prop_assert_eq!(&term.to_lowercase(), &term, "uppercase survived");
        }
    }

    /// Property: no duplicates in the output.
    #[test]
    fn prop_terms_are_unique(text in ".{0,200}") {
        let terms = tokenize(&text);
        let unique: HashSet<_> = terms.iter().collect();
        prop_assert_eq!(unique.len(), terms.len());
    }

    /// Property: tokenizing the joined output reproduces the output.
    #[test]
    fn prop_tokenize_is_idempotent(text in ".{0,200}") {
        let terms = tokenize(&text);
        let again = tokenize(&terms.join(" "));
        prop_assert_eq!(terms, again);
    }

    /// Property: case folding the input does not change the terms.
    #[test]
    fn prop_case_insensitive(text in "[a-zA-Z ]{0,100}") {
        prop_assert_eq!(tokenize(&text), tokenize(&text.to_uppercase()));
    }

    /// Property: appending a separator never changes the terms.
    #[test]
    fn prop_trailing_separator_is_noop(text in "[a-z0-9 ]{0,100}") {
        let mut with_sep = text.clone();
        with_sep.push('!');
        prop_assert_eq!(tokenize(&text), tokenize(&with_sep));
    }
}
