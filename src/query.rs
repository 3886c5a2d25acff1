// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query parsing: free text plus double-quoted phrases.
//!
//! A query like `deploy "hello world" staging` splits into terms
//! `[deploy, staging, hello, world]` and the phrase `hello world`. The
//! phrase's own words are folded back into the term list so the boolean AND
//! stage can narrow candidates through the index before the (linear) substring
//! check runs.

use crate::tokenize::tokenize;
use crate::types::ParsedQuery;

/// Parse a raw query string into terms and phrases.
///
/// Every `"..."` group becomes a phrase candidate: trimmed, lowercased,
/// dropped if empty. Quoted spans are blanked out of the remaining text,
/// which is then tokenized into terms. Each phrase is also tokenized and its
/// words unioned into the term list (deduplicated, order preserved) so that
/// phrase queries still participate in index lookup.
///
/// An unpaired trailing quote is not a phrase; the tail text tokenizes
/// normally.
///
/// # Example
///
/// ```
/// use scrollback::parse_query;
///
/// let parsed = parse_query(r#"deploy "Hello World""#);
/// assert_eq!(parsed.phrases, vec!["hello world"]);
/// assert_eq!(parsed.terms, vec!["deploy", "hello", "world"]);
/// ```
pub fn parse_query(query: &str) -> ParsedQuery {
    let mut phrases: Vec<String> = Vec::new();
    let mut remainder = String::with_capacity(query.len());

    let mut rest = query;
    while let Some(open) = rest.find('"') {
        remainder.push_str(&rest[..open]);
        remainder.push(' ');

        let after = &rest[open + 1..];
        match after.find('"') {
            Some(close) => {
                let phrase = after[..close].trim().to_lowercase();
                if !phrase.is_empty() {
                    phrases.push(phrase);
                }
                rest = &after[close + 1..];
            }
            None => {
                // Unpaired quote: the tail is ordinary text.
                remainder.push_str(after);
                rest = "";
            }
        }
    }
    remainder.push_str(rest);

    let mut terms = tokenize(&remainder);
    for phrase in &phrases {
        for term in tokenize(phrase) {
            if !terms.contains(&term) {
                terms.push(term);
            }
        }
    }

    ParsedQuery { terms, phrases }
}
