//! Text normalization: tokenization and slug derivation.
//!
//! Both indexed content and query text pass through [`tokenize`], so a term
//! looked up at query time is byte-identical to the term stored at index time.
//! That equality is the whole matching model - there is no stemming, no
//! stop-word list, no fuzzy expansion.

use std::collections::HashSet;

/// Word boundary detection: any character that is not a Unicode letter or
/// digit separates tokens.
fn is_word_boundary(c: char) -> bool {
    !c.is_alphanumeric()
}

/// Tokenize text into normalized search terms.
///
/// Lowercases, splits on non-alphanumeric characters, drops tokens shorter
/// than 2 characters, and dedupes while preserving first-occurrence order.
/// Term-to-message is a set relation: a word appearing ten times in one
/// message yields the term once.
///
/// # Example
///
/// ```
/// use scrollback::tokenize;
///
/// assert_eq!(tokenize("Hello, hello world!"), vec!["hello", "world"]);
/// assert!(tokenize("a b c").is_empty());
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut terms: Vec<String> = Vec::new();

    for token in text.to_lowercase().split(is_word_boundary) {
        // Length cutoff is in characters, not bytes - a lone CJK ideograph or
        // accented letter is still a one-character token.
        if token.chars().count() < 2 {
            continue;
        }
        if seen.insert(token.to_string()) {
            terms.push(token.to_string());
        }
    }

    terms
}

/// Derive a URL-safe slug from a project display path.
///
/// Lowercases, collapses every run of non-alphanumeric characters into a
/// single `-`, and trims the edges:
/// `/Users/harry/dev/scrollback` -> `users-harry-dev-scrollback`.
///
/// Collisions between distinct paths are tolerated; filters accept the raw
/// display path as well as the slug.
pub fn slugify(path: &str) -> String {
    let mut slug = String::with_capacity(path.len());
    let mut pending_dash = false;

    for c in path.to_lowercase().chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }

    slug
}
