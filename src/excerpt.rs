// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Snippet extraction and match highlighting.
//!
//! An excerpt is a window of the message content around the earliest match,
//! with `<mark>` spans wrapped around every matched phrase and term. Phrases
//! are marked before terms so a multi-word match is wrapped as one contiguous
//! span; term marking can then re-wrap text already inside a phrase span,
//! producing nested markers. That interaction is observed behavior downstream
//! renderers rely on - pinned in tests, not fixed here.
//!
//! # Character offsets, not byte offsets
//!
//! Window limits are measured in characters. All slicing goes through
//! [`slice_chars`] / [`floor_char_boundary`] so multi-byte UTF-8 content can
//! never panic a slice, even where case folding shifts byte widths.

/// Maximum displayed excerpt length, in characters.
pub const MAX_EXCERPT_CHARS: usize = 500;

/// Context kept on each side of the first match, in characters.
pub const CONTEXT_CHARS: usize = 100;

const ELLIPSIS: &str = "...";
const MARK_OPEN: &str = "<mark>";
const MARK_CLOSE: &str = "</mark>";

/// Build the highlighted excerpt for one matching message.
///
/// `terms` and `phrases` must already be lowercase (they come straight from
/// [`parse_query`](crate::parse_query)). The window anchors on the earliest
/// case-insensitive occurrence of any phrase or term as a plain substring;
/// when nothing is found directly - possible when the match came from
/// phrase-expansion terms - the window falls back to the head of the content.
pub fn build_excerpt(content: &str, terms: &[String], phrases: &[String]) -> String {
    let window = excerpt_window(content, terms, phrases);
    highlight(&window, terms, phrases)
}

/// Select the unhighlighted excerpt window.
fn excerpt_window(content: &str, terms: &[String], phrases: &[String]) -> String {
    let total_chars = content.chars().count();
    if total_chars <= MAX_EXCERPT_CHARS {
        return content.to_string();
    }

    let lower = content.to_lowercase();
    let anchor_byte = phrases
        .iter()
        .chain(terms.iter())
        .filter_map(|needle| lower.find(needle.as_str()))
        .min();

    match anchor_byte {
        None => {
            let mut out = slice_chars(content, 0, MAX_EXCERPT_CHARS).to_string();
            out.push_str(ELLIPSIS);
            out
        }
        Some(byte) => {
            let anchor = lower[..byte].chars().count();
            let start = anchor.saturating_sub(CONTEXT_CHARS);
            let end = (anchor + CONTEXT_CHARS).min(total_chars);

            let mut out = String::new();
            if start > 0 {
                out.push_str(ELLIPSIS);
            }
            out.push_str(slice_chars(content, start, end));
            if end < total_chars {
                out.push_str(ELLIPSIS);
            }
            out
        }
    }
}

/// Wrap every occurrence of every phrase, then every term, in `<mark>` spans.
///
/// Phrase-before-term ordering is load-bearing: it makes multi-word matches
/// contiguous spans before single-word marking runs. Running terms second
/// means a term inside an already-marked phrase gets wrapped again (nested
/// markers) - see the module docs.
fn highlight(excerpt: &str, terms: &[String], phrases: &[String]) -> String {
    let mut out = excerpt.to_string();
    for phrase in phrases {
        out = mark_all(&out, phrase);
    }
    for term in terms {
        out = mark_all(&out, term);
    }
    out
}

/// Wrap every case-insensitive, non-overlapping occurrence of `needle`.
///
/// `needle` must be lowercase and non-empty. Occurrence offsets are found in
/// a lowercased copy and applied to the original text; boundary clamping
/// covers the rare case folds that change byte widths.
fn mark_all(text: &str, needle: &str) -> String {
    if needle.is_empty() {
        return text.to_string();
    }

    let lower = text.to_lowercase();
    let mut out = String::with_capacity(text.len() + MARK_OPEN.len() + MARK_CLOSE.len());
    let mut cursor = 0usize;

    loop {
        let Some(found) = lower.get(cursor..).and_then(|tail| tail.find(needle)) else {
            break;
        };
        let start = floor_char_boundary(text, cursor + found);
        let end = floor_char_boundary(text, cursor + found + needle.len());
        if end <= start || start < cursor {
            break;
        }

        out.push_str(&text[cursor..start]);
        out.push_str(MARK_OPEN);
        out.push_str(&text[start..end]);
        out.push_str(MARK_CLOSE);
        cursor = end;
    }

    out.push_str(&text[cursor..]);
    out
}

/// Slice by character offsets, clamped to the string's length.
fn slice_chars(s: &str, start: usize, end: usize) -> &str {
    if end <= start {
        return "";
    }
    let from = byte_of_char(s, start);
    let to = byte_of_char(s, end);
    &s[from..to]
}

/// Byte offset of the nth character, or the string's length past the end.
fn byte_of_char(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map_or(s.len(), |(byte, _)| byte)
}

/// Largest char-boundary byte offset `<= idx`.
fn floor_char_boundary(s: &str, idx: usize) -> usize {
    let mut idx = idx.min(s.len());
    while !s.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}
