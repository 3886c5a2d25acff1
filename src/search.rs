//! Boolean term matching and search orchestration.
//!
//! A query runs the pipeline parse -> match -> filter -> group -> rank ->
//! highlight, touching only immutable engine state. Filtering runs strictly
//! before grouping: a session whose matches are all filtered out never forms
//! a group, so it never appears in the results at all.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::excerpt::build_excerpt;
use crate::query::parse_query;
use crate::types::{MatchResult, SearchEngine, SearchResult};

/// Intersect the posting lists of every term: AND semantics.
///
/// Returns the ascending positions of messages containing *all* terms. Empty
/// `terms` yields empty - there is no implicit "match everything". A term
/// absent from the index contributes an empty posting list and therefore
/// collapses the whole intersection: a query mentioning a word that occurs
/// nowhere in the corpus matches nothing, by design.
pub fn find_matching_messages(engine: &SearchEngine, terms: &[String]) -> Vec<u32> {
    let Some((first, rest)) = terms.split_first() else {
        return Vec::new();
    };

    let mut matches: Vec<u32> = engine.index.get(first).cloned().unwrap_or_default();
    for term in rest {
        if matches.is_empty() {
            break;
        }
        match engine.index.get(term) {
            Some(postings) => matches = intersect_sorted(&matches, postings),
            None => matches.clear(),
        }
    }

    matches
}

/// Merge-intersect two ascending position lists.
fn intersect_sorted(a: &[u32], b: &[u32]) -> Vec<u32> {
    let mut out = Vec::with_capacity(a.len().min(b.len()));
    let (mut i, mut j) = (0usize, 0usize);

    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }

    out
}

/// Execute a query against the engine.
///
/// `project` and `session` are optional filters; empty string means
/// unfiltered. The project filter matches either the display path or the
/// derived slug, so both representations of a project reach the same result
/// set. The session filter is an exact id comparison.
///
/// Results are grouped per (project slug, session id), matches within a group
/// ascending by timestamp, groups descending by the timestamp of their last
/// match - sessions with the most recent matching activity rank first. Both
/// sorts are stable, so identical inputs produce identical output, always.
///
/// There is no pagination here; callers slice the returned sequence.
pub fn search(
    engine: &SearchEngine,
    query: &str,
    project: &str,
    session: &str,
) -> Vec<SearchResult> {
    if query.is_empty() {
        return Vec::new();
    }

    let parsed = parse_query(query);
    if parsed.is_empty() {
        return Vec::new();
    }

    let positions = find_matching_messages(engine, &parsed.terms);

    let mut groups: Vec<SearchResult> = Vec::new();
    let mut group_of: HashMap<(String, String), usize> = HashMap::new();

    for &position in &positions {
        let message = &engine.messages[position as usize];

        if !project.is_empty()
            && message.project != project
            && message.project_slug != project
        {
            continue;
        }
        if !session.is_empty() && message.session_id != session {
            continue;
        }
        // Phrases are substring checks against the raw content, not token
        // matches: they see original punctuation where tokenization would
        // have split.
        if !parsed.phrases.is_empty() {
            let content_lower = message.content.to_lowercase();
            if !parsed
                .phrases
                .iter()
                .all(|phrase| content_lower.contains(phrase.as_str()))
            {
                continue;
            }
        }

        let key = (message.project_slug.clone(), message.session_id.clone());
        let group = *group_of.entry(key).or_insert_with(|| {
            groups.push(SearchResult {
                project: message.project.clone(),
                project_slug: message.project_slug.clone(),
                session_id: message.session_id.clone(),
                session_title: message.session_title.clone(),
                matches: Vec::new(),
            });
            groups.len() - 1
        });

        groups[group].matches.push(MatchResult {
            message_id: message.message_id.clone(),
            role: message.role.clone(),
            excerpt: build_excerpt(&message.content, &parsed.terms, &parsed.phrases),
            timestamp: message.timestamp,
        });
    }

    for group in &mut groups {
        group.matches.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
    }
    // Descending by last activity; a (theoretical) empty group has no
    // activity and sorts to the end rather than faulting.
    groups.sort_by(|a, b| b.last_activity().cmp(&a.last_activity()));

    groups
}
