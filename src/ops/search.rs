use std::ops::Range;

use regex::Regex;

use crate::model::ItemStore;

/// A label that matched, with the byte ranges of each match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub position: usize,
    pub spans: Vec<Range<usize>>,
}

/// Compile a user pattern case-insensitively, falling back to a literal
/// match when it is not a valid regex.
pub fn compile_pattern(pattern: &str) -> Option<Regex> {
    if pattern.is_empty() {
        return None;
    }
    Regex::new(&format!("(?i){}", pattern))
        .or_else(|_| Regex::new(&format!("(?i){}", regex::escape(pattern))))
        .ok()
}

/// Collect all non-overlapping match byte-ranges for a regex in the given text.
fn find_matches(re: &Regex, text: &str) -> Vec<Range<usize>> {
    re.find_iter(text).map(|m| m.start()..m.end()).collect()
}

/// Every item whose label matches, in list order.
pub fn search_items(store: &ItemStore, re: &Regex) -> Vec<SearchHit> {
    store
        .iter()
        .enumerate()
        .filter_map(|(position, label)| {
            let spans = find_matches(re, label);
            (!spans.is_empty()).then_some(SearchHit { position, spans })
        })
        .collect()
}

/// The next matching position after `from` (or before it when `backward`),
/// wrapping around the list. Returns `None` when nothing matches.
pub fn next_match(store: &ItemStore, re: &Regex, from: usize, backward: bool) -> Option<usize> {
    let hits = search_items(store, re);
    if hits.is_empty() {
        return None;
    }
    let position = if backward {
        hits.iter()
            .rev()
            .find(|h| h.position < from)
            .or_else(|| hits.last())
    } else {
        hits.iter().find(|h| h.position > from).or_else(|| hits.first())
    };
    position.map(|h| h.position)
}
