//! Sentence-aligned chunk planning for long documents.

use crate::estimate::estimate_tokens;

/// Literal delimiter used to split (and rejoin) sentence candidates.
///
/// This is a heuristic, not a linguistic boundary detector: abbreviations,
/// decimal numbers and sentence-final periods without a trailing space are
/// not handled specially.
pub const SENTENCE_DELIMITER: &str = ". ";

/// Partition `text` into ordered, sentence-aligned chunks whose estimated
/// token length stays within `max_tokens` (best effort).
///
/// Sentences are accumulated greedily; a chunk is closed when adding the next
/// sentence would push the running estimate past the budget. A single
/// sentence whose own estimate exceeds `max_tokens` still gets a chunk of its
/// own — the planner never splits below sentence granularity.
///
/// Every input sentence appears in exactly one chunk, in original order, and
/// no empty chunks are produced.
pub fn split_into_chunks(text: &str, max_tokens: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut current_len = 0usize;

    for sentence in text.split(SENTENCE_DELIMITER) {
        let token_len = estimate_tokens(sentence);
        if !current.is_empty() && current_len + token_len > max_tokens {
            chunks.push(current.join(SENTENCE_DELIMITER));
            current = vec![sentence];
            current_len = token_len;
        } else {
            current.push(sentence);
            current_len += token_len;
        }
    }

    if !current.is_empty() {
        chunks.push(current.join(SENTENCE_DELIMITER));
    }
    chunks
}
