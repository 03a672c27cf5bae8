//! Length estimation heuristics.
//!
//! Token counts are approximated as `word_count * 1.5` throughout. This is a
//! fixed-ratio heuristic, not a tokenizer call: the chunk-size guarantees of
//! the planner are defined against this estimate, so it must stay stable even
//! if the served model's real tokenizer disagrees.

/// Ratio of model tokens to whitespace-delimited words.
pub const TOKENS_PER_WORD: f64 = 1.5;

/// Number of whitespace-delimited words in `text`.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Estimated token length of `text` (`round(word_count * 1.5)`).
pub fn estimate_tokens(text: &str) -> usize {
    (word_count(text) as f64 * TOKENS_PER_WORD).round() as usize
}

/// Compute a bounded target output length for summarizing `text`.
///
/// `ratio` scales the estimated input length down to a target output length;
/// when the scaled estimate rounds to zero the ratio is ignored rather than
/// producing a zero target. The result never exceeds `max_cap` and is zero
/// only for zero-word input.
pub fn estimate_max_length(text: &str, max_cap: usize, ratio: f64) -> usize {
    let words = word_count(text) as f64;
    let scaled = (words * TOKENS_PER_WORD * ratio).round() as usize;
    let target = if scaled == 0 {
        (words * TOKENS_PER_WORD).round() as usize
    } else {
        scaled
    };
    target.min(max_cap)
}
