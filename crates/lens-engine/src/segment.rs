//! Whitespace normalization and sentence segmentation

use lazy_static::lazy_static;
use regex::Regex;

/// Number of leading sentences kept in a summary
pub const SUMMARY_SENTENCES: usize = 3;

lazy_static! {
    /// Any run of whitespace, including line breaks
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();

    /// Terminal punctuation followed by the whitespace run that ends a sentence
    static ref SENTENCE_BREAK: Regex = Regex::new(r"[.!?]\s+").unwrap();
}

/// Collapse every whitespace run to a single space and trim the ends
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}

/// Split text after `.`, `!` or `?` when whitespace follows.
///
/// The punctuation stays with the sentence it ends and the whitespace run is
/// dropped. With `drop_blank` set, segments that are empty after trimming are
/// discarded; otherwise segments are returned exactly as produced, so the
/// empty string yields a single empty segment.
pub fn split_sentences(text: &str, drop_blank: bool) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for m in SENTENCE_BREAK.find_iter(text) {
        // Punctuation is ASCII, so it occupies exactly one byte
        sentences.push(&text[start..m.start() + 1]);
        start = m.end();
    }
    sentences.push(&text[start..]);

    if drop_blank {
        sentences.retain(|s| !s.trim().is_empty());
    }
    sentences
}

/// Join the first [`SUMMARY_SENTENCES`] sentences with single spaces
pub fn summarize(sentences: &[&str]) -> String {
    sentences
        .iter()
        .take(SUMMARY_SENTENCES)
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}
