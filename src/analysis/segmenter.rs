//! Offline sentence segmentation.
//!
//! Splits where a sentence-terminal mark (`.`, `!`, `?`) is immediately
//! followed by whitespace. Deliberately not grammar-aware: abbreviations and
//! quoted punctuation are not special-cased.

use once_cell::sync::Lazy;
use regex::Regex;

static SENTENCE_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]\s+").unwrap());
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Split raw text into normalized sentences, in appearance order.
///
/// Each sentence keeps its terminal mark, has internal whitespace collapsed
/// to single spaces, and is trimmed; empty candidates are dropped. Text with
/// no terminal punctuation yields the whole normalized text as one sentence
/// if non-empty, otherwise nothing.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;
    for boundary in SENTENCE_BOUNDARY.find_iter(text) {
        // The terminal mark is ASCII, so +1 stays on a char boundary.
        let end = boundary.start() + 1;
        push_normalized(&mut sentences, &text[start..end]);
        start = boundary.end();
    }
    push_normalized(&mut sentences, &text[start..]);
    sentences
}

fn push_normalized(sentences: &mut Vec<String>, candidate: &str) {
    let normalized = WHITESPACE_RUN.replace_all(candidate.trim(), " ");
    if !normalized.is_empty() {
        sentences.push(normalized.into_owned());
    }
}
