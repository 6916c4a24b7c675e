//! Sentence and word tokenization plus the stopword-filtered frequency table.

use std::collections::HashMap;

/// Common English function words excluded from frequency scoring.
pub const STOPWORDS: &[&str] = &[
    "the", "is", "in", "and", "to", "a", "of", "for", "on", "it", "this", "that", "with", "as",
    "are", "was", "be", "by", "an", "or",
];

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Splits text into sentences on `.`, `!` or `?` followed by whitespace.
///
/// The terminator stays with its sentence; pieces are trimmed and empty
/// pieces dropped, so empty or whitespace-only input yields no sentences.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    let mut sentences = Vec::new();
    let mut start = 0;
    let mut prev_was_terminator = false;

    for (idx, c) in text.char_indices() {
        if prev_was_terminator && c.is_whitespace() {
            let piece = text[start..idx].trim();
            if !piece.is_empty() {
                sentences.push(piece);
            }
            start = idx;
        }
        prev_was_terminator = matches!(c, '.' | '!' | '?');
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail);
    }
    sentences
}

/// Lowercases and extracts maximal alphanumeric-or-underscore runs;
/// punctuation is discarded.
pub fn tokenize_words(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !is_word_char(c))
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// Counts word occurrences, skipping stopwords.
///
/// An empty table means the text carried no signal (no words, or stopwords
/// only); callers fall back to a fixed message in that case.
pub fn frequency_table(words: &[String]) -> HashMap<String, usize> {
    let mut freq = HashMap::new();
    for word in words {
        if STOPWORDS.contains(&word.as_str()) {
            continue;
        }
        *freq.entry(word.clone()).or_insert(0) += 1;
    }
    freq
}
