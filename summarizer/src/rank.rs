//! Sentence scoring and top-N selection.

use std::collections::HashMap;

use crate::nlp::tokenize_words;

/// Average frequency-table weight of the sentence's words.
///
/// Words absent from the table contribute 0; a sentence with no words scores
/// 0.0 rather than dividing by zero.
pub fn score_sentence(sentence: &str, freq: &HashMap<String, usize>) -> f64 {
    let words = tokenize_words(sentence);
    if words.is_empty() {
        return 0.0;
    }
    let total: usize = words.iter().filter_map(|w| freq.get(w)).sum();
    total as f64 / words.len() as f64
}

/// Scores every sentence and returns the top `max_sentences` in ranked
/// order (highest first).
///
/// The sort is stable, so sentences with equal scores keep their document
/// order.
pub fn rank<'a>(
    sentences: &[&'a str],
    freq: &HashMap<String, usize>,
    max_sentences: usize
) -> Vec<&'a str> {
    let mut scored: Vec<(f64, &str)> = sentences
        .iter()
        .map(|s| (score_sentence(s, freq), *s))
        .collect();

    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

    scored
        .into_iter()
        .take(max_sentences)
        .map(|(_, s)| s)
        .collect()
}
