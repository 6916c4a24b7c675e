//! Local extractive summarizer.

use crate::nlp::{frequency_table, split_sentences, tokenize_words};
use crate::rank::rank;

pub const NOTHING_TO_SUMMARIZE: &str = "No notes to summarize.";
pub const SUMMARY_NOT_AVAILABLE: &str = "Summary not available.";

/// Default number of sentences kept in a summary.
pub const DEFAULT_MAX_SENTENCES: usize = 2;

/// Extractive frequency-scoring summary of `text`.
///
/// Empty or whitespace-only text yields [`NOTHING_TO_SUMMARIZE`]; text whose
/// words are all stopwords carries no signal and yields
/// [`SUMMARY_NOT_AVAILABLE`]. Otherwise the top-ranked sentences are joined
/// with single spaces, in ranked order.
pub fn summarize_local(text: &str, max_sentences: usize) -> String {
    let text = text.trim();
    if text.is_empty() {
        return NOTHING_TO_SUMMARIZE.to_string();
    }

    let sentences = split_sentences(text);
    let words = tokenize_words(text);
    let freq = frequency_table(&words);
    if freq.is_empty() {
        return SUMMARY_NOT_AVAILABLE.to_string();
    }

    let top = rank(&sentences, &freq, max_sentences);
    top.join(" ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_yields_fixed_message() {
        assert_eq!(summarize_local("", DEFAULT_MAX_SENTENCES), NOTHING_TO_SUMMARIZE);
        assert_eq!(summarize_local("  \n ", DEFAULT_MAX_SENTENCES), NOTHING_TO_SUMMARIZE);
    }

    #[test]
    fn stopword_only_text_has_no_signal() {
        assert_eq!(
            summarize_local("the and of. to a by!", DEFAULT_MAX_SENTENCES),
            SUMMARY_NOT_AVAILABLE
        );
    }

    #[test]
    fn picks_sentences_with_frequent_words() {
        let text = "Rust makes systems programming safe. Rust compiles fast enough. \
                    Lunch today involved soup.";
        let summary = summarize_local(text, 2);

        assert!(summary.contains("Rust"));
        assert!(!summary.is_empty());
        // Two sentences joined with a single space.
        assert_eq!(summary.matches(". ").count(), 1);
    }

    #[test]
    fn summary_of_single_sentence_is_that_sentence() {
        let text = "Ship the release notes tomorrow.";
        assert_eq!(summarize_local(text, DEFAULT_MAX_SENTENCES), text);
    }

    #[test]
    fn nonempty_text_with_signal_never_yields_empty_summary() {
        for text in ["hello", "one two three.", "word. word! word?"] {
            let summary = summarize_local(text, DEFAULT_MAX_SENTENCES);
            assert!(!summary.is_empty());
            assert_ne!(summary, SUMMARY_NOT_AVAILABLE);
        }
    }
}
