//! # Summarizer
//!
//! Extractive summarization over note text, plus the external-provider
//! plumbing.
//!
//! The local path is a frequency-scoring heuristic: build a stopword-filtered
//! word-frequency table, score each sentence by its normalized frequency sum,
//! and keep the top sentences. The external path delegates to a remote
//! language model behind the [`notes_core::SummaryProvider`] trait and falls
//! back to the local path on any failure.

pub mod local;
pub mod nlp;
pub mod provider;
pub mod rank;
pub mod service;

pub use local::summarize_local;
pub use provider::mock::MockProvider;
pub use provider::openai::OpenAiProvider;
pub use service::SummaryService;
