//! Summary facade: local extractive path plus optional external provider.

use std::sync::Arc;

use notes_core::SummaryProvider;
use tracing::warn;

use crate::local::{DEFAULT_MAX_SENTENCES, summarize_local};

/// Suffix appended to a local summary when the external provider failed.
pub const FALLBACK_SUFFIX: &str = " (external summarizer failed)";

/// Stateless per call; holds the optional external provider for the
/// process lifetime.
pub struct SummaryService {
    provider: Option<Arc<dyn SummaryProvider>>
}

impl SummaryService {
    pub fn new(provider: Option<Arc<dyn SummaryProvider>>) -> Self {
        Self { provider }
    }

    pub fn local_only() -> Self {
        Self { provider: None }
    }

    /// Summarizes `text`, preferring the external provider when requested.
    ///
    /// Provider failures degrade to the local summary with
    /// [`FALLBACK_SUFFIX`] appended; they are never surfaced to the caller.
    pub async fn summarize(&self, text: &str, use_external: bool) -> String {
        if use_external {
            if let Some(provider) = &self.provider {
                match provider.summarize(text).await {
                    Ok(summary) => return summary.trim().to_string(),
                    Err(err) => {
                        warn!(error = %err, "external summarizer failed, falling back");
                    }
                }
            } else {
                warn!("external summary requested but no provider configured");
            }
            return format!(
                "{}{}",
                summarize_local(text, DEFAULT_MAX_SENTENCES),
                FALLBACK_SUFFIX
            );
        }

        summarize_local(text, DEFAULT_MAX_SENTENCES)
    }
}
