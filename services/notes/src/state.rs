use std::sync::Arc;

use store::NoteStore;
use summarizer::{OpenAiProvider, SummaryService};

use crate::Config;

/// Shared per-process state, injected into every handler.
pub struct AppState {
    pub store: Arc<NoteStore>,
    pub summaries: Arc<SummaryService>
}

impl AppState {
    /// Wires the store and summary service from config. The external
    /// provider exists only when an API key is configured; without one,
    /// external summary requests take the degraded local path.
    pub fn from_config(config: &Config) -> Self {
        let provider = config.provider.api_key.as_ref().map(|key| {
            Arc::new(OpenAiProvider::new(
                Some(key.clone()),
                config.provider.model.clone(),
                config.provider.timeout_ms
            )) as Arc<dyn notes_core::SummaryProvider>
        });

        Self {
            store: Arc::new(NoteStore::new()),
            summaries: Arc::new(SummaryService::new(provider))
        }
    }

    /// State without an external provider, for tests.
    pub fn local_only() -> Self {
        Self {
            store: Arc::new(NoteStore::new()),
            summaries: Arc::new(SummaryService::local_only())
        }
    }
}
