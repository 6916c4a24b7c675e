use async_trait::async_trait;
use errors::ProviderError;

/// Contract for an external summarization provider.
///
/// Implementations talk to a remote language model and may fail for any of
/// the reasons in [`ProviderError`]; callers are expected to recover with a
/// local summary rather than surface the failure.
#[async_trait]
pub trait SummaryProvider: Send + Sync {
    /// Produces a short natural-language summary of the given text.
    async fn summarize(&self, text: &str) -> Result<String, ProviderError>;
}
