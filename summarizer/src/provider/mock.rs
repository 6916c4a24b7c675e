//! Canned summary provider for tests.

use async_trait::async_trait;
use errors::ProviderError;
use notes_core::SummaryProvider;
use tokio::sync::RwLock;

/// Test double: returns a fixed response, or fails on demand.
pub struct MockProvider {
    response: RwLock<Option<String>>,
    fail: RwLock<bool>
}

impl MockProvider {
    pub fn new() -> Self {
        Self {
            response: RwLock::new(None),
            fail: RwLock::new(false)
        }
    }

    pub fn with_response(response: &str) -> Self {
        Self {
            response: RwLock::new(Some(response.to_string())),
            fail: RwLock::new(false)
        }
    }

    pub fn failing() -> Self {
        Self {
            response: RwLock::new(None),
            fail: RwLock::new(true)
        }
    }

    pub async fn set_response(&self, response: &str) {
        *self.response.write().await = Some(response.to_string());
    }

    pub async fn set_failing(&self, fail: bool) {
        *self.fail.write().await = fail;
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SummaryProvider for MockProvider {
    async fn summarize(&self, text: &str) -> Result<String, ProviderError> {
        if *self.fail.read().await {
            return Err(ProviderError::Http {
                reason: "mock provider failure".to_string()
            });
        }

        let response = self.response.read().await;
        match response.as_ref() {
            Some(canned) => Ok(canned.clone()),
            None => Ok(format!("Mock summary of {} bytes", text.len()))
        }
    }
}
