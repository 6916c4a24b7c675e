//! OpenAI chat-completions summary provider.

use std::time::Duration;

use async_trait::async_trait;
use errors::ProviderError;
use notes_core::SummaryProvider;
use reqwest::Client;
use serde::{Deserialize, Serialize};

const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
const MAX_TOKENS: u32 = 200;
const TEMPERATURE: f32 = 0.3;

pub struct OpenAiProvider {
    client: Client,
    api_base: String,
    api_key: Option<String>,
    model: String,
    timeout_ms: u64
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>
}

impl OpenAiProvider {
    pub fn new(api_key: Option<String>, model: String, timeout_ms: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_base: DEFAULT_API_BASE.to_string(),
            api_key,
            model,
            timeout_ms
        }
    }

    /// Points the provider at a different endpoint. Used by tests to target
    /// a mock server.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    fn prompt(text: &str) -> String {
        format!("Summarize the following notes in 2-3 sentences:\n\n{text}\n\nSummary:")
    }
}

#[async_trait]
impl SummaryProvider for OpenAiProvider {
    async fn summarize(&self, text: &str) -> Result<String, ProviderError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(ProviderError::MissingCredential {
                variable: "OPENAI_API_KEY".to_string()
            });
        };

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: Self::prompt(text)
            }],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.api_base))
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProviderError::Timeout {
                        timeout_ms: self.timeout_ms
                    }
                } else {
                    ProviderError::Http {
                        reason: e.to_string()
                    }
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::UnexpectedStatus {
                status: status.as_u16(),
                body
            });
        }

        let parsed: ChatResponse = response.json().await.map_err(|e| ProviderError::Http {
            reason: e.to_string()
        })?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(ProviderError::EmptyResponse)?;

        let content = content.trim().to_string();
        if content.is_empty() {
            return Err(ProviderError::EmptyResponse);
        }
        Ok(content)
    }
}
