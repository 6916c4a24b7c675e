use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub provider: ProviderConfig
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Config {
    /// Reads configuration from the environment; malformed values fall back
    /// to defaults rather than aborting startup.
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Ok(addr) = std::env::var("NOTES_BIND_ADDRESS") {
            config.bind_address = addr;
        }
        if let Ok(port) = std::env::var("NOTES_PORT") {
            if let Ok(p) = port.parse() {
                config.port = p;
            }
        }
        if let Ok(key) = std::env::var("OPENAI_API_KEY") {
            if !key.is_empty() {
                config.provider.api_key = Some(key);
            }
        }
        if let Ok(model) = std::env::var("NOTES_OPENAI_MODEL") {
            config.provider.model = model;
        }
        if let Ok(timeout) = std::env::var("NOTES_PROVIDER_TIMEOUT_MS") {
            if let Ok(t) = timeout.parse() {
                config.provider.timeout_ms = t;
            }
        }

        Ok(config)
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(format!("{}:{}", self.bind_address, self.port).parse()?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            port: default_port(),
            provider: ProviderConfig::default()
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProviderConfig {
    /// Unset means the external summarizer is not constructed; summary
    /// requests with `use_openai=true` degrade to the local path.
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            timeout_ms: default_timeout_ms()
        }
    }
}
