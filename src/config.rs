//! Gateway configuration from environment variables.
//!
//! - `OPENAI_API_KEY` - bearer token for the upstream model API (required)
//! - `GRADER_UPSTREAM_URL` - base URL of the upstream API
//!   (default: `https://api.openai.com/v1`)
//! - `GRADER_MODEL` - model identifier (default: `gpt-5-nano`)

use anyhow::{Context, Result};

/// Default base URL for the upstream Responses API.
const DEFAULT_UPSTREAM_URL: &str = "https://api.openai.com/v1";

/// Default model identifier for grading calls.
const DEFAULT_MODEL: &str = "gpt-5-nano";

/// Upstream connection settings for the grading gateway.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// API key sent as a bearer token.
    pub api_key: String,
    /// Base URL; the gateway posts to `{base_url}/responses`.
    pub base_url: String,
    /// Fixed model identifier supplied with every grading call.
    pub model: String,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .context("OPENAI_API_KEY is not set; the gateway cannot call the model API")?;
        let base_url = std::env::var("GRADER_UPSTREAM_URL")
            .unwrap_or_else(|_| DEFAULT_UPSTREAM_URL.to_string());
        let model = std::env::var("GRADER_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Ok(Self {
            api_key,
            base_url,
            model,
        })
    }

    /// Create with explicit settings (for tests and embedding).
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// URL of the upstream responses endpoint.
    pub fn responses_url(&self) -> String {
        format!("{}/responses", self.base_url.trim_end_matches('/'))
    }
}
