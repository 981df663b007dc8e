use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;
use thiserror::Error;

use super::parsing::{extract_reply, truncate_for_log};
use super::prompts::CompletionRequest;
use super::{DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, FALLBACK_REPLY, REQUEST_TIMEOUT_SECS};

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("GEMINI_API_KEY is not configured")]
    MissingApiKey,

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to completion service failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("completion service returned invalid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for CompletionError {
    // The request URL carries the API key
    fn from(err: reqwest::Error) -> Self {
        CompletionError::Transport(err.without_url())
    }
}

/// Text-completion backend used to answer a grounded question
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Produce a reply for the request.
    ///
    /// A response without usable text resolves to [`FALLBACK_REPLY`]; only
    /// transport and decode failures are errors.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError>;

    /// Backend name for logging
    fn name(&self) -> &str;
}

// ===== GEMINI =====

/// Google Gemini `generateContent` client
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self, CompletionError> {
        Self::with_timeout(api_key, Duration::from_secs(REQUEST_TIMEOUT_SECS))
    }

    /// Same as [`GeminiClient::new`] with a custom request timeout
    pub fn with_timeout(api_key: impl Into<String>, timeout: Duration) -> Result<Self, CompletionError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(CompletionError::MissingApiKey);
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(CompletionError::Client)?;

        Ok(Self {
            client,
            api_key,
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
        })
    }

    /// Point the client at another API root (staging, proxies, local stand-ins)
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl CompletionClient for GeminiClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        let request_body = json!({
            "system_instruction": {
                "role": "system",
                "parts": [{"text": request.system_instruction}]
            },
            "contents": [
                {"role": "user", "parts": [{"text": request.user_query}]}
            ],
            "generationConfig": request.generation,
        });

        tracing::debug!(model = %self.model, "🔄 Calling Gemini");

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!("⚠️  Gemini returned {}: {}", status, truncate_for_log(&body, 120));
        }

        // Only a body that is not JSON at all is an error; error payloads and
        // odd shapes just carry no reply
        let gemini_response: serde_json::Value = serde_json::from_str(&body)?;

        match extract_reply(&gemini_response) {
            Some(text) => Ok(text.to_string()),
            None => {
                tracing::warn!("⚠️  Gemini response had no usable text, sending fallback");
                Ok(FALLBACK_REPLY.to_string())
            }
        }
    }

    fn name(&self) -> &str {
        "gemini"
    }
}
