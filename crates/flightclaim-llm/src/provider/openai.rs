//! OpenAI-compatible chat-completions provider (Groq by default)

use crate::client::{LLMClient, LLMRequest};
use crate::error::{LLMError, Result};
use crate::stream::{decode_sse, TokenStream};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::debug;

/// Groq's OpenAI-compatible endpoint
pub const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Streaming client for any `/chat/completions` endpoint speaking the OpenAI wire format
pub struct OpenAIProvider {
    api_key: String,
    base_url: String,
    client: Client,
}

impl OpenAIProvider {
    /// Create a provider against Groq
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, GROQ_BASE_URL.to_string())
    }

    /// Create with custom base URL
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        // Only the connect phase is bounded; a long answer may stream for minutes
        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    fn request_body(request: &LLMRequest) -> Value {
        let mut body = json!({
            "model": request.model,
            "messages": [{ "role": "user", "content": request.prompt }],
            "stream": true,
        });
        if let Some(max_tokens) = request.max_tokens {
            body["max_tokens"] = json!(max_tokens);
        }
        if let Some(temperature) = request.temperature {
            body["temperature"] = json!(temperature);
        }
        body
    }
}

#[async_trait]
impl LLMClient for OpenAIProvider {
    async fn stream(&self, request: LLMRequest) -> Result<TokenStream> {
        let body = Self::request_body(&request);
        debug!("Starting completion stream with model {}", request.model);

        let resp = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Accept", "text/event-stream")
            .json(&body)
            .send()
            .await
            .map_err(|e| LLMError::ApiCallFailed(format!("Completion request failed: {}", e)))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(LLMError::ApiStatus {
                status: status.as_u16(),
                body,
            });
        }

        Ok(decode_sse(resp.bytes_stream()))
    }

    fn name(&self) -> &str {
        "openai-compatible"
    }
}
