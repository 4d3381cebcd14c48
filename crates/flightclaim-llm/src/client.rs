//! Reasoning-engine client interface and types

use crate::error::Result;
use crate::stream::{collect_text, TokenStream};
use crate::thinking::split_thinking;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Request to the reasoning engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LLMRequest {
    /// The prompt, sent as the single user message
    pub prompt: String,

    /// Model identifier (e.g., "deepseek-r1-distill-llama-70b")
    pub model: String,

    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,

    /// Temperature for sampling
    pub temperature: Option<f32>,
}

impl LLMRequest {
    /// Create a new request
    pub fn new(prompt: String, model: String) -> Self {
        Self {
            prompt,
            model,
            max_tokens: None,
            temperature: None,
        }
    }

    /// Set max tokens
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Set temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// Fully drained response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LLMResponse {
    /// The answer with any `<think>` block removed
    pub content: String,

    /// Model that generated the response
    pub model: String,

    /// Reasoning trace emitted inside `<think>` tags
    pub thinking: Option<String>,
}

impl LLMResponse {
    /// Create a new response
    pub fn new(content: String, model: String) -> Self {
        Self {
            content,
            model,
            thinking: None,
        }
    }

    /// Set thinking content
    pub fn with_thinking(mut self, thinking: String) -> Self {
        self.thinking = Some(thinking);
        self
    }
}

/// Async reasoning-engine client.
///
/// `stream` is the primitive: it resolves once the engine has accepted the
/// request and yields text fragments in arrival order. `call` drains a
/// stream for callers that want the whole answer at once.
#[async_trait]
pub trait LLMClient: Send + Sync {
    /// Start generation and return the fragment stream.
    ///
    /// Failures before the first fragment (connection refused, non-2xx) are
    /// returned here; failures after that arrive as an item of the stream.
    async fn stream(&self, request: LLMRequest) -> Result<TokenStream>;

    /// Generate and collect the full answer, separating any `<think>` block
    async fn call(&self, request: LLMRequest) -> Result<LLMResponse> {
        let model = request.model.clone();
        let text = collect_text(self.stream(request).await?).await?;
        let (thinking, answer) = split_thinking(&text);

        let mut response = LLMResponse::new(answer, model);
        if let Some(thinking) = thinking {
            response = response.with_thinking(thinking);
        }
        Ok(response)
    }

    /// Get the name of this client
    fn name(&self) -> &str;
}
