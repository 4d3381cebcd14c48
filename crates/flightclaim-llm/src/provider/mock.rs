//! Mock provider for testing

use crate::client::{LLMClient, LLMRequest};
use crate::error::{LLMError, Result};
use crate::stream::TokenStream;
use async_trait::async_trait;
use futures::stream;
use std::sync::Mutex;

/// Mock provider that replays fixed fragments and records the prompts it saw
pub struct MockProvider {
    name: String,
    fragments: Vec<String>,
    interrupt_after: Option<usize>,
    reject_with: Option<u16>,
    prompts: Mutex<Vec<String>>,
}

impl MockProvider {
    /// Create a new mock provider
    pub fn new() -> Self {
        Self::with_fragments(vec!["Mock ", "reasoning ", "response"])
    }

    /// Create with a single-fragment response
    pub fn with_response(response: String) -> Self {
        Self::with_fragments(vec![response])
    }

    /// Create with a custom fragment sequence
    pub fn with_fragments<I, S>(fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: "mock".to_string(),
            fragments: fragments.into_iter().map(Into::into).collect(),
            interrupt_after: None,
            reject_with: None,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Break the stream after `count` fragments
    pub fn interrupt_after(mut self, count: usize) -> Self {
        self.interrupt_after = Some(count);
        self
    }

    /// Refuse every request with this status before streaming starts
    pub fn rejecting(mut self, status: u16) -> Self {
        self.reject_with = Some(status);
        self
    }

    /// Prompts received so far, oldest first
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LLMClient for MockProvider {
    async fn stream(&self, request: LLMRequest) -> Result<TokenStream> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(request.prompt);
        }

        if let Some(status) = self.reject_with {
            return Err(LLMError::ApiStatus {
                status,
                body: "mock rejection".to_string(),
            });
        }

        let mut items: Vec<Result<String>> = match self.interrupt_after {
            Some(count) => self.fragments.iter().take(count).cloned().map(Ok).collect(),
            None => self.fragments.iter().cloned().map(Ok).collect(),
        };
        if self.interrupt_after.is_some() {
            items.push(Err(LLMError::StreamInterrupted("mock interruption".to_string())));
        }

        Ok(Box::pin(stream::iter(items)))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    #[tokio::test]
    async fn test_mock_provider() {
        let provider = MockProvider::new();
        let request = LLMRequest::new("Test".to_string(), "mock-model".to_string());

        let response = provider.call(request).await.unwrap();
        assert_eq!(response.content, "Mock reasoning response");
        assert_eq!(response.model, "mock-model");
        assert_eq!(provider.prompts(), vec!["Test".to_string()]);
    }

    #[tokio::test]
    async fn test_mock_provider_splits_thinking() {
        let provider = MockProvider::with_fragments(["<think>check ", "policy</think>", "Eligible."]);
        let request = LLMRequest::new("Test".to_string(), "mock-model".to_string());

        let response = provider.call(request).await.unwrap();
        assert_eq!(response.content, "Eligible.");
        assert_eq!(response.thinking.as_deref(), Some("check policy"));
    }

    #[tokio::test]
    async fn test_mock_provider_interruption() {
        let provider = MockProvider::with_fragments(["a", "b", "c"]).interrupt_after(1);
        let request = LLMRequest::new("Test".to_string(), "m".to_string());

        let items: Vec<Result<String>> = provider.stream(request).await.unwrap().collect().await;
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].as_ref().unwrap(), "a");
        assert!(items[1].is_err());
    }

    #[tokio::test]
    async fn test_mock_provider_rejection() {
        let provider = MockProvider::new().rejecting(429);
        let request = LLMRequest::new("Test".to_string(), "m".to_string());

        match provider.stream(request).await {
            Err(LLMError::ApiStatus { status, .. }) => assert_eq!(status, 429),
            Err(other) => panic!("Expected ApiStatus, got {:?}", other),
            Ok(_) => panic!("Expected rejection"),
        }
    }
}
