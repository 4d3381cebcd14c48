//! Web-search client used for cancellation-reason inference

use crate::config::WebSearchConfig;
use crate::error::SdkError;
use async_trait::async_trait;
use flightclaim_core::{ClaimError, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Service label for web-search failures
pub const WEB_SEARCH_SERVICE: &str = "web-search";

/// One ranked search hit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    pub description: String,
}

impl SearchResult {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            title: None,
            url: None,
            description: description.into(),
        }
    }
}

/// Ranked web search
#[async_trait]
pub trait WebSearch: Send + Sync {
    /// At most `max_results` hits in rank order
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<SearchResult>>;
}

#[derive(Debug, Default, Deserialize)]
struct BraveResponse {
    #[serde(default)]
    web: Option<BraveWeb>,
}

#[derive(Debug, Default, Deserialize)]
struct BraveWeb {
    #[serde(default)]
    results: Vec<BraveHit>,
}

#[derive(Debug, Deserialize)]
struct BraveHit {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

/// Brave Search API client
pub struct BraveSearchClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl BraveSearchClient {
    pub fn new(config: &WebSearchConfig) -> std::result::Result<Self, SdkError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SdkError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl WebSearch for BraveSearchClient {
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<SearchResult>> {
        let url = format!(
            "{}/web/search?q={}&count={}",
            self.base_url,
            urlencoding::encode(query),
            max_results
        );
        debug!("Searching the web: {}", query);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .header("X-Subscription-Token", &self.api_key)
            .send()
            .await
            .map_err(|e| ClaimError::upstream(WEB_SEARCH_SERVICE, None, e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClaimError::upstream(WEB_SEARCH_SERVICE, Some(status.as_u16()), e.to_string()))?;

        if !status.is_success() {
            return Err(ClaimError::upstream(WEB_SEARCH_SERVICE, Some(status.as_u16()), body));
        }

        let parsed: BraveResponse = serde_json::from_str(&body)?;
        let results = parsed
            .web
            .unwrap_or_default()
            .results
            .into_iter()
            .filter_map(|hit| {
                hit.description.map(|description| SearchResult {
                    title: hit.title,
                    url: hit.url,
                    description,
                })
            })
            .take(max_results)
            .collect();

        Ok(results)
    }
}
