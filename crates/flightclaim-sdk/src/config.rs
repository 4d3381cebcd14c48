//! Configuration types for the claim assistant

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Collaborator and corpus settings for [`crate::ClaimAssistant`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// Airline policy corpus (JSON array of policy records)
    pub policy_path: PathBuf,

    pub flight_status: FlightStatusConfig,

    pub web_search: WebSearchConfig,

    pub llm: LLMConfig,
}

impl AssistantConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set policy corpus path
    pub fn with_policy_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.policy_path = path.into();
        self
    }

    /// Set flight-status settings
    pub fn with_flight_status(mut self, flight_status: FlightStatusConfig) -> Self {
        self.flight_status = flight_status;
        self
    }

    /// Set web-search settings
    pub fn with_web_search(mut self, web_search: WebSearchConfig) -> Self {
        self.web_search = web_search;
        self
    }

    /// Set reasoning-engine settings
    pub fn with_llm(mut self, llm: LLMConfig) -> Self {
        self.llm = llm;
        self
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            policy_path: PathBuf::from("data/airline_policies.json"),
            flight_status: FlightStatusConfig::default(),
            web_search: WebSearchConfig::default(),
            llm: LLMConfig::default(),
        }
    }
}

/// Flight-status provider (AeroDataBox over RapidAPI)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightStatusConfig {
    pub base_url: String,
    pub api_key: String,
    pub api_host: String,
    pub timeout_secs: u64,
}

impl Default for FlightStatusConfig {
    fn default() -> Self {
        Self {
            base_url: "https://aerodatabox.p.rapidapi.com".to_string(),
            api_key: String::new(),
            api_host: "aerodatabox.p.rapidapi.com".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Web-search provider (Brave Search)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WebSearchConfig {
    pub base_url: String,
    pub api_key: String,
    /// Snippets requested per query
    pub max_results: usize,
    pub timeout_secs: u64,
}

impl Default for WebSearchConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.search.brave.com/res/v1".to_string(),
            api_key: String::new(),
            max_results: 5,
            timeout_secs: 10,
        }
    }
}

/// Reasoning engine (OpenAI-compatible chat completions)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LLMConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            base_url: flightclaim_llm::GROQ_BASE_URL.to_string(),
            api_key: String::new(),
            model: "deepseek-r1-distill-llama-70b".to_string(),
            temperature: 0.1,
            max_tokens: 1000,
        }
    }
}
