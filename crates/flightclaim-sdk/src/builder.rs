//! Builder pattern for ClaimAssistant

use crate::assistant::{ClaimAssistant, ReasoningOptions};
use crate::config::AssistantConfig;
use crate::error::Result;
use crate::flight_status::{AeroDataBoxClient, FlightStatusLookup};
use crate::policy_loader::load_policy_store;
use crate::web_search::{BraveSearchClient, WebSearch};
use flightclaim_core::PolicyStore;
use flightclaim_llm::{LLMClient, OpenAIProvider};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

/// Builder for ClaimAssistant
///
/// Collaborators that are not supplied are created from the configuration.
///
/// # Example
///
/// ```rust,ignore
/// use flightclaim_sdk::{AssistantConfig, ClaimAssistantBuilder};
///
/// let assistant = ClaimAssistantBuilder::new()
///     .with_config(AssistantConfig::default())
///     .with_policy_path("data/airline_policies.json")
///     .build()
///     .await?;
///
/// let answer = assistant.compute_eligibility("DL324", "2025-04-12").await?;
/// ```
pub struct ClaimAssistantBuilder {
    config: AssistantConfig,
    flights: Option<Arc<dyn FlightStatusLookup>>,
    search: Option<Arc<dyn WebSearch>>,
    llm: Option<Arc<dyn LLMClient>>,
    policies: Option<PolicyStore>,
}

impl ClaimAssistantBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: AssistantConfig::default(),
            flights: None,
            search: None,
            llm: None,
            policies: None,
        }
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: AssistantConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the policy corpus path
    pub fn with_policy_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.policy_path = path.into();
        self
    }

    /// Use an already loaded policy corpus instead of reading the file
    pub fn with_policy_store(mut self, store: PolicyStore) -> Self {
        self.policies = Some(store);
        self
    }

    /// Set the flight-status provider
    pub fn with_flight_status(mut self, flights: Arc<dyn FlightStatusLookup>) -> Self {
        self.flights = Some(flights);
        self
    }

    /// Set the web-search provider
    pub fn with_web_search(mut self, search: Arc<dyn WebSearch>) -> Self {
        self.search = Some(search);
        self
    }

    /// Set the reasoning engine
    pub fn with_llm(mut self, llm: Arc<dyn LLMClient>) -> Self {
        self.llm = Some(llm);
        self
    }

    /// Build the assistant
    pub async fn build(self) -> Result<ClaimAssistant> {
        let config = self.config;

        let flights: Arc<dyn FlightStatusLookup> = match self.flights {
            Some(flights) => flights,
            None => Arc::new(AeroDataBoxClient::new(&config.flight_status)?),
        };

        let search: Arc<dyn WebSearch> = match self.search {
            Some(search) => search,
            None => Arc::new(BraveSearchClient::new(&config.web_search)?),
        };

        let llm: Arc<dyn LLMClient> = match self.llm {
            Some(llm) => llm,
            None => {
                if config.llm.api_key.is_empty() {
                    warn!("No reasoning-engine API key configured");
                }
                Arc::new(OpenAIProvider::with_base_url(
                    config.llm.api_key.clone(),
                    config.llm.base_url.clone(),
                ))
            }
        };

        let policies = match self.policies {
            Some(store) => store,
            None => load_policy_store(&config.policy_path).await,
        };

        info!(
            "Claim assistant ready: {} policy records, model {}, reasoning via {}",
            policies.len(),
            config.llm.model,
            llm.name()
        );

        Ok(ClaimAssistant::new(
            flights,
            search,
            llm,
            Arc::new(policies),
            ReasoningOptions::from(&config),
        ))
    }
}

impl Default for ClaimAssistantBuilder {
    fn default() -> Self {
        Self::new()
    }
}
