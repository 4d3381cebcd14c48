//! Claim assistant: the three caller-facing operations
//!
//! Each call runs the pipeline strictly in sequence: fetch, normalize, pick
//! supporting text, render the prompt, reason. Nothing is cached between
//! calls.

use crate::config::AssistantConfig;
use crate::error::Result;
use crate::flight_status::FlightStatusLookup;
use crate::web_search::WebSearch;
use flightclaim_core::{
    aggregate, build_cancellation_prompt, build_eligibility_prompt, decode_flight_records,
    normalize_first, reason_search_query, should_infer_reason, FlightDetail, FlightQuery,
    PolicyStore, StatsSummary, MAX_REASON_SNIPPETS,
};
use flightclaim_llm::{LLMClient, LLMRequest, TokenStream};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Returned by cancellation-reason lookups when the status shows no disruption
pub const NO_DISRUPTION_REASON: &str = "No cancellation or delay was reported for this flight.";

/// Batch eligibility result with the inputs that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityAnswer {
    pub flight: FlightDetail,
    /// Policy text given to the reasoning engine
    pub policy: String,
    /// The verdict, reasoning trace removed
    pub answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<String>,
}

/// Generation settings applied to every reasoning request
#[derive(Debug, Clone)]
pub struct ReasoningOptions {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub max_snippets: usize,
}

impl From<&AssistantConfig> for ReasoningOptions {
    fn from(config: &AssistantConfig) -> Self {
        Self {
            model: config.llm.model.clone(),
            temperature: config.llm.temperature,
            max_tokens: config.llm.max_tokens,
            max_snippets: config.web_search.max_results.min(MAX_REASON_SNIPPETS),
        }
    }
}

impl Default for ReasoningOptions {
    fn default() -> Self {
        Self::from(&AssistantConfig::default())
    }
}

/// Facade over the flight-status provider, web search, policy corpus and reasoning engine
pub struct ClaimAssistant {
    flights: Arc<dyn FlightStatusLookup>,
    search: Arc<dyn WebSearch>,
    llm: Arc<dyn LLMClient>,
    policies: Arc<PolicyStore>,
    options: ReasoningOptions,
}

impl ClaimAssistant {
    pub(crate) fn new(
        flights: Arc<dyn FlightStatusLookup>,
        search: Arc<dyn WebSearch>,
        llm: Arc<dyn LLMClient>,
        policies: Arc<PolicyStore>,
        options: ReasoningOptions,
    ) -> Self {
        Self {
            flights,
            search,
            llm,
            policies,
            options,
        }
    }

    /// The shared, read-only policy corpus
    pub fn policies(&self) -> &PolicyStore {
        &self.policies
    }

    pub fn options(&self) -> &ReasoningOptions {
        &self.options
    }

    fn reasoning_request(&self, prompt: String) -> LLMRequest {
        LLMRequest::new(prompt, self.options.model.clone())
            .with_temperature(self.options.temperature)
            .with_max_tokens(self.options.max_tokens)
    }

    /// Fetch and normalize the first flight for the query.
    ///
    /// With `infer_reason` set and a status mentioning a cancellation or
    /// delay, the reason is inferred from web snippets before returning.
    pub async fn normalize_flight(&self, query: &FlightQuery, infer_reason: bool) -> Result<FlightDetail> {
        let response = self
            .flights
            .flights_on(query.flight_number(), query.date())
            .await?;
        let records = decode_flight_records(&response)?;
        debug!("Flight-status provider returned {} records for {}", records.len(), query);

        let detail = normalize_first(&records)?;
        if !infer_reason || !should_infer_reason(&detail.status) {
            return Ok(detail);
        }

        let reason = self.infer_reason(&detail, &query.date_str()).await?;
        Ok(detail.with_cancellation_reason(reason))
    }

    async fn infer_reason(&self, detail: &FlightDetail, date: &str) -> Result<String> {
        let query = reason_search_query(detail, date);
        let snippets = self.search_snippets(&query).await;
        info!("Inferring disruption reason from {} snippets", snippets.len());

        let prompt = build_cancellation_prompt(detail, &snippets);
        let response = self.llm.call(self.reasoning_request(prompt)).await?;
        Ok(response.content)
    }

    /// Search failures are not fatal: inference proceeds without snippets
    async fn search_snippets(&self, query: &str) -> Vec<String> {
        match self.search.search(query, self.options.max_snippets).await {
            Ok(results) => results
                .into_iter()
                .take(self.options.max_snippets)
                .map(|r| r.description)
                .collect(),
            Err(e) => {
                warn!("Web search failed, continuing without snippets: {}", e);
                Vec::new()
            }
        }
    }

    /// Normalized flight detail without reason inference
    pub async fn compute_flight_details(&self, flight_number: &str, date: &str) -> Result<FlightDetail> {
        let query = FlightQuery::parse(flight_number, date)?;
        info!("Looking up flight details for {}", query);
        self.normalize_flight(&query, false).await
    }

    async fn eligibility_context(&self, query: &FlightQuery) -> Result<(FlightDetail, String, String)> {
        let detail = self.normalize_flight(query, false).await?;
        let policy = self.policies.policy_text_for(&detail.airline);
        let prompt = build_eligibility_prompt(&detail, &policy);
        Ok((detail, policy, prompt))
    }

    /// Start an eligibility verdict and relay it fragment by fragment
    pub async fn compute_eligibility_stream(&self, flight_number: &str, date: &str) -> Result<TokenStream> {
        let query = FlightQuery::parse(flight_number, date)?;
        info!("Streaming eligibility for {}", query);

        let (_, _, prompt) = self.eligibility_context(&query).await?;
        let stream = self.llm.stream(self.reasoning_request(prompt)).await?;
        Ok(stream)
    }

    /// Full eligibility verdict with the flight and policy it was based on
    pub async fn compute_eligibility(&self, flight_number: &str, date: &str) -> Result<EligibilityAnswer> {
        let query = FlightQuery::parse(flight_number, date)?;
        info!("Computing eligibility for {}", query);

        let (flight, policy, prompt) = self.eligibility_context(&query).await?;
        let response = self.llm.call(self.reasoning_request(prompt)).await?;

        Ok(EligibilityAnswer {
            flight,
            policy,
            answer: response.content,
            reasoning: response.thinking,
        })
    }

    /// Likely reason for a cancellation or delay, or [`NO_DISRUPTION_REASON`]
    pub async fn compute_cancellation_reason(&self, flight_number: &str, date: &str) -> Result<String> {
        let query = FlightQuery::parse(flight_number, date)?;
        info!("Computing cancellation reason for {}", query);

        let detail = self.normalize_flight(&query, true).await?;
        Ok(detail
            .cancellation_reason
            .unwrap_or_else(|| NO_DISRUPTION_REASON.to_string()))
    }

    /// Delay statistics over the seven days ending at `date`
    pub async fn compute_historical_stats(&self, flight_number: &str, date: &str) -> Result<StatsSummary> {
        let query = FlightQuery::parse(flight_number, date)?;
        let (from, to) = query.history_window()?;
        info!("Computing historical stats for {} ({} to {})", query.flight_number(), from, to);

        let response = self
            .flights
            .flights_between(query.flight_number(), from, to)
            .await?;
        let records = decode_flight_records(&response)?;
        Ok(aggregate(&records))
    }
}
