//! Common test utilities for SDK integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDate;
use flightclaim_core::{ClaimError, PolicyRecord, PolicyStore, PolicyType, ProviderResponse};
use flightclaim_llm::MockProvider;
use flightclaim_sdk::{
    ClaimAssistant, ClaimAssistantBuilder, FlightStatusLookup, SearchResult, WebSearch,
    WEB_SEARCH_SERVICE,
};
use std::sync::{Arc, Mutex};

/// One AeroDataBox-shaped record
pub fn flight_json(airline: &str, status: &str, scheduled_utc: &str, actual_utc: &str) -> serde_json::Value {
    serde_json::json!({
        "number": "DL 324",
        "status": status,
        "airline": { "name": airline },
        "departure": {
            "airport": { "iata": "ATL" },
            "scheduledTime": { "utc": scheduled_utc, "local": "2025-04-12 06:00-04:00" },
            "runwayTime": { "utc": actual_utc, "local": "2025-04-12 06:20-04:00" }
        },
        "arrival": { "airport": { "iata": "BOS" } }
    })
}

pub fn ok_response(flights: Vec<serde_json::Value>) -> ProviderResponse {
    ProviderResponse::new(200, serde_json::Value::Array(flights).to_string())
}

/// Flight-status provider returning canned responses and recording requested paths
pub struct StaticFlights {
    on_date: ProviderResponse,
    window: ProviderResponse,
    pub calls: Mutex<Vec<String>>,
}

impl StaticFlights {
    pub fn new(on_date: ProviderResponse) -> Self {
        Self {
            on_date,
            window: ok_response(vec![]),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_window(mut self, window: ProviderResponse) -> Self {
        self.window = window;
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl FlightStatusLookup for StaticFlights {
    async fn flights_on(&self, flight_number: &str, date: NaiveDate) -> flightclaim_core::Result<ProviderResponse> {
        self.calls.lock().unwrap().push(format!("{}/{}", flight_number, date));
        Ok(self.on_date.clone())
    }

    async fn flights_between(
        &self,
        flight_number: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> flightclaim_core::Result<ProviderResponse> {
        self.calls.lock().unwrap().push(format!("{}/{}/{}", flight_number, from, to));
        Ok(self.window.clone())
    }
}

/// Web search returning fixed descriptions, or failing
pub struct StaticSearch {
    descriptions: Vec<String>,
    fail: bool,
    pub queries: Mutex<Vec<(String, usize)>>,
}

impl StaticSearch {
    pub fn new(descriptions: &[&str]) -> Self {
        Self {
            descriptions: descriptions.iter().map(|d| d.to_string()).collect(),
            fail: false,
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            descriptions: Vec::new(),
            fail: true,
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<(String, usize)> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl WebSearch for StaticSearch {
    async fn search(&self, query: &str, max_results: usize) -> flightclaim_core::Result<Vec<SearchResult>> {
        self.queries.lock().unwrap().push((query.to_string(), max_results));
        if self.fail {
            return Err(ClaimError::upstream(WEB_SEARCH_SERVICE, Some(503), "unavailable"));
        }
        Ok(self
            .descriptions
            .iter()
            .take(max_results)
            .map(|d| SearchResult::new(d.clone()))
            .collect())
    }
}

pub fn delta_policies() -> PolicyStore {
    PolicyStore::new(vec![
        PolicyRecord::new("Delta Air Lines", PolicyType::Cancellation)
            .with_commits(["Rebook on the same airline at no additional cost"])
            .with_does_not_commit(["Cash compensation"]),
        PolicyRecord::new("Delta Air Lines", PolicyType::Delay)
            .with_commits(["Meal or meal cash/voucher for a delay of 3 hours or more"]),
    ])
}

/// Handles kept by tests to inspect what the assistant did
pub struct TestRig {
    pub assistant: ClaimAssistant,
    pub flights: Arc<StaticFlights>,
    pub search: Arc<StaticSearch>,
    pub llm: Arc<MockProvider>,
}

pub async fn rig(flights: StaticFlights, search: StaticSearch, llm: MockProvider) -> TestRig {
    let flights = Arc::new(flights);
    let search = Arc::new(search);
    let llm = Arc::new(llm);

    let assistant = ClaimAssistantBuilder::new()
        .with_flight_status(flights.clone())
        .with_web_search(search.clone())
        .with_llm(llm.clone())
        .with_policy_store(delta_policies())
        .build()
        .await
        .unwrap();

    TestRig {
        assistant,
        flights,
        search,
        llm,
    }
}
