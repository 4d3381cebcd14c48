//! REST API type definitions

use flightclaim_sdk::ClaimAssistant;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub assistant: Arc<ClaimAssistant>,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Query parameters shared by the flight endpoints
#[derive(Debug, Deserialize)]
pub struct FlightParams {
    pub flight_number: String,
    pub date: String,
}

/// Query parameters for `/compensation`
#[derive(Debug, Deserialize)]
pub struct CompensationParams {
    pub flight_number: String,
    pub date: String,

    /// Relay the verdict as it is generated (default) or return it as JSON
    #[serde(default = "default_stream")]
    pub stream: bool,
}

fn default_stream() -> bool {
    true
}

/// Response for `/cancellation-reason`
#[derive(Debug, Serialize, Deserialize)]
pub struct CancellationReasonResponse {
    pub flight_number: String,
    pub date: String,
    pub cancellation_reason: String,
}
