//! Normalized flight detail

use serde::{Deserialize, Serialize};

/// Placeholder for any field the provider did not supply
pub const UNKNOWN: &str = "Unknown";

/// Canonical view of one flight, built once per request from the first
/// provider record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightDetail {
    /// Operating airline name as reported by the provider
    pub airline: String,

    /// Departure airport IATA code
    pub origin: String,

    /// Arrival airport IATA code
    pub destination: String,

    /// Scheduled departure, local time
    pub scheduled_departure: String,

    /// Actual departure, local time
    pub actual_departure: String,

    /// Free-text provider status (e.g. "Departed", "Canceled")
    pub status: String,

    /// Inferred cancellation/delay reason, only set when inference was requested and triggered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancellation_reason: Option<String>,
}

impl FlightDetail {
    /// Attach an inferred cancellation reason
    pub fn with_cancellation_reason(mut self, reason: impl Into<String>) -> Self {
        self.cancellation_reason = Some(reason.into());
        self
    }
}

impl Default for FlightDetail {
    fn default() -> Self {
        Self {
            airline: UNKNOWN.to_string(),
            origin: UNKNOWN.to_string(),
            destination: UNKNOWN.to_string(),
            scheduled_departure: UNKNOWN.to_string(),
            actual_departure: UNKNOWN.to_string(),
            status: UNKNOWN.to_string(),
            cancellation_reason: None,
        }
    }
}
