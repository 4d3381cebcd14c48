//! Raw flight-status payloads
//!
//! The provider returns loosely-typed JSON where any nested object may be
//! absent or carry an unexpected type. Every level is decoded as optional
//! here, once, so that downstream code never touches untyped data. A field of
//! the wrong type decodes as `None` instead of failing the record.

use crate::error::{ClaimError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Service name used in upstream errors raised while decoding provider output
pub const FLIGHT_STATUS_SERVICE: &str = "flight-status";

/// Keys that mark a JSON object as a flight record
const RECORD_KEYS: [&str; 5] = ["number", "status", "airline", "departure", "arrival"];

/// Status and body exactly as the flight-status provider returned them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderResponse {
    pub status: u16,
    pub body: String,
}

impl ProviderResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// One flight as reported by the provider
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFlightRecord {
    #[serde(default, deserialize_with = "lenient")]
    pub status: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub airline: Option<RawAirline>,

    #[serde(default, deserialize_with = "lenient")]
    pub departure: Option<RawMovement>,

    #[serde(default, deserialize_with = "lenient")]
    pub arrival: Option<RawMovement>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawAirline {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
}

/// Departure or arrival leg
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMovement {
    #[serde(default, deserialize_with = "lenient")]
    pub airport: Option<RawAirport>,

    #[serde(default, deserialize_with = "lenient")]
    pub scheduled_time: Option<RawTime>,

    #[serde(default, deserialize_with = "lenient")]
    pub runway_time: Option<RawTime>,

    #[serde(default, deserialize_with = "lenient")]
    pub revised_time: Option<RawTime>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawAirport {
    #[serde(default, deserialize_with = "lenient")]
    pub iata: Option<String>,
}

/// A timestamp in both representations the provider sends
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTime {
    #[serde(default, deserialize_with = "lenient")]
    pub utc: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub local: Option<String>,
}

fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    match T::deserialize(value) {
        Ok(v) => Ok(Some(v)),
        Err(e) => {
            log::debug!("Dropping malformed provider field: {}", e);
            Ok(None)
        }
    }
}

fn record_from_value(value: serde_json::Value) -> RawFlightRecord {
    serde_json::from_value(value).unwrap_or_else(|e| {
        log::debug!("Treating malformed flight record as empty: {}", e);
        RawFlightRecord::default()
    })
}

fn looks_like_record(object: &serde_json::Map<String, serde_json::Value>) -> bool {
    RECORD_KEYS.iter().any(|key| object.contains_key(*key))
}

impl RawFlightRecord {
    pub fn airline_name(&self) -> Option<&str> {
        self.airline.as_ref()?.name.as_deref()
    }

    pub fn origin_iata(&self) -> Option<&str> {
        self.departure.as_ref()?.airport.as_ref()?.iata.as_deref()
    }

    pub fn destination_iata(&self) -> Option<&str> {
        self.arrival.as_ref()?.airport.as_ref()?.iata.as_deref()
    }

    pub fn scheduled_departure(&self) -> Option<&RawTime> {
        self.departure.as_ref()?.scheduled_time.as_ref()
    }

    /// Runway time, or the revised time when the runway time was not reported
    pub fn actual_departure(&self) -> Option<&RawTime> {
        let departure = self.departure.as_ref()?;
        departure
            .runway_time
            .as_ref()
            .or(departure.revised_time.as_ref())
    }

    pub fn status_text(&self) -> Option<&str> {
        self.status.as_deref()
    }
}

/// Decode a provider response into flight records.
///
/// A non-success status is an upstream error carrying the status and body. A
/// success with no content is an empty record set; emptiness is reported as
/// `NotFound` by the normalizer, not here. A single object is accepted only
/// when it carries a record key, so error envelopes are not read as flights.
/// Records that fail to decode are kept as empty records.
pub fn decode_flight_records(response: &ProviderResponse) -> Result<Vec<RawFlightRecord>> {
    if !response.is_success() {
        return Err(ClaimError::upstream(
            FLIGHT_STATUS_SERVICE,
            Some(response.status),
            response.body.clone(),
        ));
    }

    let body = response.body.trim();
    if response.status == 204 || body.is_empty() {
        return Ok(Vec::new());
    }

    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| {
        ClaimError::upstream(
            FLIGHT_STATUS_SERVICE,
            Some(response.status),
            format!("unparseable response ({}): {}", e, response.body),
        )
    })?;

    match value {
        serde_json::Value::Array(items) => Ok(items.into_iter().map(record_from_value).collect()),
        serde_json::Value::Object(object) if looks_like_record(&object) => {
            Ok(vec![record_from_value(serde_json::Value::Object(object))])
        }
        serde_json::Value::Null => Ok(Vec::new()),
        other => Err(ClaimError::upstream(
            FLIGHT_STATUS_SERVICE,
            Some(response.status),
            format!("unexpected response shape: {}", other),
        )),
    }
}
