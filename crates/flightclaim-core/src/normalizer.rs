//! Flight record normalization
//!
//! Turns the provider's record set into a single [`FlightDetail`]. Only the
//! first record is used; the provider's order is taken as-is and same-day
//! duplicates (diverted or rescheduled legs) are not disambiguated.
//!
//! The fetch and the optional cancellation-reason inference that follows
//! normalization are orchestrated by `flightclaim-sdk`; the trigger and the
//! search query are defined here so the contract lives next to the data.

use crate::error::{ClaimError, Result};
use crate::raw::{RawFlightRecord, RawTime};
use crate::types::{FlightDetail, UNKNOWN};

/// Maximum number of web snippets fed into cancellation-reason inference
pub const MAX_REASON_SNIPPETS: usize = 5;

fn or_unknown(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => UNKNOWN.to_string(),
    }
}

fn local_time(time: Option<&RawTime>) -> String {
    or_unknown(time.and_then(|t| t.local.as_deref()))
}

/// Build a detail from a single record, defaulting every absent field
pub fn detail_from_record(record: &RawFlightRecord) -> FlightDetail {
    FlightDetail {
        airline: or_unknown(record.airline_name()),
        origin: or_unknown(record.origin_iata()),
        destination: or_unknown(record.destination_iata()),
        scheduled_departure: local_time(record.scheduled_departure()),
        actual_departure: local_time(record.actual_departure()),
        status: or_unknown(record.status_text()),
        cancellation_reason: None,
    }
}

/// Normalize the first record of a provider response
pub fn normalize_first(records: &[RawFlightRecord]) -> Result<FlightDetail> {
    records
        .first()
        .map(detail_from_record)
        .ok_or_else(|| ClaimError::NotFound("No flight data found.".to_string()))
}

/// Whether a status warrants cancellation-reason inference.
///
/// Substring match on the free-text status, so "CanceledUncertain" and
/// "Delayed" trigger while a delayed flight reported as "Departed" does not.
pub fn should_infer_reason(status: &str) -> bool {
    let status = status.to_lowercase();
    status.contains("cancel") || status.contains("delay")
}

/// Web-search query used to explain a disruption
pub fn reason_search_query(detail: &FlightDetail, date: &str) -> String {
    format!("{} flight cancellation reason {}", detail.airline, date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::{RawAirline, RawAirport, RawMovement};

    fn record(airline: &str, status: &str) -> RawFlightRecord {
        RawFlightRecord {
            status: Some(status.to_string()),
            airline: Some(RawAirline {
                name: Some(airline.to_string()),
            }),
            departure: Some(RawMovement {
                airport: Some(RawAirport {
                    iata: Some("JFK".to_string()),
                }),
                scheduled_time: Some(RawTime {
                    utc: Some("2025-04-12 22:05Z".to_string()),
                    local: Some("2025-04-12 18:05-04:00".to_string()),
                }),
                runway_time: Some(RawTime {
                    utc: Some("2025-04-12 22:31Z".to_string()),
                    local: Some("2025-04-12 18:31-04:00".to_string()),
                }),
                revised_time: None,
            }),
            arrival: Some(RawMovement {
                airport: Some(RawAirport {
                    iata: Some("LAX".to_string()),
                }),
                ..Default::default()
            }),
        }
    }

    #[test]
    fn test_normalize_full_record() {
        let detail = normalize_first(&[record("Delta Air Lines", "Departed")]).unwrap();
        assert_eq!(detail.airline, "Delta Air Lines");
        assert_eq!(detail.origin, "JFK");
        assert_eq!(detail.destination, "LAX");
        assert_eq!(detail.scheduled_departure, "2025-04-12 18:05-04:00");
        assert_eq!(detail.actual_departure, "2025-04-12 18:31-04:00");
        assert_eq!(detail.status, "Departed");
        assert!(detail.cancellation_reason.is_none());
    }

    #[test]
    fn test_only_first_record_is_used() {
        let records = vec![record("First Air", "Departed"), record("Second Air", "Canceled")];
        let detail = normalize_first(&records).unwrap();
        assert_eq!(detail.airline, "First Air");
        assert_eq!(detail.status, "Departed");
    }

    #[test]
    fn test_empty_is_not_found() {
        let err = normalize_first(&[]).unwrap_err();
        assert!(matches!(err, ClaimError::NotFound(_)));
    }

    #[test]
    fn test_missing_fields_become_unknown() {
        let detail = normalize_first(&[RawFlightRecord::default()]).unwrap();
        assert_eq!(detail, FlightDetail::default());
    }

    #[test]
    fn test_blank_field_becomes_unknown() {
        let mut raw = record("  ", "Departed");
        raw.arrival = None;
        let detail = detail_from_record(&raw);
        assert_eq!(detail.airline, UNKNOWN);
        assert_eq!(detail.destination, UNKNOWN);
    }

    #[test]
    fn test_reason_trigger() {
        assert!(should_infer_reason("Canceled"));
        assert!(should_infer_reason("CanceledUncertain"));
        assert!(should_infer_reason("DELAYED"));
        assert!(!should_infer_reason("Departed"));
        assert!(!should_infer_reason("Unknown"));
    }

    #[test]
    fn test_reason_search_query() {
        let detail = normalize_first(&[record("Delta Air Lines", "Canceled")]).unwrap();
        assert_eq!(
            reason_search_query(&detail, "2025-04-12"),
            "Delta Air Lines flight cancellation reason 2025-04-12"
        );
    }
}
