//! Historical delay aggregation

use crate::classifier::classify;
use crate::raw::RawFlightRecord;
use crate::types::{DelayEntry, DelayStatus, StatsSummary, UNKNOWN};

/// Fold a window of flight records into summary counters.
///
/// The average delay only covers flights classified `Delayed`; early or
/// slightly late departures do not pull it down.
pub fn aggregate(records: &[RawFlightRecord]) -> StatsSummary {
    let mut summary = StatsSummary::default();
    let mut delay_total: i64 = 0;

    for record in records {
        let scheduled = record.scheduled_departure().and_then(|t| t.utc.clone());
        let actual = record.actual_departure().and_then(|t| t.utc.clone());
        let status = record.status_text().unwrap_or(UNKNOWN);

        let classification = classify(scheduled.as_deref(), actual.as_deref(), status);

        summary.total_flights += 1;
        match classification.status {
            DelayStatus::OnTime => summary.on_time += 1,
            DelayStatus::Delayed => {
                summary.delayed += 1;
                delay_total += classification.delay_minutes.unwrap_or(0);
            }
            DelayStatus::Cancelled => summary.cancelled += 1,
            DelayStatus::Unknown => {}
        }

        summary.details.push(DelayEntry {
            scheduled_departure: scheduled,
            actual_departure: actual,
            status: status.to_string(),
            classification: classification.status,
            delay_minutes: classification.delay_minutes,
        });
    }

    if summary.delayed > 0 {
        let avg = delay_total as f64 / summary.delayed as f64;
        summary.avg_delay_minutes = (avg * 100.0).round() / 100.0;
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::{decode_flight_records, ProviderResponse};

    fn flight(status: &str, scheduled: &str, actual: &str) -> serde_json::Value {
        serde_json::json!({
            "status": status,
            "departure": {
                "scheduledTime": { "utc": scheduled },
                "runwayTime": { "utc": actual }
            }
        })
    }

    fn records(flights: Vec<serde_json::Value>) -> Vec<RawFlightRecord> {
        let body = serde_json::Value::Array(flights).to_string();
        decode_flight_records(&ProviderResponse::new(200, body)).unwrap()
    }

    #[test]
    fn test_mixed_week() {
        let records = records(vec![
            flight("Arrived", "2025-04-06 10:00Z", "2025-04-06 10:05Z"),
            flight("Arrived", "2025-04-07 10:00Z", "2025-04-07 10:20Z"),
            flight("Arrived", "2025-04-08 10:00Z", "2025-04-08 10:45Z"),
            flight("Canceled", "2025-04-09 10:00Z", "2025-04-09 10:00Z"),
            flight("Expected", "2025-04-10 10:00Z", "not a time"),
        ]);

        let summary = aggregate(&records);
        assert_eq!(summary.total_flights, 5);
        assert_eq!(summary.on_time, 1);
        assert_eq!(summary.delayed, 2);
        assert_eq!(summary.cancelled, 1);
        assert_eq!(summary.avg_delay_minutes, 32.5);
        assert_eq!(summary.details.len(), 5);
        assert_eq!(summary.details[4].classification, DelayStatus::Unknown);
        assert_eq!(summary.details[4].delay_minutes, None);
    }

    #[test]
    fn test_no_delays_averages_zero() {
        let records = records(vec![
            flight("Arrived", "2025-04-06 10:00Z", "2025-04-06 09:55Z"),
            flight("Canceled", "2025-04-07 10:00Z", "2025-04-07 10:00Z"),
        ]);

        let summary = aggregate(&records);
        assert_eq!(summary.delayed, 0);
        assert_eq!(summary.avg_delay_minutes, 0.0);
    }

    #[test]
    fn test_empty_window() {
        let summary = aggregate(&[]);
        assert_eq!(summary, StatsSummary::default());
    }

    #[test]
    fn test_average_rounds_to_two_decimals() {
        let records = records(vec![
            flight("Arrived", "2025-04-06 10:00Z", "2025-04-06 10:16Z"),
            flight("Arrived", "2025-04-07 10:00Z", "2025-04-07 10:16Z"),
            flight("Arrived", "2025-04-08 10:00Z", "2025-04-08 10:17Z"),
        ]);

        let summary = aggregate(&records);
        assert_eq!(summary.avg_delay_minutes, 16.33);
    }

    #[test]
    fn test_missing_status_is_unknown_text() {
        let records = records(vec![serde_json::json!({})]);
        let summary = aggregate(&records);
        assert_eq!(summary.details[0].status, UNKNOWN);
        assert_eq!(summary.details[0].scheduled_departure, None);
    }

    #[test]
    fn test_malformed_record_does_not_drop_the_window() {
        let body = r#"[
            {"status": "Arrived", "departure": {
                "scheduledTime": {"utc": "2025-04-06 10:00Z"},
                "runwayTime": {"utc": "2025-04-06 10:20Z"}
            }},
            {"status": "Arrived", "departure": {"scheduledTime": "2025-04-07 10:00Z"}},
            {"status": ["Canceled"]}
        ]"#;
        let records = decode_flight_records(&ProviderResponse::new(200, body)).unwrap();

        let summary = aggregate(&records);
        assert_eq!(summary.total_flights, 3);
        assert_eq!(summary.delayed, 1);
        assert_eq!(summary.avg_delay_minutes, 20.0);
        assert_eq!(summary.details[1].classification, DelayStatus::Unknown);
        assert_eq!(summary.details[2].status, UNKNOWN);
    }
}
