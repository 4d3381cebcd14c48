//! Delay/cancellation classification
//!
//! Works on the provider's UTC wire format (`YYYY-MM-DD HH:MMZ`). A timestamp
//! that is missing and one that fails to parse are treated the same way: the
//! flight becomes `Unknown` rather than failing the whole request.

use crate::types::{DelayClassification, DelayStatus};
use chrono::NaiveDateTime;

/// A departure more than this many minutes late is `Delayed`
pub const DELAY_THRESHOLD_MINUTES: i64 = 15;

const WIRE_FORMAT: &str = "%Y-%m-%d %H:%MZ";

/// Parse a UTC wire timestamp, `None` when malformed
pub fn parse_wire_timestamp(raw: &str) -> Option<NaiveDateTime> {
    match NaiveDateTime::parse_from_str(raw.trim(), WIRE_FORMAT) {
        Ok(ts) => Some(ts),
        Err(e) => {
            log::debug!("Ignoring malformed timestamp {:?}: {}", raw, e);
            None
        }
    }
}

/// Whether a provider status means the flight was cancelled.
///
/// Both spellings are accepted: the flight-status provider reports "Canceled".
pub fn is_cancelled_status(status: &str) -> bool {
    let status = status.trim();
    status.eq_ignore_ascii_case("cancelled") || status.eq_ignore_ascii_case("canceled")
}

/// Classify one flight from its scheduled/actual UTC departure and status
pub fn classify(scheduled: Option<&str>, actual: Option<&str>, status: &str) -> DelayClassification {
    if is_cancelled_status(status) {
        return DelayClassification::cancelled();
    }

    let scheduled = scheduled.and_then(parse_wire_timestamp);
    let actual = actual.and_then(parse_wire_timestamp);

    match (scheduled, actual) {
        (Some(scheduled), Some(actual)) => {
            let delay = (actual - scheduled).num_minutes();
            let status = if delay > DELAY_THRESHOLD_MINUTES {
                DelayStatus::Delayed
            } else {
                DelayStatus::OnTime
            };
            DelayClassification::new(status, Some(delay))
        }
        _ => DelayClassification::unknown(),
    }
}
