//! Delay classification and historical summary types

use serde::{Deserialize, Serialize};

/// Outcome of classifying one flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DelayStatus {
    OnTime,
    Delayed,
    Cancelled,
    Unknown,
}

/// Classification plus delay magnitude.
///
/// `delay_minutes` is present only when both timestamps parsed, and may be
/// negative for early departures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayClassification {
    pub status: DelayStatus,
    pub delay_minutes: Option<i64>,
}

impl DelayClassification {
    pub fn new(status: DelayStatus, delay_minutes: Option<i64>) -> Self {
        Self {
            status,
            delay_minutes,
        }
    }

    pub fn cancelled() -> Self {
        Self::new(DelayStatus::Cancelled, None)
    }

    pub fn unknown() -> Self {
        Self::new(DelayStatus::Unknown, None)
    }
}

/// One flight inside a historical summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DelayEntry {
    /// Scheduled departure, UTC wire format
    pub scheduled_departure: Option<String>,

    /// Actual departure, UTC wire format
    pub actual_departure: Option<String>,

    /// Raw provider status
    pub status: String,

    pub classification: DelayStatus,

    pub delay_minutes: Option<i64>,
}

/// Counters over a trailing window of flights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    pub total_flights: usize,
    pub on_time: usize,
    pub delayed: usize,
    pub cancelled: usize,
    /// Mean delay over `Delayed` flights only, two decimals, 0.0 when none
    pub avg_delay_minutes: f64,
    pub details: Vec<DelayEntry>,
}

impl Default for StatsSummary {
    fn default() -> Self {
        Self {
            total_flights: 0,
            on_time: 0,
            delayed: 0,
            cancelled: 0,
            avg_delay_minutes: 0.0,
            details: Vec::new(),
        }
    }
}
