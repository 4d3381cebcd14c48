//! Validated caller query

use crate::error::{ClaimError, Result};
use chrono::{Duration, NaiveDate};
use std::fmt;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Days in the historical window, the queried date included
pub const HISTORY_WINDOW_DAYS: i64 = 7;

/// Flight number and departure date, checked before any upstream call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightQuery {
    flight_number: String,
    date: NaiveDate,
}

impl FlightQuery {
    /// Validate raw caller input.
    ///
    /// The flight number is trimmed and upper-cased and must be ASCII
    /// alphanumeric; the date must be `YYYY-MM-DD`.
    pub fn parse(flight_number: &str, date: &str) -> Result<Self> {
        let flight_number = flight_number.trim();
        if flight_number.is_empty() {
            return Err(ClaimError::InvalidInput("flight number is required".to_string()));
        }
        if !flight_number.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ClaimError::InvalidInput(format!(
                "flight number must be letters and digits only, got {:?}",
                flight_number
            )));
        }

        let invalid_date =
            || ClaimError::InvalidInput(format!("date must be YYYY-MM-DD, got {:?}", date));
        let raw_date = date.trim();
        if !has_date_shape(raw_date) {
            return Err(invalid_date());
        }
        let date = NaiveDate::parse_from_str(raw_date, DATE_FORMAT).map_err(|_| invalid_date())?;

        Ok(Self {
            flight_number: flight_number.to_ascii_uppercase(),
            date,
        })
    }

    pub fn flight_number(&self) -> &str {
        &self.flight_number
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The date in provider format
    pub fn date_str(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    /// First and last day of the trailing window ending at the queried date
    pub fn history_window(&self) -> Result<(NaiveDate, NaiveDate)> {
        let from = self
            .date
            .checked_sub_signed(Duration::days(HISTORY_WINDOW_DAYS - 1))
            .ok_or_else(|| {
                ClaimError::InvalidInput(format!("date {} is out of range", self.date_str()))
            })?;
        Ok((from, self.date))
    }
}

/// Exactly `dddd-dd-dd`; chrono alone also accepts signed and short years
fn has_date_shape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

impl fmt::Display for FlightQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on {}", self.flight_number, self.date_str())
    }
}
