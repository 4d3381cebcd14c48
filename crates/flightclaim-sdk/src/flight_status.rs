//! Flight-status provider client
//!
//! The client only transports: it returns the provider's status and body
//! untouched, and [`flightclaim_core::decode_flight_records`] decides what
//! they mean.

use crate::config::FlightStatusConfig;
use crate::error::SdkError;
use async_trait::async_trait;
use chrono::NaiveDate;
use flightclaim_core::{ClaimError, ProviderResponse, Result, FLIGHT_STATUS_SERVICE};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// Source of raw flight records
#[async_trait]
pub trait FlightStatusLookup: Send + Sync {
    /// Flights with this number departing on `date`
    async fn flights_on(&self, flight_number: &str, date: NaiveDate) -> Result<ProviderResponse>;

    /// Flights with this number departing between `from` and `to`, both inclusive
    async fn flights_between(
        &self,
        flight_number: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<ProviderResponse>;
}

/// AeroDataBox client (RapidAPI gateway)
pub struct AeroDataBoxClient {
    client: Client,
    base_url: String,
    api_key: String,
    api_host: String,
}

impl AeroDataBoxClient {
    pub fn new(config: &FlightStatusConfig) -> std::result::Result<Self, SdkError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SdkError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        if config.api_key.is_empty() {
            warn!("No flight-status API key configured");
        }

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            api_host: config.api_host.clone(),
        })
    }

    fn flight_url(&self, flight_number: &str, dates: &[NaiveDate]) -> String {
        let mut url = format!(
            "{}/flights/number/{}",
            self.base_url,
            urlencoding::encode(flight_number)
        );
        for date in dates {
            url.push('/');
            url.push_str(&date.format("%Y-%m-%d").to_string());
        }
        url
    }

    async fn fetch(&self, url: &str) -> Result<ProviderResponse> {
        debug!("Fetching flight status: {}", url);

        let response = self
            .client
            .get(url)
            .header("x-rapidapi-key", &self.api_key)
            .header("x-rapidapi-host", &self.api_host)
            .send()
            .await
            .map_err(|e| {
                ClaimError::upstream(FLIGHT_STATUS_SERVICE, None, format!("request failed: {}", e))
            })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            ClaimError::upstream(
                FLIGHT_STATUS_SERVICE,
                Some(status),
                format!("failed to read response body: {}", e),
            )
        })?;

        if !(200..300).contains(&status) {
            warn!("Flight-status provider returned {}", status);
        }

        Ok(ProviderResponse::new(status, body))
    }
}

#[async_trait]
impl FlightStatusLookup for AeroDataBoxClient {
    async fn flights_on(&self, flight_number: &str, date: NaiveDate) -> Result<ProviderResponse> {
        let url = self.flight_url(flight_number, &[date]);
        self.fetch(&url).await
    }

    async fn flights_between(
        &self,
        flight_number: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<ProviderResponse> {
        let url = self.flight_url(flight_number, &[from, to]);
        self.fetch(&url).await
    }
}
