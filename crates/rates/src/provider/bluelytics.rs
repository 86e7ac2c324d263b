//! Bluelytics API client.
//!
//! Two endpoints are consumed:
//! - `GET /latest` for the intraday blue rate
//! - `GET /historical?day=YYYY-MM-DD` for a closed day's rate
//!
//! Any non-2xx answer is a failure; no retries are attempted.

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::errors::RateError;
use crate::models::{BlueRate, ISO_DATE_FORMAT};
use crate::provider::RateProvider;

pub const BLUELYTICS_BASE_URL: &str = "https://api.bluelytics.com.ar/v2";

const PROVIDER_NAME: &str = "Bluelytics API";
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Blue-dollar block shared by both endpoints. Bluelytics also returns
/// buy/avg values and the official rate; only the selling rate is
/// consumed here.
#[derive(Debug, Deserialize)]
struct BlueQuote {
    value_sell: Decimal,
}

#[derive(Debug, Deserialize)]
struct LatestResponse {
    blue: BlueQuote,
    last_update: String,
}

#[derive(Debug, Deserialize)]
struct HistoricalResponse {
    blue: BlueQuote,
}

/// Client for the Bluelytics blue-dollar API.
pub struct BluelyticsProvider {
    client: Client,
    base_url: String,
}

impl BluelyticsProvider {
    pub fn new() -> Self {
        Self::with_base_url(BLUELYTICS_BASE_URL)
    }

    /// Point the client at a different host, e.g. a stand-in server in
    /// tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    async fn get_json<T>(&self, url: &str) -> Result<T, RateError>
    where
        T: serde::de::DeserializeOwned,
    {
        debug!("Fetching {}", url);
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(RateError::Provider {
                provider: PROVIDER_NAME.to_string(),
                message: format!("request failed with status {}", response.status()),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| RateError::Parsing(e.to_string()))
    }
}

impl Default for BluelyticsProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RateProvider for BluelyticsProvider {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn latest(&self) -> Result<BlueRate, RateError> {
        let url = format!("{}/latest", self.base_url);
        let body: LatestResponse = self.get_json(&url).await?;
        Ok(BlueRate {
            value_sell: body.blue.value_sell,
            date: body.last_update,
        })
    }

    async fn historical(&self, day: NaiveDate) -> Result<BlueRate, RateError> {
        let url = format!(
            "{}/historical?day={}",
            self.base_url,
            day.format(ISO_DATE_FORMAT)
        );
        let body: HistoricalResponse = self.get_json(&url).await?;
        // The requested day is authoritative for a closed day's rate.
        Ok(BlueRate {
            value_sell: body.blue.value_sell,
            date: day.format(ISO_DATE_FORMAT).to_string(),
        })
    }
}
