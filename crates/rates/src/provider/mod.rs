//! Upstream rate provider contract and clients.

mod bluelytics;

pub use bluelytics::{BluelyticsProvider, BLUELYTICS_BASE_URL};

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::errors::RateError;
use crate::models::BlueRate;

/// A source of USD/ARS blue-dollar quotes.
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Display name surfaced as the `source` of a resolved rate.
    fn name(&self) -> &'static str;

    /// Current intraday rate, dated by the provider's own update timestamp.
    async fn latest(&self) -> Result<BlueRate, RateError>;

    /// Closing rate for a past calendar day. Implementations date the
    /// result with the requested day; upstream-supplied dates are not
    /// trusted for historical lookups.
    async fn historical(&self, day: NaiveDate) -> Result<BlueRate, RateError>;
}
