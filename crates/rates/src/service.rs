//! Cache-first rate resolution.

use std::sync::Arc;

use chrono::NaiveDate;
use log::{debug, warn};

use crate::cache::{CacheKey, RateCache, HISTORICAL_TTL, LATEST_TTL};
use crate::errors::RateError;
use crate::models::{BlueRate, RateQuery};
use crate::provider::RateProvider;

/// Resolves rate queries against the cache, falling back to the provider.
///
/// Nothing is written to the cache when the provider fails. Concurrent
/// requests for the same cold key may each reach the provider; the last
/// write wins, which is harmless since writes per key are idempotent.
pub struct RateService {
    provider: Arc<dyn RateProvider>,
    cache: RateCache,
}

impl RateService {
    pub fn new(provider: Arc<dyn RateProvider>) -> Self {
        Self {
            provider,
            cache: RateCache::new(),
        }
    }

    /// Display name of the backing provider.
    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    pub async fn get_rate(&self, query: RateQuery) -> Result<BlueRate, RateError> {
        match query {
            RateQuery::Latest => self.latest_rate().await,
            RateQuery::Historical(day) => self.historical_rate(day).await,
        }
    }

    async fn latest_rate(&self) -> Result<BlueRate, RateError> {
        if let Some(entry) = self.cache.get(&CacheKey::Latest) {
            if entry.is_fresh(LATEST_TTL) {
                debug!("Latest rate served from cache");
                return Ok(entry.rate);
            }
        }

        let rate = self.provider.latest().await.inspect_err(|e| {
            warn!("Latest rate fetch failed: {}", e);
        })?;
        self.cache.insert(CacheKey::Latest, rate.clone());
        Ok(rate)
    }

    async fn historical_rate(&self, day: NaiveDate) -> Result<BlueRate, RateError> {
        let key = CacheKey::Historical(day);
        if let Some(entry) = self.cache.get(&key) {
            if entry.is_fresh(HISTORICAL_TTL) {
                debug!("Historical rate for {} served from cache", day);
                return Ok(entry.rate);
            }
        }

        let rate = self.provider.historical(day).await.inspect_err(|e| {
            warn!("Historical rate fetch for {} failed: {}", day, e);
        })?;
        self.cache.insert(key, rate.clone());
        Ok(rate)
    }
}
