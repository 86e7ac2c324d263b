//! In-memory rate cache with caller-side expiry.

use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

use chrono::NaiveDate;

use crate::models::BlueRate;

/// Freshness window for the latest-rate slot; the rate moves intraday.
pub const LATEST_TTL: Duration = Duration::from_secs(15 * 60);

/// Freshness window for historical entries. A closed day's rate is
/// immutable, so a long window is safe and spares the upstream.
pub const HISTORICAL_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Discriminator for the cached quantity an entry represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheKey {
    Latest,
    Historical(NaiveDate),
}

/// A cached quote stamped with its insertion instant.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub rate: BlueRate,
    pub inserted_at: Instant,
}

impl CacheEntry {
    pub fn age(&self) -> Duration {
        self.inserted_at.elapsed()
    }

    /// Expiry is the caller's policy; the store itself never evicts.
    pub fn is_fresh(&self, ttl: Duration) -> bool {
        self.age() < ttl
    }
}

/// Process-lifetime quote cache, one entry per key.
///
/// Owned by [`RateService`](crate::service::RateService) and injected at
/// construction; lookups are synchronous so request tasks only suspend on
/// the upstream call. The key space stays small (one latest slot plus one
/// slot per distinct historical day ever requested), so the map is
/// unbounded.
#[derive(Debug, Default)]
pub struct RateCache {
    entries: RwLock<HashMap<CacheKey, CacheEntry>>,
}

impl RateCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &CacheKey) -> Option<CacheEntry> {
        self.entries
            .read()
            .expect("rate cache lock poisoned")
            .get(key)
            .cloned()
    }

    /// Store `rate` under `key`, stamped with the current instant. Any
    /// prior entry for the key is replaced wholesale, data and timestamp
    /// together.
    pub fn insert(&self, key: CacheKey, rate: BlueRate) {
        let entry = CacheEntry {
            rate,
            inserted_at: Instant::now(),
        };
        self.entries
            .write()
            .expect("rate cache lock poisoned")
            .insert(key, entry);
    }

    pub fn len(&self) -> usize {
        self.entries.read().expect("rate cache lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
