//! Blue-dollar exchange rate resolution for dolarblue.
//!
//! This crate resolves a requested calendar date to the USD/ARS
//! "blue dollar" rate. Lookups go through a two-tier in-memory cache
//! (a single always-fresh "latest" slot plus one slot per historical
//! day) and fall back to the Bluelytics API on a miss.
//!
//! # Core Types
//!
//! - [`RateQuery`] - Classifies a raw date string into the latest or
//!   historical fetch path
//! - [`RateService`] - Cache-first rate resolution facade
//! - [`RateProvider`] - Upstream quote source contract
//! - [`BlueRate`] - A resolved quote (selling rate + date)

pub mod cache;
pub mod errors;
pub mod models;
pub mod provider;
pub mod service;

pub use cache::{CacheEntry, CacheKey, RateCache, HISTORICAL_TTL, LATEST_TTL};
pub use errors::RateError;
pub use models::{BlueRate, RateQuery};
pub use provider::{BluelyticsProvider, RateProvider, BLUELYTICS_BASE_URL};
pub use service::RateService;
