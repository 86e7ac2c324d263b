//! Contract tests for the Bluelytics client against a local stand-in
//! server, covering both endpoints and failure propagation.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use chrono::NaiveDate;
use rust_decimal_macros::dec;
use serde_json::{json, Value};

use dolarblue_rates::{BluelyticsProvider, RateProvider, RateQuery, RateService};

#[derive(Default)]
struct Upstream {
    latest_calls: AtomicUsize,
    historical_calls: AtomicUsize,
    last_day_param: Mutex<Option<String>>,
    unavailable: AtomicBool,
}

async fn latest_endpoint(
    State(upstream): State<Arc<Upstream>>,
) -> Result<Json<Value>, StatusCode> {
    upstream.latest_calls.fetch_add(1, Ordering::SeqCst);
    if upstream.unavailable.load(Ordering::SeqCst) {
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    }
    Ok(Json(json!({
        "oficial": {"value_avg": 1045.0, "value_sell": 1060.0, "value_buy": 1030.0},
        "blue": {"value_avg": 1275.5, "value_sell": 1285.5, "value_buy": 1265.5},
        "last_update": "2025-01-15T10:00:00Z"
    })))
}

async fn historical_endpoint(
    State(upstream): State<Arc<Upstream>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Value>, StatusCode> {
    upstream.historical_calls.fetch_add(1, Ordering::SeqCst);
    if upstream.unavailable.load(Ordering::SeqCst) {
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    }
    *upstream.last_day_param.lock().unwrap() = params.get("day").cloned();
    // The decoy date field checks that the client never trusts it.
    Ok(Json(json!({
        "oficial": {"value_sell": 912.0},
        "blue": {"value_sell": 910.0},
        "date": "1999-01-01"
    })))
}

async fn spawn_upstream(upstream: Arc<Upstream>) -> String {
    let app = Router::new()
        .route("/latest", get(latest_endpoint))
        .route("/historical", get(historical_endpoint))
        .with_state(upstream);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn june_first() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

#[tokio::test]
async fn latest_rate_carries_the_provider_timestamp() {
    let upstream = Arc::new(Upstream::default());
    let base_url = spawn_upstream(upstream.clone()).await;
    let provider = BluelyticsProvider::with_base_url(base_url);

    let rate = provider.latest().await.unwrap();
    assert_eq!(rate.value_sell, dec!(1285.5));
    assert_eq!(rate.date, "2025-01-15T10:00:00Z");
}

#[tokio::test]
async fn historical_rate_is_dated_by_the_requested_day() {
    let upstream = Arc::new(Upstream::default());
    let base_url = spawn_upstream(upstream.clone()).await;
    let provider = BluelyticsProvider::with_base_url(base_url);

    let rate = provider.historical(june_first()).await.unwrap();
    assert_eq!(rate.value_sell, dec!(910.0));
    assert_eq!(rate.date, "2024-06-01");
    assert_eq!(
        upstream.last_day_param.lock().unwrap().as_deref(),
        Some("2024-06-01")
    );
}

#[tokio::test]
async fn non_success_status_is_a_provider_error() {
    let upstream = Arc::new(Upstream::default());
    upstream.unavailable.store(true, Ordering::SeqCst);
    let base_url = spawn_upstream(upstream.clone()).await;
    let provider = BluelyticsProvider::with_base_url(base_url);

    let err = provider.latest().await.unwrap_err();
    assert!(err.to_string().contains("503"));
}

#[tokio::test]
async fn service_reuses_the_cached_historical_rate() {
    let upstream = Arc::new(Upstream::default());
    let base_url = spawn_upstream(upstream.clone()).await;
    let service = RateService::new(Arc::new(BluelyticsProvider::with_base_url(base_url)));

    let first = service
        .get_rate(RateQuery::Historical(june_first()))
        .await
        .unwrap();
    let second = service
        .get_rate(RateQuery::Historical(june_first()))
        .await
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(upstream.historical_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn service_recovers_once_the_upstream_is_back() {
    let upstream = Arc::new(Upstream::default());
    upstream.unavailable.store(true, Ordering::SeqCst);
    let base_url = spawn_upstream(upstream.clone()).await;
    let service = RateService::new(Arc::new(BluelyticsProvider::with_base_url(base_url)));

    assert!(service.get_rate(RateQuery::Latest).await.is_err());

    upstream.unavailable.store(false, Ordering::SeqCst);
    let rate = service.get_rate(RateQuery::Latest).await.unwrap();
    assert_eq!(rate.value_sell, dec!(1285.5));
    assert_eq!(upstream.latest_calls.load(Ordering::SeqCst), 2);
}
