use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    config::Config,
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use dolarblue_rates::RateQuery;

pub async fn healthz() -> &'static str {
    "ok"
}

pub async fn readyz() -> &'static str {
    "ok"
}

#[derive(Deserialize)]
struct ExchangeRateParams {
    date: Option<String>,
}

#[derive(Serialize)]
struct ExchangeRateResponse {
    date: String,
    base: &'static str,
    target: &'static str,
    rate: Decimal,
    source: &'static str,
}

async fn get_exchange_rate(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ExchangeRateParams>,
) -> ApiResult<Json<ExchangeRateResponse>> {
    let date = params
        .date
        .filter(|d| !d.is_empty())
        .ok_or(ApiError::MissingDateParam)?;
    let query = RateQuery::for_input(&date)?;
    let rate = state.rate_service.get_rate(query).await?;
    Ok(Json(ExchangeRateResponse {
        // The caller's literal input is echoed back, so "today" stays
        // "today" even though it resolved to the latest path.
        date,
        base: "USD",
        target: "ARS",
        rate: rate.value_sell,
        source: state.rate_service.provider_name(),
    }))
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .map(|o| o.parse().unwrap())
            .collect::<Vec<_>>();
        CorsLayer::new().allow_origin(origins)
    };

    Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .route("/api/exchange-rate", get(get_exchange_rate))
        .with_state(state)
        .layer(cors)
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}
