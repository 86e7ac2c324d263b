use std::sync::Arc;

use crate::config::Config;
use dolarblue_rates::{BluelyticsProvider, RateService};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub rate_service: Arc<RateService>,
}

pub fn init_tracing() {
    let fmt_layer = fmt::layer().json().with_current_span(false);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

pub fn build_state(config: &Config) -> Arc<AppState> {
    let provider = Arc::new(BluelyticsProvider::with_base_url(
        config.provider_base_url.as_str(),
    ));
    let rate_service = Arc::new(RateService::new(provider));
    Arc::new(AppState { rate_service })
}
