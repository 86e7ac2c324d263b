use std::{net::SocketAddr, time::Duration};

use dolarblue_rates::BLUELYTICS_BASE_URL;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub provider_base_url: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("DOLARBLUE_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .expect("Invalid DOLARBLUE_LISTEN_ADDR");
        let provider_base_url = std::env::var("DOLARBLUE_PROVIDER_URL")
            .unwrap_or_else(|_| BLUELYTICS_BASE_URL.to_string());
        let cors_allow = std::env::var("DOLARBLUE_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("DOLARBLUE_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        Self {
            listen_addr,
            provider_base_url,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
        }
    }
}
