use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dolarblue_rates::RateError;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Date parameter is required")]
    MissingDateParam,
    #[error("Invalid date parameter")]
    InvalidDateParam(#[source] RateError),
    #[error("Failed to fetch exchange rate")]
    Upstream(#[source] RateError),
}

impl From<RateError> for ApiError {
    fn from(err: RateError) -> Self {
        match err {
            RateError::InvalidDate(_) => ApiError::InvalidDateParam(err),
            _ => ApiError::Upstream(err),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::MissingDateParam | ApiError::InvalidDateParam(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream(cause) => {
                // Full upstream detail stays in server-side diagnostics;
                // the caller only sees the generic message.
                tracing::error!(error = %cause, "Exchange rate fetch failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = Json(ErrorBody {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
