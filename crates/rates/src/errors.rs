use thiserror::Error;

/// Errors that can occur while resolving a blue-dollar rate.
#[derive(Error, Debug)]
pub enum RateError {
    /// The transport to the upstream provider failed.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The provider answered with a non-success status.
    #[error("Provider error: {provider} - {message}")]
    Provider {
        /// The provider that returned the error
        provider: String,
        /// Detail kept for server-side diagnostics only
        message: String,
    },

    /// The provider answered 2xx but the body did not match its schema.
    #[error("Parsing error: {0}")]
    Parsing(String),

    /// The requested date was neither `today` nor a `YYYY-MM-DD` date.
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}
