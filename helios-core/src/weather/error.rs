use thiserror::Error;

/// Errors from [`crate::weather::WeatherProvider::current_condition`].
///
/// Every variant means "condition unavailable" to the risk scorer; none of
/// them abort route annotation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeatherError {
    /// No weather service has been configured.
    #[error("weather lookups are not configured")]
    Unconfigured,
    /// The request did not complete within the configured timeout.
    #[error("weather request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Requested URL, without credentials.
        url: String,
        /// Configured timeout in seconds.
        timeout_secs: u64,
    },
    /// The service could not be reached.
    #[error("weather request to {url} failed: {message}")]
    NetworkError {
        /// Requested URL, without credentials.
        url: String,
        /// Transport error description.
        message: String,
    },
    /// The service answered with a non-success status.
    #[error("weather service returned HTTP {status} for {url}: {message}")]
    HttpError {
        /// Requested URL, without credentials.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Error description.
        message: String,
    },
    /// The response body could not be decoded.
    #[error("failed to parse weather response: {message}")]
    ParseError {
        /// Decoder error description.
        message: String,
    },
    /// The response decoded but carried no condition keyword.
    #[error("weather response did not include a condition")]
    MissingCondition,
}
