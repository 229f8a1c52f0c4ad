use thiserror::Error;

/// Errors from [`crate::directions::DirectionsProvider::candidate_routes`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectionsError {
    /// The request did not complete within the configured timeout.
    #[error("directions request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Requested URL.
        url: String,
        /// Configured timeout in seconds.
        timeout_secs: u64,
    },
    /// The service could not be reached.
    #[error("directions request to {url} failed: {message}")]
    NetworkError {
        /// Requested URL.
        url: String,
        /// Transport error description.
        message: String,
    },
    /// The service answered with a non-success status.
    #[error("directions service returned HTTP {status} for {url}: {message}")]
    HttpError {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Error description, usually the service's error body.
        message: String,
    },
    /// The service reported an application-level error.
    #[error("directions service error {code}: {message}")]
    ServiceError {
        /// Service-specific error code.
        code: String,
        /// Error description.
        message: String,
    },
    /// The response body could not be decoded.
    #[error("failed to parse directions response: {message}")]
    ParseError {
        /// Decoder error description.
        message: String,
    },
}
