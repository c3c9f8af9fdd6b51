//! Error types for the HTTP transport.

use thiserror::Error;

/// Error type for outbound HTTP operations.
///
/// Carries whatever the transport reported without interpretation; the SDK
/// never retries, so a single failed attempt surfaces here directly.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    ///
    /// Includes DNS resolution failures, connection refused, and other
    /// network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    ///
    /// The server did not respond within the transport's timeout.
    #[error("Request timed out")]
    Timeout,

    /// The provided URL is invalid.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The server answered with a non-2xx status.
    ///
    /// Status code and body pass through unmodified.
    #[error("Request failed with status {status}: {}", body.as_deref().unwrap_or("<no body>"))]
    Status {
        /// HTTP status code of the response.
        status: http::StatusCode,
        /// Response body, if it was valid UTF-8.
        body: Option<String>,
    },

    /// A request or response JSON body could not be encoded or decoded.
    #[error("JSON body error: {0}")]
    Json(#[from] serde_json::Error),
}
