//! Error types for client construction.

use thiserror::Error;

/// Error type for building a client from a [`Config`](super::Config).
///
/// Raised only at construction time; dispatch operations report
/// `ValidationError` or `TransportError` instead.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The client ID cannot be used as an HTTP header value.
    #[error("Invalid client ID: {reason}")]
    InvalidClientId {
        /// Reason for invalidity.
        reason: String,
    },

    /// The access token cannot be used as an HTTP header value.
    #[error("Invalid access token: {reason}")]
    InvalidAccessToken {
        /// Reason for invalidity.
        reason: String,
    },

    /// The base URL cannot serve as a base for endpoint paths.
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl {
        /// The rejected URL.
        url: String,
        /// Reason for invalidity.
        reason: String,
    },
}
