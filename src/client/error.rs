//! Error type for dispatch operations.

use thiserror::Error;

use crate::transport::TransportError;
use crate::validate::ValidationError;

/// Error type for client dispatch operations.
///
/// Exactly two categories: validation failures raised locally before any
/// network I/O, and transport failures passed through from the HTTP layer.
/// Nothing is swallowed, logged at error level, or retried internally.
#[derive(Debug, Error)]
pub enum Error {
    /// The payload failed client-side validation; no request was issued.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The HTTP request failed or the server answered with a non-2xx status.
    #[error(transparent)]
    Transport(#[from] TransportError),
}
