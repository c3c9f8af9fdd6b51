//! Client construction configuration.

mod error;

pub use error::ConfigError;

use url::Url;

/// Default production origin for the SDK backend.
pub const DEFAULT_BASE_URL: &str = "https://www.lunartools.co";

/// Credentials and connection settings for constructing a client.
///
/// Immutable once the client is built; held for the lifetime of the client
/// instance.
///
/// # Example
///
/// ```
/// use lunartools_sdk::Config;
///
/// let config = Config::new("my-client-id", "my-access-token");
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Opaque client identifier, sent as the `X-Client-ID` header and in the
    /// request body of SDK calls.
    pub client_id: String,
    /// Opaque secret, sent as the `X-Access-Token` header and in the request
    /// body of SDK calls.
    pub access_token: String,
    /// Override for the SDK backend origin. `None` uses
    /// [`DEFAULT_BASE_URL`].
    pub base_url: Option<Url>,
}

impl Config {
    /// Creates a config with the given credentials and the default base URL.
    #[must_use]
    pub fn new(client_id: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            access_token: access_token.into(),
            base_url: None,
        }
    }

    /// Overrides the SDK backend origin.
    #[must_use]
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }
}
