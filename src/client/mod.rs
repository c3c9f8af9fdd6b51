//! Request validator + dispatcher for the Lunartools backend.
//!
//! [`Client`] validates each payload locally, then issues exactly one
//! outbound HTTP POST: SDK submissions go to the configured base origin with
//! credential headers, webhook forwards go directly to a caller-supplied URL
//! with only a content-type header.

mod error;

#[cfg(test)]
mod mod_tests;

pub use error::Error;

use http::header::CONTENT_TYPE;
use http::{HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use url::Url;

use crate::config::{Config, ConfigError, DEFAULT_BASE_URL};
use crate::payload::{Order, Product, Webhook, WebhookResponse};
use crate::transport::{HttpClient, HttpRequest, HttpResponse, ReqwestClient, TransportError};
use crate::validate;

/// Ingestion path for SDK submissions. The deployed backend accepts both
/// products and orders at this one path.
const SDK_ADD_ORDER_PATH: &str = "/sdk/add-order";

const HEADER_CLIENT_ID: HeaderName = HeaderName::from_static("x-client-id");
const HEADER_ACCESS_TOKEN: HeaderName = HeaderName::from_static("x-access-token");

/// Lunartools SDK client.
///
/// Holds immutable credentials and a pre-built header set; safe to reuse for
/// an unbounded number of independent, concurrent calls. No cross-call state
/// exists beyond the credentials, and no retry, timeout, or cancellation
/// logic is layered on top of the transport.
///
/// # Type Parameters
///
/// - `H`: the HTTP client implementation (defaults to [`ReqwestClient`];
///   inject a mock via [`Client::with_http_client`] for tests).
///
/// # Example
///
/// ```no_run
/// use lunartools_sdk::{Client, Config};
/// use lunartools_sdk::payload::Product;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Client::new(Config::new("my-client-id", "my-access-token"))?;
/// client.add_product(&Product::new("Air Max 97", "SKU-4411", 5.0)).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Client<H = ReqwestClient> {
    http: H,
    client_id: String,
    access_token: String,
    base_url: Url,
    add_order_url: Url,
    sdk_headers: HeaderMap,
}

impl Client<ReqwestClient> {
    /// Creates a client backed by the production reqwest transport.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the credentials are not valid header
    /// values or the base URL cannot carry endpoint paths.
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        Self::with_http_client(config, ReqwestClient::new())
    }
}

impl<H: HttpClient> Client<H> {
    /// Creates a client with an injected HTTP transport.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the credentials are not valid header
    /// values or the base URL cannot carry endpoint paths.
    pub fn with_http_client(config: Config, http: H) -> Result<Self, ConfigError> {
        let sdk_headers = build_sdk_headers(&config)?;

        let base_url = match config.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL).map_err(|e| ConfigError::InvalidBaseUrl {
                url: DEFAULT_BASE_URL.to_string(),
                reason: e.to_string(),
            })?,
        };

        let add_order_url = endpoint_url(&base_url, SDK_ADD_ORDER_PATH)?;

        Ok(Self {
            http,
            client_id: config.client_id,
            access_token: config.access_token,
            base_url,
            add_order_url,
            sdk_headers,
        })
    }

    /// Returns the configured base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the configured client ID.
    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Adds a product to inventory.
    ///
    /// Validates locally, then POSTs the product (with credentials merged
    /// into the body) to the SDK ingestion endpoint. A 2xx response returns
    /// `()`; any other outcome surfaces as-is.
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] if the payload is rejected before dispatch
    /// (no request is issued), [`Error::Transport`] if the request fails or
    /// the server answers non-2xx.
    pub async fn add_product(&self, product: &Product) -> Result<(), Error> {
        validate::validate_product(product)?;

        tracing::debug!(url = %self.add_order_url, sku = %product.sku, "Submitting product");
        self.post_sdk(product).await
    }

    /// Adds an order record.
    ///
    /// Validates locally, then POSTs the order (with credentials merged into
    /// the body) to the SDK ingestion endpoint.
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] if the payload is rejected before dispatch
    /// (no request is issued), [`Error::Transport`] if the request fails or
    /// the server answers non-2xx.
    pub async fn add_order(&self, order: &Order) -> Result<(), Error> {
        validate::validate_order(order)?;

        tracing::debug!(
            url = %self.add_order_url,
            order_number = %order.order_number,
            "Submitting order"
        );
        self.post_sdk(order).await
    }

    /// Forwards a webhook message directly to a caller-supplied URL.
    ///
    /// No credential headers and no base-URL prefixing: the payload is
    /// POSTed exactly as given with only a JSON content-type header, and the
    /// response body is deserialized into a [`WebhookResponse`].
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] if the payload is rejected before dispatch
    /// (no request is issued), [`Error::Transport`] if the request fails,
    /// the server answers non-2xx, or the response body does not parse.
    pub async fn forward_webhook(
        &self,
        url: &Url,
        payload: &Webhook,
    ) -> Result<WebhookResponse, Error> {
        validate::validate_webhook(payload)?;

        tracing::debug!(url = %url, embeds = payload.embeds.len(), "Forwarding webhook");

        let request = HttpRequest::post(url.clone())
            .with_header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .with_json_body(payload)?;

        let response = self.http.request(request).await?;
        if !response.is_success() {
            return Err(status_error(&response).into());
        }

        Ok(response.json::<WebhookResponse>()?)
    }

    /// POSTs an SDK payload wrapped in the credential envelope.
    async fn post_sdk<T: Serialize + Sync>(&self, payload: &T) -> Result<(), Error> {
        let envelope = SdkEnvelope {
            client_id: &self.client_id,
            access_token: &self.access_token,
            payload,
        };

        let request = HttpRequest::post(self.add_order_url.clone())
            .with_headers(&self.sdk_headers)
            .with_json_body(&envelope)?;

        let response = self.http.request(request).await?;
        if !response.is_success() {
            return Err(status_error(&response).into());
        }

        Ok(())
    }
}

/// Request body wrapper for SDK submissions: credentials merged with the
/// payload's own fields, as the backend expects (credentials appear in both
/// headers and body).
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SdkEnvelope<'a, T: Serialize> {
    client_id: &'a str,
    access_token: &'a str,
    #[serde(flatten)]
    payload: &'a T,
}

/// Appends an endpoint path to the base URL, preserving any path prefix the
/// base carries (so `https://host/api` + `/sdk/add-order` gives
/// `https://host/api/sdk/add-order`, not a root-resolved path).
fn endpoint_url(base: &Url, path: &str) -> Result<Url, ConfigError> {
    if base.cannot_be_a_base() {
        return Err(ConfigError::InvalidBaseUrl {
            url: base.to_string(),
            reason: "URL cannot carry endpoint paths".to_string(),
        });
    }

    let joined = format!(
        "{}/{}",
        base.as_str().trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    Url::parse(&joined).map_err(|e| ConfigError::InvalidBaseUrl {
        url: base.to_string(),
        reason: e.to_string(),
    })
}

/// Builds the static header set for SDK calls.
fn build_sdk_headers(config: &Config) -> Result<HeaderMap, ConfigError> {
    let client_id =
        HeaderValue::from_str(&config.client_id).map_err(|e| ConfigError::InvalidClientId {
            reason: e.to_string(),
        })?;

    let mut access_token = HeaderValue::from_str(&config.access_token).map_err(|e| {
        ConfigError::InvalidAccessToken {
            reason: e.to_string(),
        }
    })?;
    access_token.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(HEADER_CLIENT_ID, client_id);
    headers.insert(HEADER_ACCESS_TOKEN, access_token);
    Ok(headers)
}

/// Converts a non-2xx response into a pass-through status error.
fn status_error(response: &HttpResponse) -> TransportError {
    TransportError::Status {
        status: response.status,
        body: response.body_text().map(ToString::to_string),
    }
}
