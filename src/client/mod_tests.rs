//! Tests for client construction and dispatch.

use super::{Client, Error};
use crate::config::{Config, ConfigError, DEFAULT_BASE_URL};
use crate::payload::{Embed, Field, Order, Product, Webhook};
use crate::transport::{HttpClient, HttpRequest, HttpResponse, TransportError};
use crate::validate::ValidationError;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Mock HTTP client that returns a configurable sequence of responses.
#[derive(Debug)]
struct MockClient {
    responses: std::sync::Mutex<Vec<Result<HttpResponse, TransportError>>>,
    requests: std::sync::Mutex<Vec<HttpRequest>>,
    call_count: AtomicUsize,
}

impl MockClient {
    fn new(responses: Vec<Result<HttpResponse, TransportError>>) -> Self {
        Self {
            responses: std::sync::Mutex::new(responses),
            requests: std::sync::Mutex::new(Vec::new()),
            call_count: AtomicUsize::new(0),
        }
    }

    fn success() -> Self {
        Self::with_status(http::StatusCode::OK, b"{}".to_vec())
    }

    fn with_status(status: http::StatusCode, body: Vec<u8>) -> Self {
        Self::new(vec![Ok(HttpResponse::new(
            status,
            http::HeaderMap::new(),
            body,
        ))])
    }

    fn calls(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    fn captured_requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl HttpClient for MockClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(req);
        self.responses.lock().unwrap().remove(0)
    }
}

impl HttpClient for Arc<MockClient> {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).request(req).await
    }
}

fn test_config() -> Config {
    Config::new("cid-123", "tok-456")
}

fn test_client(mock: Arc<MockClient>) -> Client<Arc<MockClient>> {
    Client::with_http_client(test_config(), mock).unwrap()
}

fn body_json(request: &HttpRequest) -> serde_json::Value {
    serde_json::from_slice(request.body.as_deref().unwrap()).unwrap()
}

fn webhook_url() -> url::Url {
    url::Url::parse("https://hooks.example.com/api/webhooks/abc123").unwrap()
}

mod construction {
    use super::*;

    #[test]
    fn defaults_to_production_base_url() {
        let client = test_client(Arc::new(MockClient::success()));

        assert_eq!(client.base_url().as_str(), "https://www.lunartools.co/");
        assert_eq!(client.client_id(), "cid-123");
    }

    #[test]
    fn base_url_override_is_used() {
        let base = url::Url::parse("https://staging.lunartools.co").unwrap();
        let config = test_config().with_base_url(base);
        let client = Client::with_http_client(config, Arc::new(MockClient::success())).unwrap();

        assert_eq!(client.base_url().host_str(), Some("staging.lunartools.co"));
    }

    #[tokio::test]
    async fn base_url_path_prefix_is_preserved_at_dispatch() {
        let base = url::Url::parse("https://www.lunartools.co/api").unwrap();
        let mock = Arc::new(MockClient::success());
        let client =
            Client::with_http_client(test_config().with_base_url(base), mock.clone()).unwrap();

        client
            .add_product(&Product::new("Shoe", "SKU1", 5.0))
            .await
            .unwrap();

        assert_eq!(
            mock.captured_requests()[0].url.as_str(),
            "https://www.lunartools.co/api/sdk/add-order"
        );
    }

    #[tokio::test]
    async fn trailing_slash_on_base_url_does_not_double_up() {
        let base = url::Url::parse("https://staging.lunartools.co/api/").unwrap();
        let mock = Arc::new(MockClient::success());
        let client =
            Client::with_http_client(test_config().with_base_url(base), mock.clone()).unwrap();

        client
            .add_order(&Order::new("Order1", "shipped", "ON-42"))
            .await
            .unwrap();

        assert_eq!(
            mock.captured_requests()[0].url.as_str(),
            "https://staging.lunartools.co/api/sdk/add-order"
        );
    }

    #[test]
    fn default_base_url_constant_parses() {
        assert!(url::Url::parse(DEFAULT_BASE_URL).is_ok());
    }

    #[test]
    fn client_id_with_newline_is_rejected() {
        let config = Config::new("cid\nwith-newline", "tok");
        let result = Client::with_http_client(config, MockClient::success());

        assert!(matches!(result, Err(ConfigError::InvalidClientId { .. })));
    }

    #[test]
    fn access_token_with_control_char_is_rejected() {
        let config = Config::new("cid", "tok\r");
        let result = Client::with_http_client(config, MockClient::success());

        assert!(matches!(result, Err(ConfigError::InvalidAccessToken { .. })));
    }

    #[test]
    fn cannot_be_a_base_url_is_rejected() {
        let config = test_config().with_base_url(url::Url::parse("mailto:a@b.co").unwrap());
        let result = Client::with_http_client(config, MockClient::success());

        assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Client<MockClient>>();
    }
}

mod add_product {
    use super::*;

    #[tokio::test]
    async fn posts_once_to_add_order_path() {
        let mock = Arc::new(MockClient::success());
        let client = test_client(mock.clone());

        client
            .add_product(&Product::new("Shoe", "SKU1", 5.0))
            .await
            .unwrap();

        let requests = mock.captured_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, http::Method::POST);
        assert_eq!(
            requests[0].url.as_str(),
            "https://www.lunartools.co/sdk/add-order"
        );
    }

    #[tokio::test]
    async fn body_merges_credentials_and_product_fields() {
        let mock = Arc::new(MockClient::success());
        let client = test_client(mock.clone());

        client
            .add_product(&Product::new("Shoe", "SKU1", 5.0))
            .await
            .unwrap();

        let body = body_json(&mock.captured_requests()[0]);
        assert_eq!(body["clientId"], "cid-123");
        assert_eq!(body["accessToken"], "tok-456");
        assert_eq!(body["name"], "Shoe");
        assert_eq!(body["sku"], "SKU1");
        assert_eq!(body["qty"], 5.0);
    }

    #[tokio::test]
    async fn sends_credential_headers() {
        let mock = Arc::new(MockClient::success());
        let client = test_client(mock.clone());

        client
            .add_product(&Product::new("Shoe", "SKU1", 5.0))
            .await
            .unwrap();

        let headers = &mock.captured_requests()[0].headers;
        assert_eq!(headers.get("x-client-id").unwrap(), "cid-123");
        assert_eq!(headers.get("x-access-token").unwrap(), "tok-456");
        assert_eq!(
            headers.get(http::header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[tokio::test]
    async fn invalid_product_makes_no_network_call() {
        let mock = Arc::new(MockClient::success());
        let client = test_client(mock.clone());

        let result = client.add_product(&Product::new("", "SKU1", 5.0)).await;

        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::ProductNameRequired))
        ));
        assert_eq!(mock.calls(), 0);
    }

    #[tokio::test]
    async fn non_2xx_surfaces_status_and_body() {
        let mock = Arc::new(MockClient::with_status(
            http::StatusCode::FORBIDDEN,
            b"bad credentials".to_vec(),
        ));
        let client = test_client(mock);

        let result = client.add_product(&Product::new("Shoe", "SKU1", 5.0)).await;

        match result {
            Err(Error::Transport(TransportError::Status { status, body })) => {
                assert_eq!(status, http::StatusCode::FORBIDDEN);
                assert_eq!(body.as_deref(), Some("bad credentials"));
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn connection_error_propagates_without_retry() {
        let mock = Arc::new(MockClient::new(vec![Err(TransportError::Timeout)]));
        let client = test_client(mock.clone());

        let result = client.add_product(&Product::new("Shoe", "SKU1", 5.0)).await;

        assert!(matches!(
            result,
            Err(Error::Transport(TransportError::Timeout))
        ));
        assert_eq!(mock.calls(), 1);
    }
}

mod add_order {
    use super::*;

    #[tokio::test]
    async fn posts_to_the_same_ingestion_path_as_products() {
        let mock = Arc::new(MockClient::success());
        let client = test_client(mock.clone());

        client
            .add_order(&Order::new("Order1", "shipped", "ON-42"))
            .await
            .unwrap();

        let requests = mock.captured_requests();
        assert_eq!(requests[0].url.path(), "/sdk/add-order");
    }

    #[tokio::test]
    async fn body_merges_credentials_and_order_fields() {
        let mock = Arc::new(MockClient::success());
        let client = test_client(mock.clone());

        client
            .add_order(
                &Order::new("Order1", "shipped", "ON-42").with_retailer("Footlocker"),
            )
            .await
            .unwrap();

        let body = body_json(&mock.captured_requests()[0]);
        assert_eq!(body["clientId"], "cid-123");
        assert_eq!(body["orderNumber"], "ON-42");
        assert_eq!(body["retailer"], "Footlocker");
    }

    #[tokio::test]
    async fn blank_order_number_fails_before_dispatch() {
        let mock = Arc::new(MockClient::success());
        let client = test_client(mock.clone());

        let result = client.add_order(&Order::new("Order1", "shipped", "")).await;

        match result {
            Err(Error::Validation(e)) => {
                assert_eq!(e, ValidationError::OrderNumberRequired);
                assert_eq!(e.to_string(), "Order number is required");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
        assert_eq!(mock.calls(), 0);
    }
}

mod forward_webhook {
    use super::*;

    fn queued_response() -> MockClient {
        MockClient::with_status(
            http::StatusCode::OK,
            br#"{"status":"queued","queueLength":2}"#.to_vec(),
        )
    }

    #[tokio::test]
    async fn posts_payload_to_caller_url() {
        let mock = Arc::new(queued_response());
        let client = test_client(mock.clone());
        let payload = Webhook::default().with_content("hi");

        client.forward_webhook(&webhook_url(), &payload).await.unwrap();

        let requests = mock.captured_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, webhook_url());
    }

    #[tokio::test]
    async fn returns_parsed_webhook_response() {
        let mock = Arc::new(queued_response());
        let client = test_client(mock);
        let payload = Webhook::default().with_content("hi");

        let response = client.forward_webhook(&webhook_url(), &payload).await.unwrap();

        assert_eq!(response.status, "queued");
        assert_eq!(response.queue_length, 2);
    }

    #[tokio::test]
    async fn sends_only_content_type_header() {
        let mock = Arc::new(queued_response());
        let client = test_client(mock.clone());
        let payload = Webhook::default().with_content("hi");

        client.forward_webhook(&webhook_url(), &payload).await.unwrap();

        let headers = &mock.captured_requests()[0].headers;
        assert_eq!(headers.len(), 1);
        assert_eq!(
            headers.get(http::header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert!(headers.get("x-client-id").is_none());
        assert!(headers.get("x-access-token").is_none());
    }

    #[tokio::test]
    async fn body_has_no_credential_fields() {
        let mock = Arc::new(queued_response());
        let client = test_client(mock.clone());
        let payload = Webhook::default()
            .with_content("hi")
            .with_embed(Embed::default().with_field(Field::new("Qty", "5")));

        client.forward_webhook(&webhook_url(), &payload).await.unwrap();

        let body = body_json(&mock.captured_requests()[0]);
        assert!(body.get("clientId").is_none());
        assert!(body.get("accessToken").is_none());
        assert_eq!(body["content"], "hi");
        assert_eq!(body["embeds"][0]["fields"][0]["name"], "Qty");
    }

    #[tokio::test]
    async fn empty_payload_makes_no_network_call() {
        let mock = Arc::new(MockClient::success());
        let client = test_client(mock.clone());
        let payload = Webhook::default().with_content("");

        let result = client.forward_webhook(&webhook_url(), &payload).await;

        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::EmptyWebhook))
        ));
        assert_eq!(mock.calls(), 0);
    }

    #[tokio::test]
    async fn eleven_embeds_make_no_network_call() {
        let mock = Arc::new(MockClient::success());
        let client = test_client(mock.clone());
        let embeds = (0..11).map(|_| Embed::default().with_title("t")).collect();
        let payload = Webhook::default().with_embeds(embeds);

        let result = client.forward_webhook(&webhook_url(), &payload).await;

        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::TooManyEmbeds { count: 11 }))
        ));
        assert_eq!(mock.calls(), 0);
    }

    #[tokio::test]
    async fn non_2xx_surfaces_as_status_error() {
        let mock = Arc::new(MockClient::with_status(
            http::StatusCode::NOT_FOUND,
            b"unknown webhook".to_vec(),
        ));
        let client = test_client(mock);
        let payload = Webhook::default().with_content("hi");

        let result = client.forward_webhook(&webhook_url(), &payload).await;

        match result {
            Err(Error::Transport(TransportError::Status { status, body })) => {
                assert_eq!(status, http::StatusCode::NOT_FOUND);
                assert_eq!(body.as_deref(), Some("unknown webhook"));
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unparseable_response_body_is_a_transport_error() {
        let mock = Arc::new(MockClient::with_status(
            http::StatusCode::OK,
            b"not json".to_vec(),
        ));
        let client = test_client(mock);
        let payload = Webhook::default().with_content("hi");

        let result = client.forward_webhook(&webhook_url(), &payload).await;

        assert!(matches!(
            result,
            Err(Error::Transport(TransportError::Json(_)))
        ));
    }
}

mod concurrent_reuse {
    use super::*;

    #[tokio::test]
    async fn one_client_serves_many_independent_calls() {
        let responses = (0..4)
            .map(|_| {
                Ok(HttpResponse::new(
                    http::StatusCode::OK,
                    http::HeaderMap::new(),
                    b"{}".to_vec(),
                ))
            })
            .collect();
        let mock = Arc::new(MockClient::new(responses));
        let client = Arc::new(test_client(mock.clone()));

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let client = client.clone();
                tokio::spawn(async move {
                    client
                        .add_product(&Product::new(format!("P{i}"), format!("SKU{i}"), 1.0))
                        .await
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }
        assert_eq!(mock.calls(), 4);
    }
}
