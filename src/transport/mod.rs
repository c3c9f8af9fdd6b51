//! HTTP transport layer.
//!
//! Value types for requests and responses, the [`HttpClient`] trait that
//! dispatch code is generic over, and the production [`ReqwestClient`]
//! implementation. The transport performs exactly one attempt per request;
//! there is no retry, backoff, or response interpretation here.

mod client;
mod error;
mod http;


pub use client::ReqwestClient;
pub use error::TransportError;
pub use http::{HttpClient, HttpRequest, HttpResponse};
