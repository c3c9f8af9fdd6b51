//! Payload types accepted by the Lunartools backend and webhook endpoints.
//!
//! All types serialize to camelCase JSON with absent optional fields omitted,
//! matching the wire format the backend expects. Values are immutable once
//! constructed; each is passed into exactly one dispatch call.

mod message;
mod order;
mod product;


pub use message::{Author, Embed, Field, Footer, Image, Thumbnail, Webhook, WebhookResponse};
pub use order::Order;
pub use product::Product;
