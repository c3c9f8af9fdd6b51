//! Lunartools client SDK.
//!
//! A thin client for validating and forwarding structured payloads to the
//! Lunartools backend (inventory products and order records) and to
//! Discord-style webhook URLs. Every payload is validated locally before any
//! network I/O; each public operation issues at most one HTTP POST.

pub mod client;
pub mod config;
pub mod payload;
pub mod transport;
pub mod validate;

pub use client::{Client, Error};
pub use config::{Config, ConfigError};
