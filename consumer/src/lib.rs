//! Consumer - HTTP transport adapter for QueryWire
//!
//! This crate wraps an HTTP client behind the [`Consumer`] capability: it
//! adapts compiled parameters into request options, issues the request, and
//! normalizes the reply into an [`ApiResponse`] `{ body, status }` envelope.
//! Operations the adapter does not formalize are forwarded to the underlying
//! client through [`Consumer::call`].

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

pub mod client;
pub mod core;
pub mod errors;
pub mod options;
pub mod prelude;
pub mod response;

// Re-export the main public types for convenience
pub use client::{HttpClient, RawResponse, ReqwestClient};
pub use core::{Consumer, HttpConsumer};
pub use errors::ConsumerError;
pub use options::RequestOptions;
pub use response::ApiResponse;

pub use config::ClientConfig;
pub use reqwest::Method;

/// Parameter mapping handed to the adapter
pub type Parameters = serde_json::Map<String, serde_json::Value>;
