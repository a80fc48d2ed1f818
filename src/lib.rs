//! # QueryWire
//!
//! Compile chainable query descriptions into the flat parameter sets expected
//! by remote HTTP and search APIs, and send them through a normalizing
//! transport adapter.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use querywire::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig {
//!         client: ClientConfig::new("https://api.example.com/v1".to_string()),
//!     };
//!     let api = ApiConsumer::from_config(config)?;
//!
//!     let query = QueryBuilder::new()
//!         .select(["id", "title"])
//!         .search("water lilies")
//!         .limit(10)
//!         .build();
//!
//!     // {"limit": 10, "size": 10, "fields": "id,title", "q": "water lilies"}
//!     let parameters = api.compile(&query)?;
//!     println!("{}", serde_json::Value::Object(parameters));
//!
//!     let response = api.get("artworks/search", &query).await?;
//!     println!("{} {:?}", response.status, response.body);
//!
//!     Ok(())
//! }
//! ```

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod core;
pub mod errors;
pub mod prelude;

// Re-export the main public types for convenience
pub use core::ApiConsumer;
pub use errors::QueryWireError;

// Re-export centralized config
pub use config::{AppConfig, ClientConfig};

// Re-export internal crates used in the public API
pub use config;
pub use consumer;
pub use grammar;
pub use query_state;

// Re-export external dependencies used in public API
pub use async_trait;
pub use reqwest;
