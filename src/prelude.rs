//! Convenience re-exports for common QueryWire usage
//!
//! # Example
//!
//! ```rust
//! use querywire::prelude::*;
//!
//! let query = QueryBuilder::new().page(2).build();
//! let parameters = BaseGrammar::new().compile(&query).unwrap();
//! assert_eq!(parameters["page"], 2);
//! ```

// Core QueryWire components
pub use crate::core::ApiConsumer;
pub use crate::errors::QueryWireError;

// Re-export centralized config
pub use config::{AppConfig, ClientConfig};

// Query description
pub use query_state::prelude::*;

// Compilation
pub use grammar::{BaseGrammar, CompiledParameters, Grammar, GrammarError};

// Transport
pub use consumer::prelude::*;

// Common external dependencies
pub use async_trait;
pub use serde_json;
pub use tokio;
