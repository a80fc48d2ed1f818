//! Grammar - Component-based query compilation for QueryWire
//!
//! A grammar walks the fixed list of query components in order, applies the
//! rule for every component the query carries, and merges the partial results
//! into the flat parameter mapping sent to the remote API. Later components
//! overwrite earlier ones on key collisions, so `rawQuery` has the final word.
//!
//! ```rust
//! use grammar::{BaseGrammar, Grammar};
//! use query_state::QueryBuilder;
//!
//! let query = QueryBuilder::new().select(["id", "title"]).limit(10).build();
//! let parameters = BaseGrammar::new().compile(&query)?;
//!
//! assert_eq!(parameters["fields"], "id,title");
//! assert_eq!(parameters["size"], 10);
//! # Ok::<(), grammar::GrammarError>(())
//! ```

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

#[cfg(feature = "debug-logging")]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod base;
pub mod errors;
pub mod rules;


pub use base::{BaseGrammar, Grammar};
pub use errors::GrammarError;

/// Flat parameter mapping produced by a grammar, in insertion order
pub type CompiledParameters = serde_json::Map<String, serde_json::Value>;
