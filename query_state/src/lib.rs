//! Query State - Passive query description for QueryWire
//!
//! This crate provides the data a grammar compiles: the [`QueryState`] with its
//! optional components, the closed [`Component`] enumeration with its fixed
//! evaluation order, and a chainable [`QueryBuilder`] that accumulates state.

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
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

pub mod builder;
pub mod component;
pub mod errors;
pub mod ordering;
pub mod prelude;
pub mod state;

#[cfg(test)]
mod tests;

pub use builder::QueryBuilder;
pub use component::Component;
pub use errors::QueryStateError;
pub use ordering::SortOrder;
pub use state::{Identifier, QueryState};

/// Mapping type used for aggregation parameters and raw query overrides
pub type JsonMap = serde_json::Map<String, serde_json::Value>;
