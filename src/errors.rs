//! Error types for the QueryWire crate
//!
//! This module contains all error types that can be returned by QueryWire operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum QueryWireError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Compilation error: {0}")]
    Grammar(#[from] grammar::GrammarError),

    #[error("Transport error: {0}")]
    Consumer(#[from] consumer::ConsumerError),
}
