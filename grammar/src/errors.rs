use query_state::{Component, QueryStateError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GrammarError {
    #[error("Invalid query: {0}")]
    InvalidQuery(QueryStateError),

    #[error("Invalid value for component '{component}': {message}")]
    ComponentType {
        component: Component,
        message: String,
    },
}

/// A malformed component read from untyped input is reported the same way as
/// one rejected by a rule.
impl From<QueryStateError> for GrammarError {
    fn from(err: QueryStateError) -> Self {
        match err {
            QueryStateError::ComponentType { component, source } => GrammarError::ComponentType {
                component,
                message: source.to_string(),
            },
            other => GrammarError::InvalidQuery(other),
        }
    }
}
