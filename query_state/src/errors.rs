use crate::component::Component;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QueryStateError {
    #[error("Query state must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("Invalid value for component '{component}': {source}")]
    ComponentType {
        component: Component,
        #[source]
        source: serde_json::Error,
    },
}
