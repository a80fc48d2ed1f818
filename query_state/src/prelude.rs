//! Convenience re-exports for common query-state usage

pub use crate::builder::QueryBuilder;
pub use crate::component::Component;
pub use crate::errors::QueryStateError;
pub use crate::ordering::SortOrder;
pub use crate::state::{Identifier, QueryState};
pub use crate::JsonMap;

pub use serde_json::{json, Value};
