//! Query state
//!
//! The passive input to compilation. Every component is optional; absence
//! means "not set", which is different from an empty value.

use crate::component::Component;
use crate::errors::QueryStateError;
use crate::JsonMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::fmt;

/// Identifier accepted by the `ids` component.
///
/// Numeric ids keep the JSON number as given, so ids past `i64::MAX` and
/// fractional ids are rendered unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    Number(Number),
    Str(String),
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Number(id) => write!(f, "{}", id),
            Identifier::Str(id) => f.write_str(id),
        }
    }
}

impl From<Number> for Identifier {
    fn from(id: Number) -> Self {
        Identifier::Number(id)
    }
}

impl From<i64> for Identifier {
    fn from(id: i64) -> Self {
        Identifier::Number(id.into())
    }
}

impl From<i32> for Identifier {
    fn from(id: i32) -> Self {
        Identifier::Number(id.into())
    }
}

impl From<u64> for Identifier {
    fn from(id: u64) -> Self {
        Identifier::Number(id.into())
    }
}

impl From<u32> for Identifier {
    fn from(id: u32) -> Self {
        Identifier::Number(id.into())
    }
}

impl From<&str> for Identifier {
    fn from(id: &str) -> Self {
        Identifier::Str(id.to_string())
    }
}

impl From<String> for Identifier {
    fn from(id: String) -> Self {
        Identifier::Str(id)
    }
}

/// Accumulated query description handed to a grammar
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryState {
    /// Filter description in whatever shape the target grammar understands.
    /// The base grammar ignores it.
    pub wheres: Option<Value>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
    pub page: Option<u64>,
    pub orders: Option<Value>,
    pub ids: Option<Vec<Identifier>>,
    pub columns: Option<Vec<String>>,
    pub include: Option<Vec<String>>,
    pub search_text: Option<String>,
    pub aggregation_parameters: Option<JsonMap>,
    pub raw_query: Option<JsonMap>,
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the component carries a value. Emptiness is judged later by the
    /// component's own rule, so `Some(vec![])` counts as present here.
    pub fn has(&self, component: Component) -> bool {
        match component {
            Component::Wheres => self.wheres.is_some(),
            Component::Limit => self.limit.is_some(),
            Component::Offset => self.offset.is_some(),
            Component::Page => self.page.is_some(),
            Component::Orders => self.orders.is_some(),
            Component::Ids => self.ids.is_some(),
            Component::Columns => self.columns.is_some(),
            Component::Include => self.include.is_some(),
            Component::SearchText => self.search_text.is_some(),
            Component::AggregationParameters => self.aggregation_parameters.is_some(),
            Component::RawQuery => self.raw_query.is_some(),
        }
    }

    /// Components that carry a value, in evaluation order
    pub fn present_components(&self) -> Vec<Component> {
        Component::ORDERED
            .iter()
            .copied()
            .filter(|component| self.has(*component))
            .collect()
    }

    /// Read a query state from an untyped JSON object.
    ///
    /// Each component is read on its own so a malformed value is reported with
    /// the name of the component it belongs to. `null` counts as absent and
    /// unknown keys are ignored. `wheres` and `orders` are taken as-is.
    pub fn from_value(value: Value) -> Result<Self, QueryStateError> {
        let mut object = match value {
            Value::Object(object) => object,
            other => return Err(QueryStateError::NotAnObject(json_kind(&other))),
        };

        let mut state = QueryState::new();
        for component in Component::ORDERED {
            let Some(raw) = object.remove(component.as_str()) else {
                continue;
            };
            if raw.is_null() {
                continue;
            }

            match component {
                Component::Wheres => state.wheres = Some(raw),
                Component::Limit => state.limit = Some(read(component, raw)?),
                Component::Offset => state.offset = Some(read(component, raw)?),
                Component::Page => state.page = Some(read(component, raw)?),
                Component::Orders => state.orders = Some(raw),
                Component::Ids => state.ids = Some(read(component, raw)?),
                Component::Columns => state.columns = Some(read(component, raw)?),
                Component::Include => state.include = Some(read(component, raw)?),
                Component::SearchText => state.search_text = Some(read(component, raw)?),
                Component::AggregationParameters => {
                    state.aggregation_parameters = Some(read(component, raw)?)
                }
                Component::RawQuery => state.raw_query = Some(read(component, raw)?),
            }
        }

        if !object.is_empty() {
            trace_log!(
                "Ignoring unknown query components: {:?}",
                object.keys().collect::<Vec<_>>()
            );
        }

        Ok(state)
    }
}

fn read<T: DeserializeOwned>(component: Component, raw: Value) -> Result<T, QueryStateError> {
    serde_json::from_value(raw)
        .map_err(|source| QueryStateError::ComponentType { component, source })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
