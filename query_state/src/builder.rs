//! Query builder
//!
//! Chainable accumulation of a [`QueryState`].

use crate::ordering::SortOrder;
use crate::state::{Identifier, QueryState};
use crate::JsonMap;
use serde_json::Value;

/// Query builder for constructing API queries
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    state: QueryState,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the fields the API should return
    pub fn select<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.state.columns = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    /// Add one field to the current selection
    pub fn add_select(mut self, column: impl Into<String>) -> Self {
        self.state
            .columns
            .get_or_insert_with(Vec::new)
            .push(column.into());
        self
    }

    /// Eager-include related resources
    pub fn include<I, S>(mut self, relations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.state
            .include
            .get_or_insert_with(Vec::new)
            .extend(relations.into_iter().map(Into::into));
        self
    }

    /// Restrict the query to the given identifiers
    pub fn ids<I, T>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Identifier>,
    {
        self.state.ids = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    /// Append one filter clause to the `wheres` list
    pub fn where_clause(mut self, clause: Value) -> Self {
        match self.state.wheres.as_mut() {
            Some(Value::Array(clauses)) => clauses.push(clause),
            _ => self.state.wheres = Some(Value::Array(vec![clause])),
        }
        self
    }

    /// Replace the filter description with an arbitrary value
    pub fn wheres(mut self, wheres: Value) -> Self {
        self.state.wheres = Some(wheres);
        self
    }

    /// Append a sort entry of the form `{field: direction}`
    pub fn order_by(mut self, field: &str, order: SortOrder) -> Self {
        let mut entry = JsonMap::new();
        entry.insert(field.to_string(), Value::String(order.as_str().to_string()));

        match self.state.orders.as_mut() {
            Some(Value::Array(entries)) => entries.push(Value::Object(entry)),
            _ => self.state.orders = Some(Value::Array(vec![Value::Object(entry)])),
        }
        self
    }

    /// Replace the sort specification with an arbitrary value
    pub fn orders(mut self, orders: Value) -> Self {
        self.state.orders = Some(orders);
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.state.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.state.offset = Some(offset);
        self
    }

    pub fn page(mut self, page: u64) -> Self {
        self.state.page = Some(page);
        self
    }

    /// Request a page of `per_page` results
    pub fn for_page(self, page: u64, per_page: u64) -> Self {
        self.page(page).limit(per_page)
    }

    /// Free-text search
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.state.search_text = Some(text.into());
        self
    }

    /// Add a named aggregation
    pub fn aggregate(mut self, name: impl Into<String>, definition: Value) -> Self {
        self.state
            .aggregation_parameters
            .get_or_insert_with(JsonMap::new)
            .insert(name.into(), definition);
        self
    }

    /// Replace all aggregations
    pub fn aggregations(mut self, aggregations: JsonMap) -> Self {
        self.state.aggregation_parameters = Some(aggregations);
        self
    }

    /// Set one raw parameter, sent as-is and overriding derived parameters
    pub fn raw(mut self, key: impl Into<String>, value: Value) -> Self {
        self.state
            .raw_query
            .get_or_insert_with(JsonMap::new)
            .insert(key.into(), value);
        self
    }

    /// Merge raw parameters into the current raw query
    pub fn raw_query(mut self, parameters: JsonMap) -> Self {
        self.state
            .raw_query
            .get_or_insert_with(JsonMap::new)
            .extend(parameters);
        self
    }

    /// Borrow the accumulated state
    pub fn state(&self) -> &QueryState {
        &self.state
    }

    pub fn build(self) -> QueryState {
        self.state
    }
}

impl From<QueryBuilder> for QueryState {
    fn from(builder: QueryBuilder) -> Self {
        builder.build()
    }
}
