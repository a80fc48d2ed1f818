//! Per-component compilation rules
//!
//! Pure functions from a component value to the partial parameter mapping it
//! contributes. The [`Grammar`](crate::Grammar) default methods delegate here.

use crate::CompiledParameters;
use query_state::{Identifier, JsonMap};
use serde_json::Value;
use std::fmt::Display;

/// Join a sequence with commas into a single parameter value
pub fn join<T: Display>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Emit `key` with the comma-joined values, or nothing for an empty sequence
pub fn joined<T: Display>(key: &str, values: &[T]) -> CompiledParameters {
    let mut parameters = CompiledParameters::new();
    if !values.is_empty() {
        parameters.insert(key.to_string(), Value::String(join(values)));
    }
    parameters
}

/// Emit the same value under both a conventional name and its search-engine alias
pub fn aliased(key: &str, alias: &str, value: u64) -> CompiledParameters {
    let mut parameters = CompiledParameters::new();
    parameters.insert(key.to_string(), Value::from(value));
    parameters.insert(alias.to_string(), Value::from(value));
    parameters
}

pub fn single(key: &str, value: Value) -> CompiledParameters {
    let mut parameters = CompiledParameters::new();
    parameters.insert(key.to_string(), value);
    parameters
}

/// Whether a string counts as unset: empty or the single character `"0"`
pub fn is_blank_text(text: &str) -> bool {
    text.is_empty() || text == "0"
}

/// Whether an opaque value counts as unset. Zero, `false`, `""`, `"0"` and
/// empty collections all do.
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => is_blank_text(text),
        Value::Array(items) => items.is_empty(),
        Value::Object(entries) => entries.is_empty(),
    }
}

pub fn columns(columns: &[String]) -> CompiledParameters {
    joined("fields", columns)
}

pub fn include(relations: &[String]) -> CompiledParameters {
    joined("include", relations)
}

pub fn ids(ids: &[Identifier]) -> CompiledParameters {
    joined("ids", ids)
}

pub fn search_text(text: &str) -> CompiledParameters {
    if is_blank_text(text) {
        CompiledParameters::new()
    } else {
        single("q", Value::String(text.to_string()))
    }
}

pub fn raw_query(raw: &JsonMap) -> CompiledParameters {
    raw.clone()
}

pub fn aggregation_parameters(aggregations: &JsonMap) -> CompiledParameters {
    if aggregations.is_empty() {
        CompiledParameters::new()
    } else {
        single("aggregations", Value::Object(aggregations.clone()))
    }
}

pub fn orders(orders: &Value) -> CompiledParameters {
    if is_blank(orders) {
        CompiledParameters::new()
    } else {
        single("sort", orders.clone())
    }
}

/// `size` is the Elasticsearch spelling of `limit`
pub fn limit(limit: u64) -> CompiledParameters {
    aliased("limit", "size", limit)
}

/// `from` is the Elasticsearch spelling of `offset`
pub fn offset(offset: u64) -> CompiledParameters {
    aliased("offset", "from", offset)
}

pub fn page(page: u64) -> CompiledParameters {
    single("page", Value::from(page))
}
