//! Request options
//!
//! Options attached to a single request. Adapter methods each return a
//! partial set that the caller merges before issuing the call.

use crate::Parameters;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestOptions {
    pub headers: BTreeMap<String, String>,
    /// Query-string parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<Parameters>,
    /// Pre-serialized request body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Body serialized as JSON by the client
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_query(mut self, query: Parameters) -> Self {
        self.query = Some(query);
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_json(mut self, json: Value) -> Self {
        self.json = Some(json);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = Some(u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX));
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    /// Merge `other` into these options. Headers and query parameters are
    /// merged key by key; every other option set in `other` replaces ours.
    pub fn merge(mut self, other: RequestOptions) -> Self {
        self.headers.extend(other.headers);

        if let Some(query) = other.query {
            match self.query.as_mut() {
                Some(existing) => existing.extend(query),
                None => self.query = Some(query),
            }
        }
        if other.body.is_some() {
            self.body = other.body;
        }
        if other.json.is_some() {
            self.json = other.json;
        }
        if other.timeout_ms.is_some() {
            self.timeout_ms = other.timeout_ms;
        }

        self
    }

    /// Query parameters flattened to string pairs. Nested values are sent as JSON.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.query
            .iter()
            .flatten()
            .map(|(key, value)| (key.clone(), query_value(value)))
            .collect()
    }
}

fn query_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
