//! Transport adapter
//!
//! [`Consumer`] is the capability higher layers use: issue a request and get a
//! normalized `{ body, status }` back, adapt compiled parameters into request
//! options, and reach any other client operation through [`Consumer::call`].

use crate::client::{HttpClient, ReqwestClient};
use crate::errors::ConsumerError;
use crate::options::RequestOptions;
use crate::response::ApiResponse;
use crate::Parameters;
use async_trait::async_trait;
use config::ClientConfig;
use reqwest::Method;
use serde_json::Value;
use std::collections::BTreeMap;

#[async_trait]
pub trait Consumer: Send + Sync {
    /// Issue a request and decode the reply. Non-2xx statuses are not errors.
    async fn request(
        &self,
        method: Method,
        uri: &str,
        options: RequestOptions,
    ) -> Result<ApiResponse, ConsumerError>;

    /// Turn compiled parameters into request options. The default sends them
    /// as a JSON body; backends expecting another format override this.
    fn adapt_parameters(&self, params: &Parameters) -> Result<RequestOptions, ConsumerError> {
        let body = serde_json::to_string(params)?;
        Ok(RequestOptions::new().with_body(body))
    }

    /// Headers requested through the `headers` entry of the parameters
    fn headers(&self, params: &Parameters) -> RequestOptions {
        let mut headers = BTreeMap::new();

        if let Some(Value::Object(entries)) = params.get("headers") {
            for (name, value) in entries {
                let value = match value {
                    Value::String(text) => text.clone(),
                    other => other.to_string(),
                };
                headers.insert(name.clone(), value);
            }
        }

        RequestOptions {
            headers,
            ..RequestOptions::default()
        }
    }

    /// Forward any other operation to the underlying client unchanged
    async fn call(&self, operation: &str, args: Vec<Value>) -> Result<Value, ConsumerError>;
}

/// Adapter over any [`HttpClient`]
#[derive(Debug, Clone)]
pub struct HttpConsumer<C = ReqwestClient> {
    client: C,
}

impl HttpConsumer<ReqwestClient> {
    /// Create an adapter over a `reqwest` client built from `config`
    pub fn from_config(config: ClientConfig) -> Result<Self, ConsumerError> {
        Ok(Self::new(ReqwestClient::new(config)?))
    }
}

impl<C: HttpClient> HttpConsumer<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// The wrapped client, for operations better called directly
    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn into_client(self) -> C {
        self.client
    }
}

#[async_trait]
impl<C: HttpClient> Consumer for HttpConsumer<C> {
    async fn request(
        &self,
        method: Method,
        uri: &str,
        options: RequestOptions,
    ) -> Result<ApiResponse, ConsumerError> {
        let response = self.client.send(method, uri, &options).await?;
        Ok(ApiResponse::from_bytes(response.status, &response.body))
    }

    async fn call(&self, operation: &str, args: Vec<Value>) -> Result<Value, ConsumerError> {
        debug_log!("Forwarding operation '{}' to the HTTP client", operation);
        self.client.call(operation, args).await
    }
}
