//! Underlying HTTP clients
//!
//! [`HttpClient`] is the capability the adapter wraps: one method to send a
//! request and one generic escape hatch to invoke any other named operation.
//! [`ReqwestClient`] implements it on top of `reqwest`.

use crate::errors::ConsumerError;
use crate::options::RequestOptions;
use async_trait::async_trait;
use config::ClientConfig;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, Url};
use serde_json::{json, Value};
use std::collections::BTreeMap;

/// Response as received from the wire, before any decoding
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub headers: BTreeMap<String, String>,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// JSON view used when a raw response is returned through [`HttpClient::call`]
    pub fn to_value(&self) -> Value {
        json!({
            "status": self.status,
            "headers": self.headers,
            "body": self.text(),
        })
    }
}

#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Send one request
    async fn send(
        &self,
        method: Method,
        uri: &str,
        options: &RequestOptions,
    ) -> Result<RawResponse, ConsumerError>;

    /// Invoke a named operation of the client with untyped arguments
    async fn call(&self, operation: &str, _args: Vec<Value>) -> Result<Value, ConsumerError> {
        Err(ConsumerError::UnsupportedOperation(operation.to_string()))
    }
}

/// `reqwest`-backed client bound to a base URL
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    client: Client,
    config: ClientConfig,
}

impl ReqwestClient {
    /// Build a client with the timeouts, user agent and default headers from `config`
    pub fn new(config: ClientConfig) -> Result<Self, ConsumerError> {
        let default_headers = header_map(&config.default_headers)?;

        let mut builder = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .default_headers(default_headers);

        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }

        Ok(Self {
            client: builder.build()?,
            config,
        })
    }

    /// Wrap an already configured `reqwest::Client`
    pub fn from_client(client: Client, config: ClientConfig) -> Self {
        Self { client, config }
    }

    pub fn inner(&self) -> &Client {
        &self.client
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Resolve `uri` against the base URL. Absolute URIs are used as given.
    pub fn url(&self, uri: &str) -> Result<Url, ConsumerError> {
        let full = if uri.starts_with("http://") || uri.starts_with("https://") {
            uri.to_string()
        } else if uri.is_empty() {
            self.config.base_url.clone()
        } else {
            format!(
                "{}/{}",
                self.config.base_url.trim_end_matches('/'),
                uri.trim_start_matches('/')
            )
        };

        Url::parse(&full).map_err(|err| ConsumerError::InvalidUrl(format!("{}: {}", full, err)))
    }
}

/// Convert string headers, rejecting names or values HTTP cannot carry
fn header_map(headers: &BTreeMap<String, String>) -> Result<HeaderMap, ConsumerError> {
    let mut map = HeaderMap::new();
    for (name, value) in headers {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| ConsumerError::InvalidHeader(name.clone()))?;
        let header_value = HeaderValue::from_str(value)
            .map_err(|_| ConsumerError::InvalidHeader(format!("{}: {}", name, value)))?;
        map.insert(header_name, header_value);
    }
    Ok(map)
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn send(
        &self,
        method: Method,
        uri: &str,
        options: &RequestOptions,
    ) -> Result<RawResponse, ConsumerError> {
        let url = self.url(uri)?;
        let headers = header_map(&options.headers)?;
        debug_log!("{} {}", method, url);

        let mut request = self.client.request(method, url).headers(headers);

        let query = options.query_pairs();
        if !query.is_empty() {
            request = request.query(&query);
        }
        if let Some(json) = &options.json {
            request = request.json(json);
        }
        if let Some(body) = &options.body {
            request = request.body(body.clone());
        }
        if let Some(timeout) = options.timeout() {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();
        let body = response.bytes().await?.to_vec();

        debug_log!("Received status {} ({} bytes)", status, body.len());
        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }

    /// Named operations: `request` takes `[method, uri, options?]`; the verb
    /// shortcuts `get`, `post`, `put`, `patch`, `delete`, `head` and `options`
    /// take `[uri, options?]`; `base_url` takes nothing.
    async fn call(&self, operation: &str, args: Vec<Value>) -> Result<Value, ConsumerError> {
        let mut args = args.into_iter();

        let method = match operation {
            "base_url" => return Ok(Value::String(self.config.base_url.clone())),
            "request" => {
                let name = string_arg(operation, args.next(), "method")?;
                Method::from_bytes(name.to_uppercase().as_bytes()).map_err(|_| {
                    ConsumerError::InvalidArgument {
                        operation: operation.to_string(),
                        message: format!("unknown method '{}'", name),
                    }
                })?
            }
            "get" => Method::GET,
            "post" => Method::POST,
            "put" => Method::PUT,
            "patch" => Method::PATCH,
            "delete" => Method::DELETE,
            "head" => Method::HEAD,
            "options" => Method::OPTIONS,
            other => return Err(ConsumerError::UnsupportedOperation(other.to_string())),
        };

        let uri = string_arg(operation, args.next(), "uri")?;
        let options = match args.next() {
            None | Some(Value::Null) => RequestOptions::default(),
            Some(value) => serde_json::from_value(value).map_err(|err| {
                ConsumerError::InvalidArgument {
                    operation: operation.to_string(),
                    message: format!("invalid options: {}", err),
                }
            })?,
        };

        let response = self.send(method, &uri, &options).await?;
        Ok(response.to_value())
    }
}

fn string_arg(operation: &str, arg: Option<Value>, name: &str) -> Result<String, ConsumerError> {
    match arg {
        Some(Value::String(value)) => Ok(value),
        Some(other) => Err(ConsumerError::InvalidArgument {
            operation: operation.to_string(),
            message: format!("{} must be a string, got {}", name, other),
        }),
        None => Err(ConsumerError::InvalidArgument {
            operation: operation.to_string(),
            message: format!("missing {}", name),
        }),
    }
}
