//! Core QueryWire functionality
//!
//! This module contains the [`ApiConsumer`] coordinator, which ties a grammar
//! to a transport adapter: it compiles a query, merges the compiled parameters
//! into request options, and issues the request.

use consumer::{ApiResponse, Consumer, HttpConsumer, Method, Parameters, RequestOptions};
use grammar::{BaseGrammar, CompiledParameters, Grammar};
use query_state::QueryState;

use crate::errors::QueryWireError;
use config::AppConfig;

/// Parameter key reserved for per-request headers
const HEADERS_KEY: &str = "headers";

/// Compiles queries with a grammar and sends them through a consumer
#[derive(Debug, Clone)]
pub struct ApiConsumer<G = BaseGrammar, C = HttpConsumer> {
    grammar: G,
    consumer: C,
}

impl ApiConsumer<BaseGrammar, HttpConsumer> {
    /// Create a coordinator with the base grammar and a `reqwest` transport
    pub fn from_config(config: AppConfig) -> Result<Self, QueryWireError> {
        config.validate()?;
        let consumer = HttpConsumer::from_config(config.client)?;
        Ok(Self::new(BaseGrammar::new(), consumer))
    }

    /// Create a coordinator from the configuration file found by [`AppConfig::load`]
    pub fn load() -> Result<Self, QueryWireError> {
        Self::from_config(AppConfig::load()?)
    }
}

impl<G: Grammar, C: Consumer> ApiConsumer<G, C> {
    pub fn new(grammar: G, consumer: C) -> Self {
        Self { grammar, consumer }
    }

    pub fn grammar(&self) -> &G {
        &self.grammar
    }

    pub fn consumer(&self) -> &C {
        &self.consumer
    }

    /// Compile a query into API parameters
    pub fn compile(&self, query: &QueryState) -> Result<CompiledParameters, QueryWireError> {
        Ok(self.grammar.compile(query)?)
    }

    /// Compile a query into body-style request options: the parameters are
    /// adapted by the consumer and any `headers` entry becomes request headers.
    pub fn request_options(&self, query: &QueryState) -> Result<RequestOptions, QueryWireError> {
        let (parameters, headers) = self.split_headers(query)?;
        let options = self.consumer.adapt_parameters(&parameters)?;
        Ok(options.merge(headers))
    }

    /// Compile a query into query-string request options
    pub fn query_options(&self, query: &QueryState) -> Result<RequestOptions, QueryWireError> {
        let (parameters, headers) = self.split_headers(query)?;
        Ok(RequestOptions::new().with_query(parameters).merge(headers))
    }

    /// Send a query with its parameters in the request body
    pub async fn execute(
        &self,
        method: Method,
        uri: &str,
        query: &QueryState,
    ) -> Result<ApiResponse, QueryWireError> {
        let options = self.request_options(query)?;
        debug_log!("Executing {} {} with compiled body", method, uri);
        Ok(self.consumer.request(method, uri, options).await?)
    }

    /// Send a query as a GET request with its parameters in the query string
    pub async fn get(&self, uri: &str, query: &QueryState) -> Result<ApiResponse, QueryWireError> {
        let options = self.query_options(query)?;
        debug_log!("Executing GET {} with compiled query string", uri);
        Ok(self.consumer.request(Method::GET, uri, options).await?)
    }

    fn split_headers(
        &self,
        query: &QueryState,
    ) -> Result<(Parameters, RequestOptions), QueryWireError> {
        let mut parameters = self.compile(query)?;
        let headers = self.consumer.headers(&parameters);
        parameters.shift_remove(HEADERS_KEY);
        Ok((parameters, headers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::ClientConfig;
    use query_state::QueryBuilder;
    use serde_json::json;

    fn api() -> ApiConsumer {
        let config = AppConfig {
            client: ClientConfig::default(),
        };
        ApiConsumer::from_config(config).unwrap()
    }

    #[test]
    fn test_from_config_rejects_invalid_config() {
        let config = AppConfig {
            client: ClientConfig::new(String::new()),
        };
        assert!(matches!(
            ApiConsumer::from_config(config),
            Err(QueryWireError::Config(_))
        ));
    }

    #[test]
    fn test_request_options_move_headers_out_of_body() {
        let query = QueryBuilder::new()
            .search("monet")
            .raw("headers", json!({"X-Api-Key": "secret"}))
            .build();

        let options = api().request_options(&query).unwrap();

        assert_eq!(options.body.as_deref(), Some(r#"{"q":"monet"}"#));
        assert_eq!(
            options.headers.get("X-Api-Key").map(String::as_str),
            Some("secret")
        );
    }

    #[test]
    fn test_query_options_carry_parameters() {
        let query = QueryBuilder::new().limit(2).build();

        let options = api().query_options(&query).unwrap();

        assert!(options.body.is_none());
        assert_eq!(
            options.query_pairs(),
            vec![
                ("limit".to_string(), "2".to_string()),
                ("size".to_string(), "2".to_string()),
            ]
        );
    }
}
