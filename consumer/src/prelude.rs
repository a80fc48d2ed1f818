//! Convenience re-exports for common consumer usage

pub use crate::client::{HttpClient, RawResponse, ReqwestClient};
pub use crate::core::{Consumer, HttpConsumer};
pub use crate::errors::ConsumerError;
pub use crate::options::RequestOptions;
pub use crate::response::ApiResponse;
pub use crate::Parameters;

pub use async_trait::async_trait;
pub use config::ClientConfig;
pub use reqwest::Method;
