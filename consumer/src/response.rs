//! Normalized response envelope

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Decoded response body together with the HTTP status code.
///
/// `body` is `None` when the payload is not valid JSON; the status is still
/// reported so callers can inspect it independently of decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub body: Option<Value>,
    pub status: u16,
}

impl ApiResponse {
    pub fn new(body: Option<Value>, status: u16) -> Self {
        Self { body, status }
    }

    /// Decode a raw payload
    pub fn from_bytes(status: u16, bytes: &[u8]) -> Self {
        let body = match serde_json::from_slice::<Value>(bytes) {
            Ok(body) => Some(body),
            Err(_err) => {
                debug_log!("Response body with status {} is not JSON: {}", status, _err);
                None
            }
        };

        Self { body, status }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_body_is_decoded() {
        let response = ApiResponse::from_bytes(200, br#"{"x":1}"#);
        assert_eq!(response, ApiResponse::new(Some(json!({"x": 1})), 200));
        assert!(response.is_success());
    }

    #[test]
    fn test_invalid_body_keeps_status() {
        let response = ApiResponse::from_bytes(502, b"<html>Bad Gateway</html>");
        assert!(response.body.is_none());
        assert_eq!(response.status, 502);
        assert!(!response.is_success());

        assert!(ApiResponse::from_bytes(204, b"").body.is_none());
    }

    #[test]
    fn test_json_null_is_a_decoded_body() {
        let response = ApiResponse::from_bytes(200, b"null");
        assert_eq!(response.body, Some(Value::Null));
    }
}
