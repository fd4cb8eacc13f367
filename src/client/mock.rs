//! Mock transport for testing
//!
//! Implements [`HttpApi`] without making real requests. Records every call
//! for assertions and can be primed with a canned response or a one-shot
//! error.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;

use super::HttpApi;
use crate::error::{ApiError, Result};

/// A captured transport call for test assertions.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedRequest {
    /// HTTP method ("GET" or "POST")
    pub method: &'static str,
    /// Resource path the wrapper built
    pub path: String,
    /// JSON payload for POST requests
    pub payload: Option<Value>,
}

/// Mock HTTP transport for unit tests.
///
/// Configure a response via builder methods, then inject into a resource
/// wrapper as `Arc<dyn HttpApi>`.
///
/// # Example
/// ```ignore
/// let mock = Arc::new(MockHttpClient::new().with_response(json!({"success": true})).await);
/// let fields = OrganizationFields::new(mock.clone());
/// ```
pub struct MockHttpClient {
    /// Response returned by every successful call
    response: Arc<Mutex<Value>>,
    /// Error to return (if any), consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Captured requests for test assertions
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl Default for MockHttpClient {
    fn default() -> Self {
        Self {
            response: Arc::new(Mutex::new(Value::Null)),
            error: Arc::new(Mutex::new(None)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl MockHttpClient {
    /// Create a new mock with a null response and no pending error.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the response returned by every successful call.
    pub async fn with_response(self, response: Value) -> Self {
        *self.response.lock().await = response;
        self
    }

    /// Configure an error to return on the next call.
    /// The error is consumed after one use.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Get all captured requests for test assertions.
    pub async fn requests(&self) -> Vec<CapturedRequest> {
        self.requests.lock().await.clone()
    }

    /// Record a call before the outcome is decided, so failed calls are
    /// visible to retry assertions.
    async fn record(&self, method: &'static str, path: &str, payload: Option<Value>) {
        self.requests.lock().await.push(CapturedRequest {
            method,
            path: path.to_string(),
            payload,
        });
    }

    /// Check for a pending error and consume it.
    async fn check_error(&self) -> Result<()> {
        let mut error = self.error.lock().await;
        if let Some(e) = error.take() {
            return Err(e.into());
        }
        Ok(())
    }
}

#[async_trait]
impl HttpApi for MockHttpClient {
    async fn get(&self, path: &str) -> Result<Value> {
        self.record("GET", path, None).await;
        self.check_error().await?;

        Ok(self.response.lock().await.clone())
    }

    async fn post(&self, path: &str, payload: &Value) -> Result<Value> {
        self.record("POST", path, Some(payload.clone())).await;
        self.check_error().await?;

        Ok(self.response.lock().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn test_mock_default_returns_null() {
        let mock = MockHttpClient::new();

        let response = mock.get("OrganizationFields").await.unwrap();
        assert_eq!(response, Value::Null);
    }

    #[tokio::test]
    async fn test_mock_returns_configured_response() {
        let mock = MockHttpClient::new()
            .with_response(json!({"success": true, "data": []}))
            .await;

        let response = mock.get("OrganizationFields").await.unwrap();
        assert_eq!(response["success"], json!(true));
    }

    #[tokio::test]
    async fn test_mock_error_is_one_shot() {
        let mock = MockHttpClient::new()
            .with_error(ApiError::Unauthorized)
            .await;

        assert!(mock.get("OrganizationFields").await.is_err());

        // Error is consumed, next call succeeds
        assert!(mock.get("OrganizationFields").await.is_ok());
    }

    #[tokio::test]
    async fn test_mock_records_failed_calls() {
        let mock = MockHttpClient::new()
            .with_error(ApiError::Unauthorized)
            .await;

        let _ = mock.get("OrganizationFields").await;

        assert_eq!(mock.requests().await.len(), 1);
    }

    #[tokio::test]
    async fn test_mock_captures_post_payload() {
        let mock = MockHttpClient::new();

        mock.post("OrganizationFields", &json!({"name": "Acme"}))
            .await
            .unwrap();

        let requests = mock.requests().await;
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].payload, Some(json!({"name": "Acme"})));
    }
}
