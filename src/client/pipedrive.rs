//! Pipedrive HTTP transport implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as HttpClient, Method, Response, StatusCode};
use serde::Deserialize;
use serde_json::Value;

use super::HttpApi;
use crate::config::Config;
use crate::error::{ApiError, Result};

/// Pipedrive API transport
///
/// Wraps a shared `reqwest::Client` and authenticates every request with the
/// configured API token, sent as the `api_token` query parameter. Each call
/// issues exactly one request; failures map to [`ApiError`] variants and are
/// never retried.
pub struct PipedriveClient {
    http: HttpClient,
    base_url: String,
    api_token: String,
}

impl PipedriveClient {
    /// Create a new transport from the given configuration
    pub fn new(config: Config) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_token: config.api_token,
        })
    }

    /// Issue one request and decode the response
    async fn request(&self, method: Method, path: &str, body: Option<&Value>) -> Result<Value> {
        let url = format!("{}/{}", self.base_url, path);
        log::debug!("{} {}", method, path);

        let mut request = self
            .http
            .request(method, &url)
            .query(&[("api_token", self.api_token.as_str())]);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(ApiError::from)?;

        let status = response.status();
        log::debug!("{} -> {}", path, status);

        if status.is_success() {
            let data = response.json::<Value>().await.map_err(|e| {
                ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
            })?;
            return Ok(data);
        }

        match status {
            StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized.into()),
            StatusCode::FORBIDDEN => Err(ApiError::Forbidden.into()),
            StatusCode::NOT_FOUND => {
                let error_msg = error_text(response, "Resource not found").await;
                Err(ApiError::NotFound(error_msg).into())
            }
            StatusCode::TOO_MANY_REQUESTS => {
                let retry_after = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse::<u64>().ok())
                    .unwrap_or(60);
                Err(ApiError::RateLimited(Duration::from_secs(retry_after)).into())
            }
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                let error_msg = error_text(response, "Bad request").await;
                Err(ApiError::BadRequest(error_msg).into())
            }
            status if status.is_server_error() => {
                let error_msg = error_text(response, "Server error").await;
                Err(ApiError::ServerError(error_msg).into())
            }
            _ => {
                let error_msg = format!("Unexpected status code: {}", status);
                Err(ApiError::InvalidResponse(error_msg).into())
            }
        }
    }
}

/// Extract the server's error message from a failed response.
///
/// Pipedrive failure bodies carry `{"success": false, "error": "..."}`; fall
/// back to the raw body text, then to a static message.
async fn error_text(response: Response, fallback: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        error: Option<String>,
    }

    match response.text().await {
        Ok(text) => match serde_json::from_str::<ErrorBody>(&text) {
            Ok(ErrorBody { error: Some(msg) }) => msg,
            _ if !text.is_empty() => text,
            _ => fallback.to_string(),
        },
        Err(_) => fallback.to_string(),
    }
}

#[async_trait]
impl HttpApi for PipedriveClient {
    async fn get(&self, path: &str) -> Result<Value> {
        self.request(Method::GET, path, None).await
    }

    async fn post(&self, path: &str, payload: &Value) -> Result<Value> {
        self.request(Method::POST, path, Some(payload)).await
    }
}
