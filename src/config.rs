//! Transport configuration for the Pipedrive client

use std::time::Duration;

/// Pipedrive API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.pipedrive.com/v1";

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Transport configuration
///
/// Built with [`Config::new`] and the chained setters; every setting other
/// than the API token has a default. The base URL override exists mainly so
/// tests can point the client at a local server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Pipedrive API token, sent as the `api_token` query parameter
    pub api_token: String,

    /// Base URL for API requests, without a trailing slash
    pub base_url: String,

    /// Per-request timeout applied by the HTTP client
    pub timeout: Duration,
}

impl Config {
    /// Create a configuration for the given API token with default settings
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the API base URL
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Override the per-request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
