//! Pipedrive API client
//!
//! The transport seam is the [`HttpApi`] trait: resource wrappers hold an
//! `Arc<dyn HttpApi>` and translate domain operations into generic requests
//! against it. [`PipedriveClient`] is the production implementation over
//! `reqwest`; tests inject [`mock::MockHttpClient`] instead.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

#[cfg(test)]
pub mod mock;
pub mod organization_fields;
pub mod pipedrive;

#[cfg(test)]
#[allow(unused_imports)]
pub use mock::MockHttpClient;
pub use organization_fields::OrganizationFields;
pub use pipedrive::PipedriveClient;

/// Generic HTTP contract consumed by resource wrappers
///
/// Both methods issue exactly one request and return the decoded JSON body.
/// Any transport or decoding failure surfaces unchanged; implementations do
/// not retry.
#[async_trait]
pub trait HttpApi: Send + Sync {
    /// Issue a GET against a resource path
    async fn get(&self, path: &str) -> Result<Value>;

    /// Issue a POST with a JSON payload against a resource path
    async fn post(&self, path: &str, payload: &Value) -> Result<Value>;
}
