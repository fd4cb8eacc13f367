//! Organization field methods
//!
//! Organization fields form the near-complete schema for an organization in
//! the context of the company of the authorized user. Each company can have a
//! different schema for its organizations, with various custom fields. Some
//! custom field types carry additional data keys that are not separate fields
//! per se: a monetary field stored under the key `ffk9s9` also exposes
//! `ffk9s9_currency` holding the ISO currency code for the numeric value. To
//! find out which data keys are available, fetch one organization and list
//! its keys.

use std::sync::Arc;

use serde_json::{Map, Value};

use super::HttpApi;
use crate::error::{Result, ValidationError};

/// Resource path for the organization field collection
const RESOURCE: &str = "OrganizationFields";

/// Client for the `OrganizationFields` resource
///
/// A thin wrapper over the injected transport: each operation issues exactly
/// one request and returns the decoded response unchanged. Holds no state
/// beyond the shared transport handle, so calls may run concurrently.
pub struct OrganizationFields {
    http: Arc<dyn HttpApi>,
}

impl OrganizationFields {
    /// Create a wrapper around a shared transport
    pub fn new(http: Arc<dyn HttpApi>) -> Self {
        Self { http }
    }

    /// Return all organization fields
    pub async fn list_all(&self) -> Result<Value> {
        self.http.get(RESOURCE).await
    }

    /// Return the organization field with the given id
    ///
    /// Whether the id exists is the server's concern; an unknown id surfaces
    /// as the transport's not-found error.
    pub async fn get_by_id(&self, id: u64) -> Result<Value> {
        self.http.get(&format!("{}/{}", RESOURCE, id)).await
    }

    /// Add an organization field
    ///
    /// The payload must carry a `name` key. A nameless payload fails with a
    /// validation error before any request is made.
    pub async fn add(&self, data: Map<String, Value>) -> Result<Value> {
        if !data.contains_key("name") {
            return Err(ValidationError::MissingField {
                field: "name",
                resource: "an organization field",
            }
            .into());
        }

        self.http.post(RESOURCE, &Value::Object(data)).await
    }
}
