//! Client library for the Pipedrive CRM REST API
//!
//! The [`Pipedrive`] entry point owns the HTTP transport and vends resource
//! wrappers that share it. Wrappers take the transport as an explicit
//! constructor parameter (the [`HttpApi`] trait), so tests can inject a mock
//! in its place.
//!
//! Responses are returned as decoded [`serde_json::Value`]s, unchanged:
//! field schemas are tenant-specific, so the shape of a record is the
//! server's to define.
//!
//! # Example
//! ```no_run
//! use pipedrive::Pipedrive;
//!
//! # async fn run() -> pipedrive::Result<()> {
//! let pipedrive = Pipedrive::new("my-api-token")?;
//! let fields = pipedrive.organization_fields();
//!
//! let all = fields.list_all().await?;
//! let one = fields.get_by_id(42).await?;
//!
//! let mut field = serde_json::Map::new();
//! field.insert("name".into(), "Industry".into());
//! field.insert("field_type".into(), "varchar".into());
//! let created = fields.add(field).await?;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

pub mod client;
pub mod config;
pub mod error;

pub use client::{HttpApi, OrganizationFields, PipedriveClient};
pub use config::Config;
pub use error::{ApiError, Error, Result, ValidationError};

/// Entry point to the Pipedrive API
///
/// Builds the transport once and hands shared references to resource
/// wrappers. Holds no other state; cloneable handles come from the wrappers
/// themselves.
pub struct Pipedrive {
    http: Arc<PipedriveClient>,
}

impl Pipedrive {
    /// Create a client for the default API host
    pub fn new(api_token: impl Into<String>) -> Result<Self> {
        Self::with_config(Config::new(api_token))
    }

    /// Create a client from explicit transport configuration
    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self {
            http: Arc::new(PipedriveClient::new(config)?),
        })
    }

    /// Access the `OrganizationFields` resource
    pub fn organization_fields(&self) -> OrganizationFields {
        OrganizationFields::new(self.http.clone())
    }
}
