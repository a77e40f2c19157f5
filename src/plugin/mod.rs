//! # Provider-Service Seam
//!
//! The trait and supporting types a host harness uses to drive a provider:
//! schema discovery, one-time configuration, then per-resource lifecycle
//! calls with states passed as JSON values.
//!
//! This is deliberately the thin end of the plugin protocol. Handshake,
//! transport, plan diffing and state upgrades belong to the host; a provider
//! only has to answer these calls.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ProviderError;

pub mod schema;

pub use schema::{Attribute, AttributeType, ProviderSchema, Schema};

/// Severity of a diagnostic returned to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The operation failed
    Error,
    /// The operation succeeded but the practitioner should be told something
    Warning,
}

/// A message surfaced to the practitioner through the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Error or warning
    pub severity: Severity,
    /// One-line summary
    pub summary: String,
    /// Longer explanation, may be empty
    #[serde(default)]
    pub detail: String,
}

impl Diagnostic {
    /// Error-severity diagnostic
    #[must_use]
    pub fn error(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            summary: summary.into(),
            detail: detail.into(),
        }
    }

    /// Warning-severity diagnostic
    #[must_use]
    pub fn warning(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            summary: summary.into(),
            detail: detail.into(),
        }
    }
}

/// The provider contract a host harness drives.
///
/// `configure` is called once per plugin invocation before any lifecycle
/// call. Lifecycle calls are keyed by resource type name and exchange states
/// as raw JSON values; each provider parses them into its own models.
#[async_trait]
pub trait ProviderService: Send + Sync {
    /// Full schema surface: provider block plus every resource type
    fn provider_schema(&self) -> ProviderSchema;

    /// Apply the provider configuration block. Returns warnings to surface;
    /// unparseable configuration is an error.
    async fn configure(&self, config: Value) -> Result<Vec<Diagnostic>, ProviderError>;

    /// Create a resource from its planned state, returning the new state
    async fn create(&self, resource_type: &str, planned_state: Value)
        -> Result<Value, ProviderError>;

    /// Refresh a resource, returning its (possibly unchanged) state
    async fn read(&self, resource_type: &str, current_state: Value)
        -> Result<Value, ProviderError>;

    /// Update a resource in place, returning the new state
    async fn update(
        &self,
        resource_type: &str,
        prior_state: Value,
        planned_state: Value,
    ) -> Result<Value, ProviderError>;

    /// Destroy a resource
    async fn delete(&self, resource_type: &str, current_state: Value)
        -> Result<(), ProviderError>;

    /// Adopt an existing remote object into state by identifier
    async fn import_state(&self, resource_type: &str, id: &str) -> Result<Value, ProviderError>;
}
