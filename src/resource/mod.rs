//! # Managed Resources
//!
//! Resource handlers registered with the provider. Each handler declares its
//! schema and implements the lifecycle operations over JSON states, with the
//! shared [`ProviderData`] supplying the HTTP client and endpoint.

use async_trait::async_trait;
use serde_json::Value;

use crate::config::ProviderData;
use crate::error::ProviderError;
use crate::plugin::Schema;

pub mod text;

pub use text::TextResource;

/// Lifecycle contract for one managed resource type
#[async_trait]
pub trait ManagedResource: Send + Sync {
    /// Resource type name as used in configuration, e.g. `pwpush_text`
    fn type_name(&self) -> &'static str;

    /// Schema of the resource block
    fn schema(&self) -> Schema;

    /// Create the remote object from planned state, returning the new state
    async fn create(&self, data: &ProviderData, planned_state: Value)
        -> Result<Value, ProviderError>;

    /// Refresh state from the remote object
    async fn read(&self, data: &ProviderData, current_state: Value)
        -> Result<Value, ProviderError>;

    /// Update the remote object in place
    async fn update(
        &self,
        data: &ProviderData,
        prior_state: Value,
        planned_state: Value,
    ) -> Result<Value, ProviderError>;

    /// Destroy the remote object
    async fn delete(&self, data: &ProviderData, current_state: Value)
        -> Result<(), ProviderError>;

    /// Adopt an existing remote object into state by identifier
    async fn import_state(&self, data: &ProviderData, id: &str) -> Result<Value, ProviderError>;
}
