//! # Provider Implementation
//!
//! [`PwpushProvider`] wires the resource registry to the provider-service
//! seam. Configuration happens once per plugin invocation; the resolved
//! [`ProviderData`] is immutable afterwards and shared by reference with
//! every lifecycle call.

use std::sync::{Arc, OnceLock};

use async_trait::async_trait;
use serde_json::Value;
use tracing::info;

use crate::config::{ProviderData, ProviderSettings};
use crate::error::ProviderError;
use crate::plugin::{Attribute, Diagnostic, ProviderSchema, ProviderService, Schema};
use crate::resource::{ManagedResource, TextResource};

/// The pwpush provider: one resource type, one optional `url` setting
pub struct PwpushProvider {
    resources: Vec<Box<dyn ManagedResource>>,
    data: OnceLock<Arc<ProviderData>>,
}

impl std::fmt::Debug for PwpushProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PwpushProvider")
            .field("configured", &self.data.get().is_some())
            .finish_non_exhaustive()
    }
}

impl Default for PwpushProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl PwpushProvider {
    /// Provider with the text push resource registered
    #[must_use]
    pub fn new() -> Self {
        Self {
            resources: vec![Box::new(TextResource::new())],
            data: OnceLock::new(),
        }
    }

    /// Shared provider data, failing before configure
    fn data(&self) -> Result<&Arc<ProviderData>, ProviderError> {
        self.data.get().ok_or(ProviderError::NotConfigured)
    }

    /// Look up a registered resource handler by type name
    fn resource(&self, resource_type: &str) -> Result<&dyn ManagedResource, ProviderError> {
        self.resources
            .iter()
            .find(|r| r.type_name() == resource_type)
            .map(|r| r.as_ref())
            .ok_or_else(|| ProviderError::UnknownResourceType(resource_type.to_string()))
    }
}

#[async_trait]
impl ProviderService for PwpushProvider {
    fn provider_schema(&self) -> ProviderSchema {
        let mut schema = ProviderSchema::new().with_provider(
            Schema::v0().with_attribute(
                "url",
                Attribute::optional_string()
                    .with_description("The URL for the push service"),
            ),
        );
        for resource in &self.resources {
            schema = schema.with_resource(resource.type_name(), resource.schema());
        }
        schema
    }

    async fn configure(&self, config: Value) -> Result<Vec<Diagnostic>, ProviderError> {
        let settings: ProviderSettings = serde_json::from_value(config)
            .map_err(|e| ProviderError::InvalidConfig(e.to_string()))?;

        let data = Arc::new(ProviderData::from_settings(&settings)?);
        info!(base_url = %data.base_url(), "provider configured");

        // Configure is called once per invocation; a repeat keeps the first
        // configuration rather than mutating what resources already share.
        let _ = self.data.set(data);

        Ok(Vec::new())
    }

    async fn create(
        &self,
        resource_type: &str,
        planned_state: Value,
    ) -> Result<Value, ProviderError> {
        let data = self.data()?;
        self.resource(resource_type)?
            .create(data, planned_state)
            .await
    }

    async fn read(
        &self,
        resource_type: &str,
        current_state: Value,
    ) -> Result<Value, ProviderError> {
        let data = self.data()?;
        self.resource(resource_type)?
            .read(data, current_state)
            .await
    }

    async fn update(
        &self,
        resource_type: &str,
        prior_state: Value,
        planned_state: Value,
    ) -> Result<Value, ProviderError> {
        let data = self.data()?;
        self.resource(resource_type)?
            .update(data, prior_state, planned_state)
            .await
    }

    async fn delete(
        &self,
        resource_type: &str,
        current_state: Value,
    ) -> Result<(), ProviderError> {
        let data = self.data()?;
        self.resource(resource_type)?
            .delete(data, current_state)
            .await
    }

    async fn import_state(&self, resource_type: &str, id: &str) -> Result<Value, ProviderError> {
        let data = self.data()?;
        self.resource(resource_type)?.import_state(data, id).await
    }
}
