//! # Text Push Resource
//!
//! The `pwpush_text` managed resource: a text secret pushed to the service on
//! Create, immutable afterwards.
//!
//! Lifecycle policy:
//! - Create pushes the payload and mirrors the returned record into state
//! - Read re-persists prior state; the service is never re-queried, so
//!   remote expiry or deletion is not detected
//! - Update and ImportState are rejected unconditionally
//! - Delete drops local tracking only; the remote push keeps its own
//!   expiry lifecycle

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};

use crate::client::PushClient;
use crate::config::ProviderData;
use crate::constants::TEXT_RESOURCE_TYPE;
use crate::error::ProviderError;
use crate::model::TextPushState;
use crate::plugin::{Attribute, Schema};
use crate::resource::ManagedResource;

/// Handler for the `pwpush_text` resource type
#[derive(Debug, Clone, Copy, Default)]
pub struct TextResource;

impl TextResource {
    /// New text resource handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ManagedResource for TextResource {
    fn type_name(&self) -> &'static str {
        TEXT_RESOURCE_TYPE
    }

    fn schema(&self) -> Schema {
        Schema::v0()
            .with_attribute(
                "password",
                Attribute::required_string()
                    .sensitive()
                    .with_description("The password payload"),
            )
            .with_attribute(
                "passphrase",
                Attribute::optional_string().sensitive().with_description(
                    "Require recipients to enter this passphrase to view the created item",
                ),
            )
            .with_attribute(
                "id",
                Attribute::computed_string()
                    .with_description("Identifier of the secret in the push service"),
            )
            .with_attribute(
                "expire_after_days",
                Attribute::optional_computed_int()
                    .with_description("Expire secret link and delete after this many days"),
            )
            .with_attribute(
                "expire_after_views",
                Attribute::optional_computed_int()
                    .with_description("Expire secret link and delete after this many views"),
            )
            .with_attribute(
                "expired",
                Attribute::computed_bool().with_description("If the secret has expired"),
            )
            .with_attribute(
                "created_at",
                Attribute::computed_string()
                    .with_description("The timestamp that the secret was created"),
            )
            .with_attribute(
                "updated_at",
                Attribute::computed_string()
                    .with_description("The timestamp that the secret was updated"),
            )
            .with_attribute(
                "deleted",
                Attribute::computed_bool().with_description("If the secret has been deleted"),
            )
            .with_attribute(
                "deletable_by_viewer",
                Attribute::optional_computed_bool()
                    .with_description("Allow users to delete passwords once retrieved"),
            )
            .with_attribute(
                "retrieval_step",
                Attribute::optional_computed_bool().with_description(
                    "Helps to avoid chat systems and URL scanners from eating up views",
                ),
            )
            .with_attribute(
                "expired_on",
                Attribute::computed_string()
                    .with_description("The timestamp that the secret expired"),
            )
            .with_attribute(
                "days_remaining",
                Attribute::computed_int()
                    .with_description("The number of days left that the secret can be viewed"),
            )
            .with_attribute(
                "views_remaining",
                Attribute::computed_int()
                    .with_description("The number of times that the secret can be viewed"),
            )
    }

    async fn create(
        &self,
        data: &ProviderData,
        planned_state: Value,
    ) -> Result<Value, ProviderError> {
        let mut state: TextPushState = serde_json::from_value(planned_state)?;

        let request = state.to_request();
        let record = PushClient::new(data).push_text(&request).await?;

        state.apply_record(&record);
        info!(id = %record.id, "created text push");

        Ok(serde_json::to_value(&state)?)
    }

    async fn read(
        &self,
        _data: &ProviderData,
        current_state: Value,
    ) -> Result<Value, ProviderError> {
        debug!("read is a passthrough, remote drift is not detected");
        Ok(current_state)
    }

    async fn update(
        &self,
        _data: &ProviderData,
        _prior_state: Value,
        _planned_state: Value,
    ) -> Result<Value, ProviderError> {
        Err(ProviderError::update_not_permitted())
    }

    async fn delete(
        &self,
        _data: &ProviderData,
        current_state: Value,
    ) -> Result<(), ProviderError> {
        // No remote deletion call; the push expires on its own terms.
        let id = current_state.get("id").and_then(Value::as_str);
        debug!(id = ?id, "dropping local tracking of text push");
        Ok(())
    }

    async fn import_state(&self, _data: &ProviderData, _id: &str) -> Result<Value, ProviderError> {
        Err(ProviderError::import_not_permitted())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_marks_secrets_sensitive() {
        let schema = TextResource::new().schema();
        assert!(schema.attributes["password"].sensitive);
        assert!(schema.attributes["password"].required);
        assert!(schema.attributes["passphrase"].sensitive);
        assert!(schema.attributes["passphrase"].optional);
    }

    #[test]
    fn schema_declares_all_state_attributes() {
        let schema = TextResource::new().schema();
        for name in [
            "password",
            "passphrase",
            "id",
            "expire_after_days",
            "expire_after_views",
            "expired",
            "created_at",
            "updated_at",
            "deleted",
            "deletable_by_viewer",
            "retrieval_step",
            "expired_on",
            "days_remaining",
            "views_remaining",
        ] {
            assert!(schema.attributes.contains_key(name), "missing {name}");
        }
        assert!(schema.attributes["id"].computed);
        assert!(!schema.attributes["id"].optional);
    }
}
