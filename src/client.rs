//! # Push Service Client
//!
//! Thin REST client for the Password Pusher API. One blocking-style request
//! per call, no retries; the service is a simple JSON endpoint and reqwest's
//! defaults are enough.

use tracing::{debug, info_span, Instrument};

use crate::config::ProviderData;
use crate::constants::PUSH_PATH;
use crate::error::ProviderError;
use crate::model::{SecretRecord, SecretRequest};

/// Client for the push endpoint, borrowing the shared provider data
#[derive(Debug, Clone, Copy)]
pub struct PushClient<'a> {
    data: &'a ProviderData,
}

impl<'a> PushClient<'a> {
    /// Wrap the shared provider data
    #[must_use]
    pub fn new(data: &'a ProviderData) -> Self {
        Self { data }
    }

    /// Push a text secret, returning the record the service created.
    ///
    /// # Errors
    /// Surfaces transport failures, non-success statuses (with the response
    /// body text) and unparseable response bodies. No partial result is ever
    /// returned.
    pub async fn push_text(&self, request: &SecretRequest) -> Result<SecretRecord, ProviderError> {
        let url = format!("{}{}", self.data.base_url(), PUSH_PATH);
        let span = info_span!("pwpush.push_text", url = %url);

        async move {
            debug!("pushing text secret");

            let response = self
                .data
                .http()
                .post(&url)
                .header("Content-Type", "application/json")
                .json(request)
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(ProviderError::Api {
                    status: status.as_u16(),
                    body,
                });
            }

            let body = response.text().await?;
            let record: SecretRecord = serde_json::from_str(&body)?;

            debug!(id = %record.id, "push created");
            Ok(record)
        }
        .instrument(span)
        .await
    }
}
