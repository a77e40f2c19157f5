//! # Provider Configuration
//!
//! Parses the provider configuration block and resolves it into the shared
//! [`ProviderData`] handed to every resource operation.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::DEFAULT_BASE_URL;
use crate::error::ProviderError;

/// Provider configuration block as written by the practitioner
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderSettings {
    /// Base URL of the push service; the hosted service when unset
    #[serde(default)]
    pub url: Option<String>,
}

/// Resolved provider configuration, built once at configure time and shared
/// read-only with every resource instance for the life of the process
#[derive(Debug, Clone)]
pub struct ProviderData {
    base_url: String,
    http: Client,
}

impl ProviderData {
    /// Resolve practitioner settings into provider data.
    ///
    /// Absent or null `url` falls back to the hosted service. Trailing
    /// slashes are trimmed so endpoint paths join cleanly.
    ///
    /// # Errors
    /// Returns [`ProviderError::Transport`] if the HTTP client cannot be
    /// initialized.
    pub fn from_settings(settings: &ProviderSettings) -> Result<Self, ProviderError> {
        let base_url = settings
            .url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
            .to_string();

        debug!(base_url = %base_url, "resolved push service endpoint");

        let http = Client::builder().build()?;

        Ok(Self { base_url, http })
    }

    /// Base URL of the push service, without a trailing slash
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Shared HTTP client handle
    #[must_use]
    pub fn http(&self) -> &Client {
        &self.http
    }
}
