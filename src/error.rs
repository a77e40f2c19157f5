//! # Provider Errors
//!
//! Typed error taxonomy for the provider boundary.
//!
//! The original push API swallows most transport failures; here every failure
//! path is surfaced so the host never records a resource that was not
//! actually created (see DESIGN.md for the policy decision).

use thiserror::Error;

/// Errors surfaced by provider and resource operations
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Operation is rejected by policy, not by a transient failure.
    /// Fired unconditionally for Update and ImportState: pushed secrets are
    /// immutable once created and cannot be adopted into state.
    #[error("unable to {operation} entry, not a permitted action")]
    NotPermitted {
        /// The rejected lifecycle operation ("update" or "import")
        operation: &'static str,
    },

    /// HTTP transport failure while talking to the push service
    #[error("push service request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// JSON (de)serialization failure for payloads or state
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Push service answered with a non-success status
    #[error("push service returned HTTP {status}: {body}")]
    Api {
        /// HTTP status code of the response
        status: u16,
        /// Response body text, as returned by the service
        body: String,
    },

    /// A lifecycle operation arrived before the provider was configured
    #[error("provider is not configured")]
    NotConfigured,

    /// Resource type name is not registered with this provider
    #[error("unknown resource type: {0}")]
    UnknownResourceType(String),

    /// Provider configuration block could not be parsed
    #[error("invalid provider configuration: {0}")]
    InvalidConfig(String),
}

impl ProviderError {
    /// Rejection for the Update lifecycle operation
    #[must_use]
    pub fn update_not_permitted() -> Self {
        Self::NotPermitted {
            operation: "update",
        }
    }

    /// Rejection for the ImportState lifecycle operation
    #[must_use]
    pub fn import_not_permitted() -> Self {
        Self::NotPermitted {
            operation: "import",
        }
    }
}
