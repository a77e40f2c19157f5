//! # Wire and State Models
//!
//! JSON payloads exchanged with the push service and the persisted resource
//! state. Field names follow the service's snake_case API; the record's
//! identifier arrives as `url_token`.

use serde::{Deserialize, Serialize};

use crate::constants::PUSH_KIND_TEXT;

/// Outbound payload for `POST /p.json`.
///
/// `passphrase` stays an `Option` serialized as JSON null when unset; the
/// service treats null and absent the same but the wire shape is pinned by
/// tests.
#[derive(Debug, Clone, Serialize)]
pub struct SecretRequest {
    /// The secret text being pushed
    pub payload: String,
    /// Passphrase viewers must enter before the secret is shown
    pub passphrase: Option<String>,
    /// Whether viewers may delete the push once retrieved
    pub deletable_by_viewer: bool,
    /// Whether viewers land on a click-through page first, keeping link
    /// preview bots from consuming views
    pub retrieval_step: bool,
    /// Payload kind, always "text"
    pub kind: &'static str,
}

impl SecretRequest {
    /// Build a text push request
    #[must_use]
    pub fn text(
        payload: String,
        passphrase: Option<String>,
        deletable_by_viewer: bool,
        retrieval_step: bool,
    ) -> Self {
        Self {
            payload,
            passphrase,
            deletable_by_viewer,
            retrieval_step,
            kind: PUSH_KIND_TEXT,
        }
    }
}

/// Push record returned by the service on a successful create
#[derive(Debug, Clone, Deserialize)]
pub struct SecretRecord {
    /// URL token identifying the push; the resource identifier from here on
    #[serde(rename = "url_token")]
    pub id: String,
    /// Days until the push expires
    pub expire_after_days: i32,
    /// Views until the push expires
    pub expire_after_views: i32,
    /// Whether the push has expired
    pub expired: bool,
    /// Creation timestamp, as formatted by the service
    pub created_at: String,
    /// Last-update timestamp, as formatted by the service
    pub updated_at: String,
    /// Whether the push has been deleted
    pub deleted: bool,
    /// Whether viewers may delete the push once retrieved
    pub deletable_by_viewer: bool,
    /// Whether viewers land on a click-through page first
    pub retrieval_step: bool,
    /// Expiry timestamp, empty until the push expires
    #[serde(rename = "expired_on", default)]
    pub expired_at: Option<String>,
    /// Days left before expiry
    pub days_remaining: i32,
    /// Views left before expiry
    pub views_remaining: i32,
}

/// Persisted state of a `pwpush_text` resource.
///
/// `password` and `passphrase` come from the plan and never from the service;
/// everything else mirrors the [`SecretRecord`] of the create call. Computed
/// fields are `Option` so an unapplied plan round-trips through serde.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextPushState {
    /// The password payload (sensitive)
    pub password: String,
    /// Viewer passphrase (sensitive)
    #[serde(default)]
    pub passphrase: Option<String>,
    /// Identifier assigned by the service on creation
    #[serde(default)]
    pub id: Option<String>,
    /// Days until the push expires
    #[serde(default)]
    pub expire_after_days: Option<i32>,
    /// Views until the push expires
    #[serde(default)]
    pub expire_after_views: Option<i32>,
    /// Whether the push has expired
    #[serde(default)]
    pub expired: Option<bool>,
    /// Creation timestamp
    #[serde(default)]
    pub created_at: Option<String>,
    /// Last-update timestamp
    #[serde(default)]
    pub updated_at: Option<String>,
    /// Whether the push has been deleted
    #[serde(default)]
    pub deleted: Option<bool>,
    /// Whether viewers may delete the push once retrieved
    #[serde(default)]
    pub deletable_by_viewer: Option<bool>,
    /// Whether viewers land on a click-through page first
    #[serde(default)]
    pub retrieval_step: Option<bool>,
    /// Expiry timestamp
    #[serde(default)]
    pub expired_on: Option<String>,
    /// Days left before expiry
    #[serde(default)]
    pub days_remaining: Option<i32>,
    /// Views left before expiry
    #[serde(default)]
    pub views_remaining: Option<i32>,
}

impl TextPushState {
    /// Build the outbound request for this planned state.
    ///
    /// Unset booleans default to false, matching how the original resource
    /// flattened null plan values.
    #[must_use]
    pub fn to_request(&self) -> SecretRequest {
        SecretRequest::text(
            self.password.clone(),
            self.passphrase.clone(),
            self.deletable_by_viewer.unwrap_or(false),
            self.retrieval_step.unwrap_or(false),
        )
    }

    /// Copy every field of a freshly created record into state
    pub fn apply_record(&mut self, record: &SecretRecord) {
        self.id = Some(record.id.clone());
        self.expire_after_days = Some(record.expire_after_days);
        self.expire_after_views = Some(record.expire_after_views);
        self.expired = Some(record.expired);
        self.created_at = Some(record.created_at.clone());
        self.updated_at = Some(record.updated_at.clone());
        self.deleted = Some(record.deleted);
        self.deletable_by_viewer = Some(record.deletable_by_viewer);
        self.retrieval_step = Some(record.retrieval_step);
        self.expired_on = record.expired_at.clone();
        self.days_remaining = Some(record.days_remaining);
        self.views_remaining = Some(record.views_remaining);
    }
}
