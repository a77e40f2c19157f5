//! # pwpush Provider
//!
//! A provider plugin that manages pushed password secrets on a
//! [Password Pusher](https://pwpush.com) service.
//!
//! ## Overview
//!
//! The provider exposes a single managed resource, `pwpush_text`:
//!
//! 1. **Create** - POSTs the secret payload to `{base_url}/p.json` and mirrors
//!    the returned record (URL token, expiry metadata) into resource state
//! 2. **Read** - re-persists prior state unchanged; pushed secrets are never
//!    re-fetched, so remote drift is not detected
//! 3. **Update / ImportState** - always rejected; a pushed secret is immutable
//!    once created and cannot be adopted after the fact
//! 4. **Delete** - drops local tracking only, the remote secret keeps its own
//!    expiry lifecycle
//!
//! Provider configuration is a single optional `url` attribute defaulting to
//! the public hosted service. It is resolved once at configure time into a
//! [`config::ProviderData`] shared by every resource operation.
//!
//! The host plugin protocol (handshake, RPC serving, plan diffing) is out of
//! scope here; [`plugin::ProviderService`] is the seam a host harness drives.

pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod model;
pub mod plugin;
pub mod provider;
pub mod resource;
pub mod telemetry;

pub use config::{ProviderData, ProviderSettings};
pub use error::ProviderError;
pub use plugin::{Diagnostic, ProviderService};
pub use provider::PwpushProvider;
