//! # Constants
//!
//! Shared constants used throughout the provider.

/// Default base URL of the hosted Password Pusher service, used when the
/// provider configuration omits `url`
pub const DEFAULT_BASE_URL: &str = "https://pwpush.com";

/// Path of the push endpoint, relative to the base URL
pub const PUSH_PATH: &str = "/p.json";

/// Payload kind sent with every push request; only text pushes are supported
pub const PUSH_KIND_TEXT: &str = "text";

/// Resource type name of the text push resource
pub const TEXT_RESOURCE_TYPE: &str = "pwpush_text";
