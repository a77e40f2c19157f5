//! # Telemetry
//!
//! Tracing subscriber setup for host binaries and manual testing. The
//! provider itself only emits `tracing` events; initializing a subscriber is
//! the embedder's call.

use tracing_subscriber::EnvFilter;

/// Initialize a formatted tracing subscriber filtered by `RUST_LOG`,
/// defaulting to `info` when unset.
///
/// Safe to call more than once; repeat initialization is ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeat_initialization_does_not_panic() {
        init_tracing();
        init_tracing();
    }
}
