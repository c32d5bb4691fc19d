//! Quiz Results — Shared Library
//!
//! Validation, file naming and the remote store used by the serverless
//! functions in `api/`. Handlers stay thin; everything testable lives here.

pub mod config;
pub mod handler;
pub mod models;
pub mod naming;
pub mod store;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Install the fmt subscriber used by every function.
///
/// Level comes from `RUST_LOG`, defaulting to `info`. Safe to call on every
/// cold start; a second call is a no-op.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
