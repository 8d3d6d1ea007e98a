//! Logging setup shared by every binary built on the framework.

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber.
///
/// Verbosity comes from `RUST_LOG`, falling back to `default_directive` when the
/// variable is unset or unparsable:
/// - `RUST_LOG=info` - actor start/stop and every mutation
/// - `RUST_LOG=debug` - every request, including reads
/// - `RUST_LOG=order_desk=debug,resource_actor=info` - per-crate levels
///
/// Calling it twice is harmless; the second call leaves the first subscriber in place.
///
/// ```ignore
/// setup_tracing("info");
/// tracing::info!("Application started");
/// ```
pub fn setup_tracing(default_directive: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}
