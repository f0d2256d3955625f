//! Tracing subscriber initialization.

use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// The filter comes from `RUST_LOG` when set, otherwise `default_filter`.
/// Log lines go to stderr so they never interleave with program output on
/// stdout.
///
/// Returns an error if a global subscriber is already installed.
pub fn init_tracing(default_filter: &str) -> Result<(), String> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| format!("Failed to install tracing subscriber: {}", e))?;

    tracing::debug!(default_filter, "Tracing initialized");
    Ok(())
}
