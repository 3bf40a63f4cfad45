//! Tracing subscriber initialization.

use colloquy_error::{ColloquyResult, ObservabilityError};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Install a global `fmt` subscriber filtered by `RUST_LOG`.
///
/// When `RUST_LOG` is unset or unparsable, `default_directive` is used
/// instead (for example `"colloquy_core=debug"`). Only one global subscriber
/// can exist per process; a second call returns an error.
pub fn init_tracing(default_directive: &str) -> ColloquyResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))
        .map_err(|e| ObservabilityError::new(format!("Invalid filter directive: {}", e)))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| ObservabilityError::new(format!("Failed to install subscriber: {}", e)))?;

    info!(default_directive, "Tracing initialized");
    debug!("Subscriber installed globally");
    Ok(())
}
