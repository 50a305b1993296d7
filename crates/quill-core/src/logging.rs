//! Tracing setup for binaries embedding the client.
//!
//! Library code only emits events; installing a subscriber is the embedding
//! application's call, made explicitly through [`init`].

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Environment variable controlling the log filter (`tracing` directive
/// syntax).
pub const LOG_ENV: &str = "QUILL_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Installs the global fmt subscriber, filtered by `QUILL_LOG` (default
/// `warn`). Call once from the application root.
///
/// # Errors
/// Returns an error if a global subscriber is already installed.
pub fn init() -> Result<()> {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!("Failed to install tracing subscriber: {err}"))
}
