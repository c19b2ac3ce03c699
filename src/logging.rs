//! Tracing subscriber setup shared by the binaries.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// `log_level` is an `EnvFilter` directive string (the value of `RUST_LOG`);
/// `log_format` is `text` for human-readable output or `json` for one JSON
/// object per line.
///
/// # Errors
///
/// Returns an error if the filter directive is invalid or a subscriber is
/// already installed.
pub fn init_tracing(log_level: &str, log_format: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level)?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match log_format {
        "json" => builder
            .json()
            .try_init()
            .map_err(|e| anyhow::anyhow!(e))?,
        _ => builder.try_init().map_err(|e| anyhow::anyhow!(e))?,
    }

    Ok(())
}
