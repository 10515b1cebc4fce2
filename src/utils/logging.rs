//! Structured logging setup.
//!
//! The library only emits `tracing` events. Binaries, demos and benches call
//! [`init_logging`] once to install a subscriber; `RUST_LOG` overrides the
//! configured level when set.

use crate::config::LoggingConfig;
use crate::error::{constants, ProtocolError, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Build the filter: `RUST_LOG` when present, the configured level otherwise
pub fn build_env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str().to_lowercase()))
}

/// Install a global fmt subscriber built from `config`.
///
/// # Errors
/// Returns `ProtocolError::ConfigError` if a global subscriber already exists.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(build_env_filter(config));

    let installed = if config.json_format {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| {
        ProtocolError::ConfigError(format!("{}: {e}", constants::ERR_LOGGING_INSTALLED))
    })?;

    info!(app = %config.app_name, level = %config.log_level, "Logging initialized");
    Ok(())
}
