//! `tracing` subscriber setup.
//!
//! The library itself only emits events. Binaries and tests that want to see
//! them call [`init_logging`] once; later calls do nothing.
//! `RUST_LOG` overrides `Config::log_level` when set.

use std::sync::OnceLock;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::{Config, LogFormat};
use crate::error::{Result, UtilError};

static LOGGING_INITIALIZED: OnceLock<()> = OnceLock::new();

pub fn init_logging(cfg: &Config) -> Result<()> {
    if LOGGING_INITIALIZED.get().is_some() {
        return Ok(());
    }

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));

    let installed = match cfg.log_format {
        LogFormat::Compact => {
            let subscriber = tracing_subscriber::registry().with(env_filter).with(
                fmt::layer()
                    .compact()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            );
            tracing::subscriber::set_global_default(subscriber)
        }
        LogFormat::Full => {
            let subscriber = tracing_subscriber::registry().with(env_filter).with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            );
            tracing::subscriber::set_global_default(subscriber)
        }
    };

    installed.map_err(|err| UtilError::Logging(err.to_string()))?;
    let _ = LOGGING_INITIALIZED.set(());
    tracing::debug!(level = %cfg.log_level, format = ?cfg.log_format, "logging initialized");
    Ok(())
}
