//! Log setup for the `taskline` binary.
//!
//! The terminal is where the conversation happens, so logs go to a file.

use std::fs::{self, File};
use std::path::Path;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Sends `tracing` output to `log_path`, truncating it. `RUST_LOG` wins over
/// `default_level`.
pub fn init_file_logging(log_path: &Path, default_level: &str) -> Result<()> {
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Could not create log directory {}", parent.display()))?;
    }
    let log_file = File::create(log_path)
        .with_context(|| format!("Could not create log file {}", log_path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(log_file)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("Could not install log subscriber")
}
