//! Tracing setup. Logs go to a file because the terminal is owned by the UI.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber writing to `log_file`, filtered by `filter`
/// (same syntax as `RUST_LOG`).
pub fn init(log_file: &Path, filter: &str) -> Result<()> {
    if let Some(parent) = log_file.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create log directory {}", parent.display())
            })?;
        }
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .with_context(|| format!("Failed to open log file {}", log_file.display()))?;

    let filter = EnvFilter::try_new(filter)
        .with_context(|| format!("Invalid log filter '{}'", filter))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))?;

    Ok(())
}
