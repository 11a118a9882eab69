//! Logging init: append to a file under the XDG state dir, or log to stderr.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,urlazy=debug";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// `~/.local/state/urlazy/urlazy.log`, creating the directory if needed.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlazy")?;
    let log_dir = xdg_dirs.get_state_home();
    fs::create_dir_all(&log_dir).with_context(|| format!("create {}", log_dir.display()))?;
    Ok(log_dir.join("urlazy.log"))
}

/// Initialize structured logging to [`log_file_path`].
///
/// Returns Err when the file cannot be opened or a subscriber is already set,
/// so the caller can fall back to [`init_logging_stderr`].
pub fn init_logging() -> Result<()> {
    let path = log_file_path()?;
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    tracing::info!("urlazy logging initialized at {}", path.display());
    Ok(())
}

/// Initialize logging to stderr only. A no-op if a subscriber is already set.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
