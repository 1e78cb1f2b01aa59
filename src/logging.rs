//! File-backed tracing setup.
//!
//! The terminal belongs to the TUI, so log lines go to `<data_dir>/todolists.log`.
//! `TODOLISTS_LOG` takes precedence over the configured level.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "TODOLISTS_LOG";

/// Build the filter from the environment, falling back to `default_level`
pub fn build_filter(default_level: &str) -> Result<EnvFilter> {
    match EnvFilter::try_from_env(LOG_ENV) {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(default_level)
            .with_context(|| format!("Invalid log level `{default_level}`")),
    }
}

/// Install the global subscriber writing to the data directory's log file.
///
/// Calling it again after a subscriber is installed is a no-op.
pub fn init(data_dir: &Path, default_level: &str) -> Result<PathBuf> {
    let path = crate::persistence::log_file(data_dir);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    let filter = build_filter(default_level)?;

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init();

    if installed.is_ok() {
        tracing::info!(log = %path.display(), "logging initialized");
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_accepts_levels() {
        assert!(build_filter("info").is_ok());
        assert!(build_filter("todolists=debug,warn").is_ok());
    }

    #[test]
    fn test_init_creates_log_file_and_is_repeatable() {
        let dir = tempfile::tempdir().unwrap();
        let path = init(dir.path(), "info").unwrap();
        assert!(path.exists());
        assert!(init(dir.path(), "info").is_ok());
    }

    #[test]
    fn test_init_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(init(&dir.path().join("missing"), "info").is_err());
    }
}
