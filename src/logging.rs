use anyhow::{Context, Result};
use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub fn default_filter(verbose: bool) -> &'static str {
    if verbose { "popcorn=debug" } else { "popcorn=info" }
}

pub fn open_log_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))
}

/// Installs the global subscriber.
///
/// The terminal is owned by the TUI, so events only go to a file. Without
/// a log file nothing is installed and `tracing` macros are no-ops.
pub fn init_tracing(log_file: Option<&Path>, verbose: bool) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = open_log_file(path)?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(verbose).into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter(false), "popcorn=info");
        assert_eq!(default_filter(true), "popcorn=debug");
    }

    #[test]
    fn test_no_log_file_is_noop() {
        assert!(init_tracing(None, true).is_ok());
    }

    #[test]
    fn test_open_log_file_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("popcorn.log");

        open_log_file(&path).unwrap();
        assert!(path.exists());

        let missing = dir.path().join("missing").join("popcorn.log");
        let err = open_log_file(&missing).unwrap_err();
        assert!(err.to_string().contains("Failed to open log file"));
    }
}
