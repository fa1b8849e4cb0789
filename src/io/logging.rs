use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use super::config_io::LoadError;

/// Default log file, in the temp directory since the TUI owns the terminal
pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join("actionlist.log")
}

/// Install the global tracing subscriber, appending to `path`.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. A subscriber that
/// is already installed (tests, embedding) is left in place.
pub fn init_logging(path: &Path) -> Result<(), LoadError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| LoadError::LogFileError {
            path: path.to_path_buf(),
            source: e,
        })?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init();
    Ok(())
}
