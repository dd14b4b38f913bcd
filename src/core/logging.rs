//! Tracing setup.
//!
//! The game owns the terminal, so events are written to a log file in the
//! platform data directory. Verbosity comes from `FLAPPY_LOG` using the usual
//! `EnvFilter` syntax, defaulting to `info`.

use super::constants::{APP_NAME, LOG_ENV_VAR, LOG_FILE_NAME};
use directories::ProjectDirs;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::filter::EnvFilter;

/// Install the global subscriber and return the log file path.
pub fn init() -> io::Result<PathBuf> {
    let project_dirs = ProjectDirs::from("", "", APP_NAME).ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "Could not determine data directory")
    })?;

    let data_dir = project_dirs.data_dir();
    fs::create_dir_all(data_dir)?;
    let log_path = data_dir.join(LOG_FILE_NAME);

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    Ok(log_path)
}
