//! File logging setup.
//!
//! The terminal belongs to the UI, so logs only go to a file and only when
//! one is requested with `--log`.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{CellplotError, Result};

/// Build a subscriber that writes to `path`, truncating it first.
///
/// `RUST_LOG` overrides the default `debug` level.
pub fn file_subscriber(path: &Path) -> Result<impl tracing::Subscriber + Send + Sync + 'static> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    Ok(tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .finish())
}

/// Install [`file_subscriber`] as the global default.
pub fn init(path: &Path) -> Result<()> {
    let subscriber = file_subscriber(path)?;
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| CellplotError::Logging(e.to_string()))?;
    Ok(())
}
