use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{Result, TrainerError};

/// Environment variable holding the log filter, e.g. `INTUIT_LOG=debug`
pub const LOG_ENV: &str = "INTUIT_LOG";

/// Install the global subscriber, appending plain-text records to `path`.
///
/// The terminal is owned by the UI, so nothing is ever written to stdout
/// or stderr. Fails if a subscriber is already installed.
pub fn init_logging(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| TrainerError::LoggingInit(e.to_string()))
}
