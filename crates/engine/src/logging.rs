//! File logging.
//!
//! The games own the terminal, so nothing may be printed to stdout or stderr
//! while they run. Logging is off unless `ARCADE_LOG_PATH` names a file.

use std::fs::OpenOptions;

use anyhow::{Context, Result};
use env_logger::{Builder, Target};

use crate::config::ArcadeConfig;

/// Install the global logger if a log path is configured.
///
/// Returns whether a logger was installed.
pub fn init(config: &ArcadeConfig) -> Result<bool> {
    let Some(path) = config.log_path.as_ref() else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    Builder::new()
        .parse_filters(&config.log_filter)
        .format_timestamp_millis()
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .context("failed to install logger")?;

    Ok(true)
}
