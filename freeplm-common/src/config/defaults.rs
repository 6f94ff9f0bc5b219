//! Default values and constants for all configuration settings.

use std::path::PathBuf;

use tracing_subscriber::filter::LevelFilter;

use super::file::config_directory;
use super::settings::LoggingSettings;

/// Default minimum log level.
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::INFO;

/// Default log file name.
pub const DEFAULT_LOG_FILE: &str = "freeplm.log";

/// Default log directory (~/.freeplm/logs).
pub fn default_log_directory() -> PathBuf {
    config_directory().join("logs")
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL,
            directory: Some(default_log_directory()),
            file: DEFAULT_LOG_FILE.to_string(),
            ansi: true,
        }
    }
}
