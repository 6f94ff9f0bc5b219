//! Process-wide logging setup.
//!
//! Installs the `tracing` subscriber that [`TracingBackend`](crate::log::TracingBackend)
//! records end up in:
//! - Console output, optionally coloured
//! - Optional log file in the configured directory (cleared on session start)
//! - Level from `RUST_LOG` when set, otherwise from [`LoggingSettings::level`]

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingSettings;

/// Errors raised while installing the subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Log directory or file could not be prepared
    #[error("Failed to prepare log file: {0}")]
    Io(#[from] io::Error),

    /// `RUST_LOG` holds an unparsable filter
    #[error("Invalid log filter: {0}")]
    InvalidFilter(String),

    /// A global subscriber is already installed
    #[error("Logging already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Guard that must be kept alive for the duration of logging.
///
/// Dropping this guard flushes and closes the log file writer.
#[must_use = "dropping the guard stops file logging"]
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Initialize logging system.
///
/// When a directory is configured, creates it if needed, clears the previous
/// log file and writes to both the file and stdout. Otherwise logs to stdout
/// only. A failed call leaves any existing log file untouched.
///
/// # Returns
///
/// LoggingGuard that must be kept alive for file logging to work
///
/// # Errors
///
/// Returns an error if the log file cannot be prepared, the filter is invalid,
/// or a subscriber is already installed.
pub fn init_logging(settings: &LoggingSettings) -> Result<LoggingGuard, LoggingError> {
    let env_filter = build_filter(settings)?;

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stdout)
        .with_ansi(settings.ansi);

    let (file_layer, file_guard) = match &settings.directory {
        Some(directory) => {
            fs::create_dir_all(directory)?;
            let file_appender = tracing_appender::rolling::never(directory, &settings.file);
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking_file)
                .with_ansi(false); // No ANSI colors in file
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))?;

    // Only the session that owns the subscriber may clear the file
    if let Some(directory) = &settings.directory {
        clear_log_file(directory, &settings.file)?;
    }

    tracing::debug!(
        level = %settings.level,
        directory = ?settings.directory,
        "Logging initialized"
    );

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

/// Filter from `RUST_LOG`, falling back to the configured level.
fn build_filter(settings: &LoggingSettings) -> Result<EnvFilter, LoggingError> {
    match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) if !directives.trim().is_empty() => EnvFilter::try_new(&directives)
            .map_err(|e| LoggingError::InvalidFilter(format!("{directives}: {e}"))),
        _ => Ok(EnvFilter::new(settings.level.to_string())),
    }
}

/// Truncate the log file left by a previous session.
///
/// The appender opens the file in append mode, so its writes land at the new
/// end of file.
fn clear_log_file(directory: &Path, file: &str) -> Result<(), LoggingError> {
    fs::write(directory.join(file), "")?;
    Ok(())
}
