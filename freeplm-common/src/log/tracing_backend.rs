//! Backend implementation on top of the `tracing` crate.

use std::error::Error;
use std::sync::Arc;

use tracing::Level;

use crate::log::{LogAdapter, LogBackend, Logger};

/// Emit one event, attaching the caller's error as a display field.
macro_rules! emit {
    ($level:expr, $error:expr, $message:expr) => {
        match $error {
            Some(error) => tracing::event!($level, error = %error, "{}", $message),
            None => tracing::event!($level, "{}", $message),
        }
    };
}

/// Backend that delegates to the `tracing` crate.
///
/// This bridges the backend contract to the `tracing` ecosystem so that
/// subscribers, filters and file output configured by
/// [`init_logging`](crate::logging::init_logging) apply to every record.
/// `tracing` has no fatal level; fatal records are emitted at `ERROR` with
/// `fatal = true`.
///
/// # Example
///
/// ```
/// use freeplm_common::log::{LogAdapter, Logger, TracingBackend};
/// use std::sync::Arc;
///
/// // Assumes a tracing subscriber is installed; otherwise events are discarded
/// let logger: Arc<dyn Logger> = Arc::new(LogAdapter::new(TracingBackend::new()));
/// logger.info(format_args!("Using tracing backend"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingBackend;

impl TracingBackend {
    /// Create a new tracing backend.
    pub fn new() -> Self {
        Self
    }
}

impl LogBackend for TracingBackend {
    fn verbose(&self, error: Option<&(dyn Error + 'static)>, message: &str) {
        emit!(Level::TRACE, error, message);
    }

    fn debug(&self, error: Option<&(dyn Error + 'static)>, message: &str) {
        emit!(Level::DEBUG, error, message);
    }

    fn information(&self, error: Option<&(dyn Error + 'static)>, message: &str) {
        emit!(Level::INFO, error, message);
    }

    fn warning(&self, error: Option<&(dyn Error + 'static)>, message: &str) {
        emit!(Level::WARN, error, message);
    }

    fn error(&self, error: Option<&(dyn Error + 'static)>, message: &str) {
        emit!(Level::ERROR, error, message);
    }

    fn fatal(&self, error: Option<&(dyn Error + 'static)>, message: &str) {
        match error {
            Some(error) => tracing::error!(fatal = true, error = %error, "{}", message),
            None => tracing::error!(fatal = true, "{}", message),
        }
    }
}

/// Production logger: a [`LogAdapter`] over [`TracingBackend`].
pub fn tracing_logger() -> Arc<dyn Logger> {
    Arc::new(LogAdapter::new(TracingBackend::new()))
}
