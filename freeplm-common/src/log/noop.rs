//! No-operation logger implementation.

use std::fmt::Debug;

use crate::log::{LogLevel, LogRecord, LogScope, Logger};

/// A logger that discards all records.
///
/// Reports every level as disabled and never renders a message, so
/// formatters passed to it are never run.
///
/// Useful for:
/// - Unit tests where log output would be noise
/// - Components constructed before logging is configured
///
/// # Example
///
/// ```
/// use freeplm_common::log::{Logger, NoOpLogger};
/// use std::sync::Arc;
///
/// let logger: Arc<dyn Logger> = Arc::new(NoOpLogger);
/// logger.info(format_args!("This message is discarded"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl Logger for NoOpLogger {
    #[inline]
    fn is_enabled(&self, _level: LogLevel) -> bool {
        false
    }

    fn begin_scope(&self, _state: &dyn Debug) -> LogScope {
        LogScope::inert()
    }

    #[inline]
    fn log(&self, _record: &LogRecord<'_>) {}
}
