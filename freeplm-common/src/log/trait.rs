//! Generic logging contract.

use std::error::Error;
use std::fmt::{self, Arguments, Debug};

use super::record::{EventId, LogRecord, LogScope};

/// Severity of a log record as seen by application code.
///
/// `None` is not a writable severity: records at that level are dropped and
/// `is_enabled(LogLevel::None)` is `false` for every logger in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    /// Most detailed diagnostics
    Trace,
    /// Debugging information
    Debug,
    /// General flow of the application
    Information,
    /// Abnormal or unexpected events that do not stop the application
    Warning,
    /// Failures of the current operation
    Error,
    /// Unrecoverable failures requiring immediate attention
    Critical,
    /// Logging disabled
    None,
}

impl LogLevel {
    /// All writable severities, lowest first.
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Information,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Critical,
    ];
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Information => "information",
            LogLevel::Warning => "warning",
            LogLevel::Error => "error",
            LogLevel::Critical => "critical",
            LogLevel::None => "none",
        };
        f.write_str(name)
    }
}

/// Logging interface for application components.
///
/// Components log through this trait without knowing which library ends up
/// storing the records. The trait is object safe; share it as
/// `Arc<dyn Logger>`. Generic, state-carrying writes live on [`LoggerExt`].
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across threads.
///
/// # Example
///
/// ```
/// use freeplm_common::log::{Logger, NoOpLogger};
/// use freeplm_common::{log_debug, log_info};
/// use std::sync::Arc;
///
/// let logger: Arc<dyn Logger> = Arc::new(NoOpLogger);
/// log_info!(logger, "Application started");
/// log_debug!(logger, "Loaded {} parts", 12);
/// ```
pub trait Logger: Send + Sync {
    /// Whether records at `level` would be passed on.
    fn is_enabled(&self, level: LogLevel) -> bool;

    /// Begin a logical operation scope.
    ///
    /// The scope ends when the returned guard is dropped or ended.
    fn begin_scope(&self, state: &dyn Debug) -> LogScope;

    /// Write a single record.
    ///
    /// This is the core method that implementations must provide. The
    /// record's message is only rendered if the implementation asks for it.
    fn log(&self, record: &LogRecord<'_>);

    /// Write preformatted arguments at `level` with a default event id.
    fn log_args(&self, level: LogLevel, args: Arguments<'_>) {
        let event_id = EventId::default();
        let message = || fmt::format(args);
        self.log(&LogRecord::new(level, &event_id, None, &message));
    }

    /// Log a trace-level message.
    fn trace(&self, args: Arguments<'_>) {
        self.log_args(LogLevel::Trace, args);
    }

    /// Log a debug-level message.
    fn debug(&self, args: Arguments<'_>) {
        self.log_args(LogLevel::Debug, args);
    }

    /// Log an information-level message.
    fn info(&self, args: Arguments<'_>) {
        self.log_args(LogLevel::Information, args);
    }

    /// Log a warning-level message.
    fn warn(&self, args: Arguments<'_>) {
        self.log_args(LogLevel::Warning, args);
    }

    /// Log an error-level message.
    fn error(&self, args: Arguments<'_>) {
        self.log_args(LogLevel::Error, args);
    }

    /// Log a critical-level message.
    fn critical(&self, args: Arguments<'_>) {
        self.log_args(LogLevel::Critical, args);
    }
}

/// State-carrying writes for any [`Logger`], including `dyn Logger`.
pub trait LoggerExt: Logger {
    /// Write a record whose text is produced by `formatter(&state, error)`.
    ///
    /// The formatter runs at most once, and only when the logger decides to
    /// render the record.
    ///
    /// ```
    /// use freeplm_common::log::{LogLevel, Logger, LoggerExt, NoOpLogger};
    ///
    /// let logger = NoOpLogger;
    /// logger.write(LogLevel::Information, 3, 42, None, |value, _| {
    ///     format!("value={value}")
    /// });
    /// ```
    fn write<S, F>(
        &self,
        level: LogLevel,
        event_id: impl Into<EventId>,
        state: S,
        error: Option<&(dyn Error + 'static)>,
        formatter: F,
    ) where
        F: Fn(&S, Option<&(dyn Error + 'static)>) -> String,
    {
        let event_id = event_id.into();
        let message = || formatter(&state, error);
        self.log(&LogRecord::new(level, &event_id, error, &message));
    }
}

impl<L: Logger + ?Sized> LoggerExt for L {}

/// Log a formatted message at trace level.
///
/// Formatting in all `log_*!` macros is deferred: the arguments are only rendered if the logger
/// forwards the record.
#[macro_export]
macro_rules! log_trace {
    ($logger:expr, $($arg:tt)*) => {
        $logger.trace(format_args!($($arg)*))
    };
}

/// Log a formatted message at debug level.
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.debug(format_args!($($arg)*))
    };
}

/// Log a formatted message at information level.
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.info(format_args!($($arg)*))
    };
}

/// Log a formatted message at warning level.
#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {
        $logger.warn(format_args!($($arg)*))
    };
}

/// Log a formatted message at error level.
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.error(format_args!($($arg)*))
    };
}

/// Log a formatted message at critical level.
#[macro_export]
macro_rules! log_critical {
    ($logger:expr, $($arg:tt)*) => {
        $logger.critical(format_args!($($arg)*))
    };
}
