//! Adapter from the generic [`Logger`] contract to a [`LogBackend`].

use std::fmt::Debug;

use thiserror::Error;

use super::backend::{BackendLevel, LogBackend};
use super::record::{LogRecord, LogScope};
use super::{LogLevel, Logger};

/// Errors raised while building a [`LogAdapter`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AdapterError {
    /// No backend was supplied.
    #[error("Log adapter requires a backend logger")]
    MissingBackend,
}

/// Forwards generic log calls to a backend's severity-specific methods.
///
/// The adapter owns its backend and holds no other state. Every record is
/// translated to exactly one backend call, and the message is rendered once,
/// after the level has been mapped. Filtering is left to the backend, so
/// [`is_enabled`](Logger::is_enabled) reports every writable level as enabled.
///
/// Wrap a shared backend by passing an `Arc`.
///
/// # Example
///
/// ```
/// use freeplm_common::log::{LogAdapter, LogLevel, Logger, LoggerExt, TracingBackend};
///
/// let logger = LogAdapter::new(TracingBackend::new());
/// logger.write(LogLevel::Information, 0, "vault", None, |name, _| {
///     format!("opened {name}")
/// });
/// ```
#[derive(Debug, Clone, Default)]
pub struct LogAdapter<B> {
    backend: B,
}

impl<B: LogBackend> LogAdapter<B> {
    /// Wrap `backend` for the lifetime of the adapter.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Wrap a backend that may not have been resolved.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::MissingBackend`] when `backend` is `None`.
    pub fn try_new(backend: Option<B>) -> Result<Self, AdapterError> {
        backend.map(Self::new).ok_or(AdapterError::MissingBackend)
    }

    /// Backend records are forwarded to.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Consume the adapter, returning its backend.
    pub fn into_backend(self) -> B {
        self.backend
    }
}

/// Backend severity for a generic level, `None` when the record is dropped.
pub fn backend_level(level: LogLevel) -> Option<BackendLevel> {
    match level {
        LogLevel::Information => Some(BackendLevel::Information),
        LogLevel::Warning => Some(BackendLevel::Warning),
        LogLevel::Error => Some(BackendLevel::Error),
        LogLevel::Critical => Some(BackendLevel::Fatal),
        LogLevel::Debug => Some(BackendLevel::Debug),
        LogLevel::Trace => Some(BackendLevel::Verbose),
        LogLevel::None => None,
    }
}

impl<B: LogBackend> Logger for LogAdapter<B> {
    fn is_enabled(&self, level: LogLevel) -> bool {
        backend_level(level).is_some()
    }

    fn begin_scope(&self, _state: &dyn Debug) -> LogScope {
        LogScope::inert()
    }

    fn log(&self, record: &LogRecord<'_>) {
        let Some(level) = backend_level(record.level()) else {
            return;
        };

        let error = record.error();
        let message = record.message();

        match level {
            BackendLevel::Verbose => self.backend.verbose(error, &message),
            BackendLevel::Debug => self.backend.debug(error, &message),
            BackendLevel::Information => self.backend.information(error, &message),
            BackendLevel::Warning => self.backend.warning(error, &message),
            BackendLevel::Error => self.backend.error(error, &message),
            BackendLevel::Fatal => self.backend.fatal(error, &message),
        }
    }
}
