//! Per-call log record, event identifiers and scope guards.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use super::LogLevel;

/// Identifies a logging event.
///
/// The numeric id defaults to `0`; the name is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct EventId {
    id: i32,
    name: Option<Cow<'static, str>>,
}

impl EventId {
    /// Create an unnamed event id.
    pub const fn new(id: i32) -> Self {
        Self { id, name: None }
    }

    /// Create a named event id.
    pub fn with_name(id: i32, name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            id,
            name: Some(name.into()),
        }
    }

    /// Numeric identifier.
    pub fn id(&self) -> i32 {
        self.id
    }

    /// Event name, if one was given.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl From<i32> for EventId {
    fn from(id: i32) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.id),
        }
    }
}

/// A single log call, borrowed from the caller's stack.
///
/// The message is held as a thunk so that loggers which drop the record never
/// pay for formatting. Each call to [`LogRecord::message`] runs the thunk
/// again; loggers render it once.
#[derive(Clone, Copy)]
pub struct LogRecord<'a> {
    level: LogLevel,
    event_id: &'a EventId,
    error: Option<&'a (dyn Error + 'static)>,
    message: &'a (dyn Fn() -> String + 'a),
}

impl<'a> LogRecord<'a> {
    /// Create a record; `message` is not called here.
    pub fn new(
        level: LogLevel,
        event_id: &'a EventId,
        error: Option<&'a (dyn Error + 'static)>,
        message: &'a (dyn Fn() -> String + 'a),
    ) -> Self {
        Self {
            level,
            event_id,
            error,
            message,
        }
    }

    /// Severity requested by the caller.
    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Event identifier supplied by the caller.
    pub fn event_id(&self) -> &'a EventId {
        self.event_id
    }

    /// Error attached by the caller, unmodified.
    pub fn error(&self) -> Option<&'a (dyn Error + 'static)> {
        self.error
    }

    /// Render the message text.
    pub fn message(&self) -> String {
        (self.message)()
    }
}

impl fmt::Debug for LogRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogRecord")
            .field("level", &self.level)
            .field("event_id", &self.event_id)
            .field("error", &self.error.map(|e| e.to_string()))
            .finish_non_exhaustive()
    }
}

/// Guard for a logical operation scope.
///
/// Carries no state. Ending it, explicitly or by drop, has no effect and
/// cannot fail.
#[derive(Debug, Default)]
#[must_use = "the scope ends as soon as the guard is dropped"]
pub struct LogScope {
    _private: (),
}

impl LogScope {
    /// A scope that is already released.
    pub fn inert() -> Self {
        Self { _private: () }
    }

    /// End the scope.
    pub fn end(self) {}
}
