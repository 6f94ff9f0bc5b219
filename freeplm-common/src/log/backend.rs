//! Contract of the logging library that records end up in.

use std::error::Error;
use std::sync::Arc;

/// Severity taxonomy of the backend.
///
/// Narrower than [`LogLevel`](super::LogLevel): trace is folded into
/// `Verbose` and critical into `Fatal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendLevel {
    /// [`LogBackend::verbose`]
    Verbose,
    /// [`LogBackend::debug`]
    Debug,
    /// [`LogBackend::information`]
    Information,
    /// [`LogBackend::warning`]
    Warning,
    /// [`LogBackend::error`]
    Error,
    /// [`LogBackend::fatal`]
    Fatal,
}

/// A logging library with one method per severity.
///
/// This is the only surface [`LogAdapter`](super::LogAdapter) uses. Each
/// method receives the caller's error, if any, and the fully rendered text.
/// Implementations must be safe for concurrent use.
pub trait LogBackend: Send + Sync {
    /// Most detailed diagnostics.
    fn verbose(&self, error: Option<&(dyn Error + 'static)>, message: &str);

    /// Internal diagnostics.
    fn debug(&self, error: Option<&(dyn Error + 'static)>, message: &str);

    /// Normal operation.
    fn information(&self, error: Option<&(dyn Error + 'static)>, message: &str);

    /// Unexpected but recoverable.
    fn warning(&self, error: Option<&(dyn Error + 'static)>, message: &str);

    /// Operation failed.
    fn error(&self, error: Option<&(dyn Error + 'static)>, message: &str);

    /// Unrecoverable failure.
    fn fatal(&self, error: Option<&(dyn Error + 'static)>, message: &str);
}

macro_rules! forward_backend {
    ($($ptr:ty),*) => {$(
        impl<T: LogBackend + ?Sized> LogBackend for $ptr {
            fn verbose(&self, error: Option<&(dyn Error + 'static)>, message: &str) {
                (**self).verbose(error, message)
            }

            fn debug(&self, error: Option<&(dyn Error + 'static)>, message: &str) {
                (**self).debug(error, message)
            }

            fn information(&self, error: Option<&(dyn Error + 'static)>, message: &str) {
                (**self).information(error, message)
            }

            fn warning(&self, error: Option<&(dyn Error + 'static)>, message: &str) {
                (**self).warning(error, message)
            }

            fn error(&self, error: Option<&(dyn Error + 'static)>, message: &str) {
                (**self).error(error, message)
            }

            fn fatal(&self, error: Option<&(dyn Error + 'static)>, message: &str) {
                (**self).fatal(error, message)
            }
        }
    )*};
}

forward_backend!(&T, Box<T>, Arc<T>);
