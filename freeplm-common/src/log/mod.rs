//! Logging facade and backend adapter.
//!
//! Application code logs through a generic contract while the records are
//! stored by an independently designed logging library. This follows the
//! Dependency Inversion Principle: components depend on the [`Logger`] trait,
//! not on the library behind it.
//!
//! # Architecture
//!
//! - [`Logger`] / [`LoggerExt`]: the generic contract (enablement, scopes,
//!   level + event id + state + error + formatter writes)
//! - [`LogBackend`]: the narrow contract of the logging library, one method
//!   per [`BackendLevel`]
//! - [`LogAdapter`]: maps [`LogLevel`] to [`BackendLevel`], renders the
//!   message once and forwards it
//! - [`TracingBackend`]: production backend on top of `tracing`
//! - [`NoOpLogger`]: silent logger for tests
//!
//! # Usage
//!
//! Components that need logging accept an `Arc<dyn Logger>`:
//!
//! ```
//! use freeplm_common::log::{tracing_logger, EventId, LogLevel, Logger, LoggerExt};
//! use freeplm_common::log_info;
//! use std::sync::Arc;
//!
//! struct PartImporter {
//!     logger: Arc<dyn Logger>,
//! }
//!
//! impl PartImporter {
//!     fn import(&self, count: usize) {
//!         log_info!(self.logger, "Importing {} parts", count);
//!         self.logger.write(
//!             LogLevel::Debug,
//!             EventId::with_name(10, "ImportDone"),
//!             count,
//!             None,
//!             |count, _| format!("imported={count}"),
//!         );
//!     }
//! }
//!
//! PartImporter { logger: tracing_logger() }.import(3);
//! ```

#![warn(missing_docs)]

mod adapter;
mod backend;
mod noop;
mod record;
mod tracing_backend;
mod r#trait;

pub use adapter::{backend_level, AdapterError, LogAdapter};
pub use backend::{BackendLevel, LogBackend};
pub use noop::NoOpLogger;
pub use r#trait::{LogLevel, Logger, LoggerExt};
pub use record::{EventId, LogRecord, LogScope};
pub use tracing_backend::{tracing_logger, TracingBackend};
