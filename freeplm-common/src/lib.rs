//! FreePLM Common - shared utilities for FreePLM applications
//!
//! - [`log`]: generic logging contract and the adapter that forwards it to a
//!   backend logging library
//! - [`application`]: package name and version from build metadata
//! - [`tasks`]: task completion events
//! - [`config`] and [`logging`]: configuration file and subscriber setup
//!
//! # Quick Start
//!
//! ```no_run
//! use freeplm_common::config::ConfigFile;
//! use freeplm_common::log::tracing_logger;
//! use freeplm_common::{application, log_info, logging};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! application::register_build_metadata(freeplm_common::build_metadata!());
//! let config = ConfigFile::load()?;
//! let _guard = logging::init_logging(&config.logging)?;
//!
//! let logger = tracing_logger();
//! log_info!(logger, "{} v{} started", application::application_name(), application::application_version());
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod config;
pub mod log;
pub mod logging;
pub mod tasks;

/// Version of the FreePLM common library.
///
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
