//! Configuration file for the shared utilities.
//!
//! Settings live in `~/.freeplm/common.ini`:
//!
//! ```ini
//! [application]
//! package_name = FreePLM.Common.Vault
//! version = 1.0.0
//!
//! [logging]
//! level = info
//! directory = ~/.freeplm/logs
//! file = freeplm.log
//! ansi = true
//! ```
//!
//! A missing file yields [`ConfigFile::default()`].
//!
//! # Example
//!
//! ```
//! use freeplm_common::config::ConfigFile;
//! use std::path::Path;
//!
//! let config = ConfigFile::load_from(Path::new("/nonexistent/common.ini")).unwrap();
//! assert_eq!(config, ConfigFile::default());
//! ```

mod defaults;
mod file;
mod parser;
mod settings;
mod writer;

pub use defaults::{default_log_directory, DEFAULT_LOG_FILE, DEFAULT_LOG_LEVEL};
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use settings::{ApplicationSettings, ConfigFile, LoggingSettings};
