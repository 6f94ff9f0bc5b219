//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.
//! These are pure data types with no parsing or serialization logic.

use std::path::PathBuf;

use tracing_subscriber::filter::LevelFilter;

use crate::application::ApplicationDetailsProvider;

/// Complete configuration loaded from `common.ini`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigFile {
    /// Application identity overrides
    pub application: ApplicationSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// Overrides for values normally taken from build metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationSettings {
    /// Package name override, e.g. `FreePLM.Common.Vault`
    pub package_name: Option<String>,
    /// Version override
    pub version: Option<String>,
}

impl ApplicationSettings {
    /// Apply the configured overrides to `details`.
    pub fn apply_to<P>(&self, details: &mut P)
    where
        P: ApplicationDetailsProvider + ?Sized,
    {
        if let Some(name) = &self.package_name {
            details.set_package_name(name.clone());
        }
        if let Some(version) = &self.version {
            details.set_application_version(version.clone());
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    /// Minimum level, overridden by `RUST_LOG` when set
    pub level: LevelFilter,
    /// Directory for the log file; `None` logs to the console only
    pub directory: Option<PathBuf>,
    /// Log file name inside `directory`
    pub file: String,
    /// Colour console output
    pub ansi: bool,
}
