//! Configuration file handling for ~/.freeplm/common.ini.
//!
//! Loads and saves configuration with sensible defaults.
//! Settings structs live in [`super::settings`], constants in [`super::defaults`],
//! parsing in [`super::parser`], and serialization in [`super::writer`].

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ini::Ini;
use thiserror::Error;

use super::settings::ConfigFile;

/// Errors loading or saving `common.ini`.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// File exists but is unreadable or not valid INI
    #[error("Cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: ini::Error,
    },

    /// File could not be written
    #[error("Cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A key holds a value outside its accepted set
    #[error("[{section}] {key} = '{value}': {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },

    /// Parent directory of the file could not be created
    #[error("Cannot create config directory {}: {source}", .path.display())]
    Directory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ConfigFile {
    /// Load `~/.freeplm/common.ini`, or defaults when it is absent.
    pub fn load() -> Result<Self, ConfigFileError> {
        Self::load_from(&config_file_path())
    }

    /// Load the file at `path`, or defaults when it is absent.
    pub fn load_from(path: &Path) -> Result<Self, ConfigFileError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path).map_err(|source| ConfigFileError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        super::parser::parse_ini(&ini)
    }

    /// Write to `~/.freeplm/common.ini`.
    pub fn save(&self) -> Result<(), ConfigFileError> {
        self.save_to(&config_file_path())
    }

    /// Write to `path`, creating its parent directory if needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigFileError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigFileError::Directory {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        fs::write(path, super::writer::to_config_string(self)).map_err(|source| {
            ConfigFileError::Write {
                path: path.to_path_buf(),
                source,
            }
        })
    }

    /// Write the defaults to `~/.freeplm/common.ini` unless the file exists.
    ///
    /// Returns the path to the config file.
    pub fn ensure_exists() -> Result<PathBuf, ConfigFileError> {
        let path = config_file_path();
        if !path.exists() {
            Self::default().save_to(&path)?;
        }
        Ok(path)
    }
}

/// Get the path to the config directory (~/.freeplm).
pub fn config_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".freeplm")
}

/// Get the path to the config file (~/.freeplm/common.ini).
pub fn config_file_path() -> PathBuf {
    config_directory().join("common.ini")
}
