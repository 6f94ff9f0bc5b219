//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This module contains the `parse_ini()` function and its helpers.
//! It is the single place where INI key names are mapped to struct fields.

use std::path::PathBuf;

use ini::Ini;
use tracing_subscriber::filter::LevelFilter;

use super::file::ConfigFileError;
use super::settings::ConfigFile;

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [application] section
    if let Some(section) = ini.section(Some("application")) {
        if let Some(v) = section.get("package_name") {
            config.application.package_name = non_empty(v);
        }
        if let Some(v) = section.get("version") {
            config.application.version = non_empty(v);
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("level") {
            config.logging.level = parse_level(v)?;
        }
        if let Some(v) = section.get("directory") {
            config.logging.directory = non_empty(v).map(|dir| expand_tilde(&dir));
        }
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if v.contains('/') || v.contains('\\') {
                return Err(ConfigFileError::InvalidValue {
                    section: "logging".to_string(),
                    key: "file".to_string(),
                    value: v.to_string(),
                    reason: "must be a file name, set the directory with 'directory'".to_string(),
                });
            }
            if !v.is_empty() {
                config.logging.file = v.to_string();
            }
        }
        if let Some(v) = section.get("ansi") {
            config.logging.ansi = parse_bool(v);
        }
    }

    Ok(config)
}

fn parse_level(value: &str) -> Result<LevelFilter, ConfigFileError> {
    let v = value.trim().to_lowercase();
    match v.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" | "off" => {
            v.parse().map_err(|_| invalid_level(value))
        }
        _ => Err(invalid_level(value)),
    }
}

fn invalid_level(value: &str) -> ConfigFileError {
    ConfigFileError::InvalidValue {
        section: "logging".to_string(),
        key: "level".to_string(),
        value: value.to_string(),
        reason: "must be one of: trace, debug, info, warn, error, off".to_string(),
    }
}

fn non_empty(value: &str) -> Option<String> {
    let v = value.trim();
    (!v.is_empty()).then(|| v.to_string())
}

/// Parse a boolean value, accepting `true`/`1`/`yes`/`on`.
pub(super) fn parse_bool(value: &str) -> bool {
    let v = value.trim().to_lowercase();
    v == "true" || v == "1" || v == "yes" || v == "on"
}

/// Expand ~ to home directory in paths.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
