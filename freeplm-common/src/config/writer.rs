//! INI serialization logic for converting `ConfigFile` → INI string.
//!
//! This module contains the `to_config_string()` function that produces
//! the commented INI representation written to `common.ini`.

use std::path::Path;

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let package_name = config.application.package_name.as_deref().unwrap_or("");
    let version = config.application.version.as_deref().unwrap_or("");
    let directory = config
        .logging
        .directory
        .as_ref()
        .map(|p| path_to_string(p))
        .unwrap_or_default();
    let level = config.logging.level.to_string().to_lowercase();
    let ansi = if config.logging.ansi { "true" } else { "false" };

    format!(
        r#"[application]
; Package name override (leave empty to use the build metadata)
package_name = {}
; Version override (leave empty to use the build metadata)
version = {}

[logging]
; Minimum level: trace, debug, info, warn, error, off
; RUST_LOG takes precedence when set
level = {}
; Directory for the log file (leave empty to log to the console only)
directory = {}
; Log file name, truncated at the start of each session
file = {}
; Coloured console output
ansi = {}
"#,
        package_name, version, level, directory, config.logging.file, ansi
    )
}

/// Render a path, abbreviating the home directory as `~`.
fn path_to_string(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}
