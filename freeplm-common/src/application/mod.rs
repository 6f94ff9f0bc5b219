//! Application identity: package name, application name and version.
//!
//! Values come from build metadata captured with
//! [`build_metadata!`](crate::build_metadata). Two ways to read them:
//!
//! - [`ApplicationDetails`]: an instance with cached, overridable values
//! - [`package_name`], [`application_name`], [`application_version`]: lookups
//!   against the metadata registered once per process by the binary
//!
//! Missing metadata falls back to [`DEFAULT_PACKAGE_NAME`] and
//! [`DEFAULT_VERSION`].
//!
//! ```
//! use freeplm_common::application;
//!
//! application::register_build_metadata(freeplm_common::build_metadata!());
//! println!("{} v{}", application::application_name(), application::application_version());
//! ```

mod details;
mod metadata;

use std::sync::OnceLock;

pub use details::{ApplicationDetails, ApplicationDetailsProvider};
pub use metadata::{
    application_name_of, base_version, BuildMetadata, DEFAULT_PACKAGE_NAME, DEFAULT_VERSION,
};

/// Metadata of the entry binary, registered once per process.
static BUILD_METADATA: OnceLock<BuildMetadata> = OnceLock::new();

/// Register the entry binary's build metadata.
///
/// Only the first registration is kept. Returns `false` if metadata was
/// already registered.
pub fn register_build_metadata(metadata: BuildMetadata) -> bool {
    let title = metadata.title.clone();
    match BUILD_METADATA.set(metadata) {
        Ok(()) => {
            tracing::debug!(title = ?title, "Registered build metadata");
            true
        }
        Err(_) => {
            tracing::debug!(title = ?title, "Build metadata already registered, ignoring");
            false
        }
    }
}

/// Registered metadata, or empty metadata when nothing was registered.
pub(crate) fn registered_metadata() -> BuildMetadata {
    BUILD_METADATA.get().cloned().unwrap_or_default()
}

/// Package name of the running application.
pub fn package_name() -> String {
    registered_metadata().package_name()
}

/// Last `.`-delimited segment of [`package_name`].
pub fn application_name() -> String {
    application_name_of(&package_name()).to_string()
}

/// Version of the running application, without build metadata.
pub fn application_version() -> String {
    registered_metadata().application_version()
}
