//! Build-time identity strings and their parsing rules.

/// Package name reported when the build carries no title.
pub const DEFAULT_PACKAGE_NAME: &str = "Default Name";

/// Version reported when the build carries no version.
pub const DEFAULT_VERSION: &str = "0.0.0";

/// Raw identity strings captured at build time.
///
/// Use [`build_metadata!`](crate::build_metadata) in the binary crate to
/// capture that crate's name and version rather than this library's.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildMetadata {
    /// Package title, e.g. `FreePLM.Common.Vault`
    pub title: Option<String>,
    /// Version string, possibly carrying `+build` metadata
    pub informational_version: Option<String>,
}

impl BuildMetadata {
    pub fn new(title: impl Into<String>, informational_version: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            informational_version: Some(informational_version.into()),
        }
    }

    /// Package name, or [`DEFAULT_PACKAGE_NAME`] when no title was captured.
    pub fn package_name(&self) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| DEFAULT_PACKAGE_NAME.to_string())
    }

    /// Version without build metadata, or [`DEFAULT_VERSION`].
    pub fn application_version(&self) -> String {
        let version = self
            .informational_version
            .as_deref()
            .unwrap_or(DEFAULT_VERSION);
        base_version(version).to_string()
    }
}

/// Last `.`-delimited segment of a package name.
///
/// `Company.Product.Module` yields `Module`; a name without dots is returned
/// whole.
pub fn application_name_of(package_name: &str) -> &str {
    package_name
        .rsplit_once('.')
        .map_or(package_name, |(_, last)| last)
}

/// Version with any `+build` suffix removed.
pub fn base_version(version: &str) -> &str {
    version.split_once('+').map_or(version, |(base, _)| base)
}

/// Capture the calling crate's name and version.
///
/// Expands `env!("CARGO_PKG_NAME")` and `env!("CARGO_PKG_VERSION")` at the
/// call site.
///
/// ```
/// let metadata = freeplm_common::build_metadata!();
/// assert_eq!(metadata.title.as_deref(), Some(env!("CARGO_PKG_NAME")));
/// ```
#[macro_export]
macro_rules! build_metadata {
    () => {
        $crate::application::BuildMetadata::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_name_is_last_segment() {
        assert_eq!(application_name_of("Company.Product.Module"), "Module");
        assert_eq!(application_name_of("FreePLM.Common"), "Common");
    }

    #[test]
    fn test_application_name_without_dots() {
        assert_eq!(application_name_of("freeplm-common"), "freeplm-common");
        assert_eq!(application_name_of(DEFAULT_PACKAGE_NAME), "Default Name");
    }

    #[test]
    fn test_application_name_trailing_dot_is_empty() {
        assert_eq!(application_name_of("FreePLM."), "");
    }

    #[test]
    fn test_base_version_strips_build_metadata() {
        assert_eq!(base_version("1.0.0+build123"), "1.0.0");
        assert_eq!(base_version("2.1.0-beta.1+sha.5114f85"), "2.1.0-beta.1");
        assert_eq!(base_version("3.4.5"), "3.4.5");
    }

    #[test]
    fn test_base_version_keeps_prefix_before_first_plus() {
        assert_eq!(base_version("1.0+a+b"), "1.0");
    }

    #[test]
    fn test_defaults_when_metadata_missing() {
        let metadata = BuildMetadata::default();
        assert_eq!(metadata.package_name(), "Default Name");
        assert_eq!(metadata.application_version(), "0.0.0");
    }

    #[test]
    fn test_metadata_values_used_when_present() {
        let metadata = BuildMetadata::new("FreePLM.Vault", "4.2.0+20240101");
        assert_eq!(metadata.package_name(), "FreePLM.Vault");
        assert_eq!(metadata.application_version(), "4.2.0");
    }

    #[test]
    fn test_build_metadata_macro_captures_this_crate() {
        let metadata = crate::build_metadata!();
        assert_eq!(metadata.package_name(), "freeplm-common");
        assert_eq!(metadata.application_version(), env!("CARGO_PKG_VERSION"));
    }
}
