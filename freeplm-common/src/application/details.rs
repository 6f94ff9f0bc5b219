//! Cached application details with overridable values.

use std::sync::OnceLock;

use semver::Version;

use super::metadata::{application_name_of, BuildMetadata};

/// Name and version of the running application.
pub trait ApplicationDetailsProvider {
    /// Full package name, e.g. `FreePLM.Common.Vault`.
    fn package_name(&self) -> &str;

    /// Override the package name.
    fn set_package_name(&mut self, package_name: String);

    /// Last `.`-delimited segment of the package name.
    fn application_name(&self) -> &str {
        application_name_of(self.package_name())
    }

    /// Version without build metadata.
    fn application_version(&self) -> &str;

    /// Override the application version.
    fn set_application_version(&mut self, version: String);
}

/// Application details resolved from [`BuildMetadata`].
///
/// Values are resolved on first read and cached; setters replace the cached
/// value.
///
/// # Example
///
/// ```
/// use freeplm_common::application::{ApplicationDetails, ApplicationDetailsProvider, BuildMetadata};
///
/// let details = ApplicationDetails::new(BuildMetadata::new("FreePLM.Common.Vault", "1.4.0+abc"));
/// assert_eq!(details.application_name(), "Vault");
/// assert_eq!(details.application_version(), "1.4.0");
/// ```
#[derive(Debug, Default)]
pub struct ApplicationDetails {
    metadata: BuildMetadata,
    package_name: OnceLock<String>,
    application_version: OnceLock<String>,
}

impl ApplicationDetails {
    pub fn new(metadata: BuildMetadata) -> Self {
        Self {
            metadata,
            package_name: OnceLock::new(),
            application_version: OnceLock::new(),
        }
    }

    /// Details backed by the process-wide registered metadata.
    pub fn from_registered() -> Self {
        Self::new(super::registered_metadata())
    }

    /// The application version parsed as SemVer, if it is valid SemVer.
    pub fn semantic_version(&self) -> Option<Version> {
        Version::parse(self.application_version()).ok()
    }
}

impl ApplicationDetailsProvider for ApplicationDetails {
    fn package_name(&self) -> &str {
        self.package_name.get_or_init(|| self.metadata.package_name())
    }

    fn set_package_name(&mut self, package_name: String) {
        self.package_name = OnceLock::from(package_name);
    }

    fn application_version(&self) -> &str {
        self.application_version
            .get_or_init(|| self.metadata.application_version())
    }

    fn set_application_version(&mut self, version: String) {
        self.application_version = OnceLock::from(version);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_from_metadata() {
        let metadata = BuildMetadata::new("Company.Product.Module", "1.0.0+build123");
        let details = ApplicationDetails::new(metadata);
        assert_eq!(details.package_name(), "Company.Product.Module");
        assert_eq!(details.application_name(), "Module");
        assert_eq!(details.application_version(), "1.0.0");
    }

    #[test]
    fn test_defaults_without_metadata() {
        let details = ApplicationDetails::default();
        assert_eq!(details.package_name(), "Default Name");
        assert_eq!(details.application_name(), "Default Name");
        assert_eq!(details.application_version(), "0.0.0");
    }

    #[test]
    fn test_setters_override_metadata() {
        let mut details = ApplicationDetails::new(BuildMetadata::new("FreePLM.Common", "1.0.0"));
        assert_eq!(details.application_name(), "Common");

        details.set_package_name("FreePLM.Server".to_string());
        details.set_application_version("9.9.9".to_string());

        assert_eq!(details.package_name(), "FreePLM.Server");
        assert_eq!(details.application_name(), "Server");
        assert_eq!(details.application_version(), "9.9.9");
    }

    #[test]
    fn test_override_is_returned_verbatim() {
        let mut details = ApplicationDetails::default();
        details.set_application_version("2.0.0+local".to_string());
        assert_eq!(details.application_version(), "2.0.0+local");
    }

    #[test]
    fn test_semantic_version() {
        let details = ApplicationDetails::new(BuildMetadata::new("FreePLM", "1.2.3-rc.1+ci"));
        assert_eq!(
            details.semantic_version(),
            Some(Version::parse("1.2.3-rc.1").unwrap())
        );

        let details = ApplicationDetails::new(BuildMetadata::new("FreePLM", "1.2"));
        assert_eq!(details.semantic_version(), None);
    }

    #[test]
    fn test_usable_through_trait_object() {
        let details: Box<dyn ApplicationDetailsProvider> =
            Box::new(ApplicationDetails::new(BuildMetadata::new("A.B", "0.1.0")));
        assert_eq!(details.application_name(), "B");
    }
}
