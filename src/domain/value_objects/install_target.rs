//! Install target value object - one concrete artifact a command would fetch

use serde::Serialize;

use super::Ecosystem;
use crate::error::{FirewallError, FirewallResult};

/// Characters that would turn a version into a range or wildcard
const VERSION_SPECIFIER_CHARS: &[char] = &['*', '^', '~', '<', '>', '=', ','];

/// An ecosystem-tagged `(package, version)` pair
///
/// Fields are private so that every value goes through validation:
/// both parts are non-empty and the version names exactly one release.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct InstallTarget {
    ecosystem: Ecosystem,
    package: String,
    version: String,
}

impl InstallTarget {
    pub fn new(
        ecosystem: Ecosystem,
        package: impl Into<String>,
        version: impl Into<String>,
    ) -> FirewallResult<Self> {
        let package = package.into();
        let version = version.into();
        let entry = format!("{package} {version}");

        if package.is_empty() {
            return Err(FirewallError::target_parse(entry, "empty package name"));
        }
        if version.is_empty() {
            return Err(FirewallError::target_parse(entry, "empty version"));
        }
        if version
            .chars()
            .any(|c| c.is_whitespace() || VERSION_SPECIFIER_CHARS.contains(&c))
        {
            return Err(FirewallError::target_parse(
                entry,
                "version is a range or wildcard, not a concrete release",
            ));
        }

        Ok(Self {
            ecosystem,
            package,
            version,
        })
    }

    /// Parse a pip `name-version` token by splitting on the last hyphen
    pub fn parse_pip(token: &str) -> FirewallResult<Self> {
        let (package, version) = token
            .rsplit_once('-')
            .ok_or_else(|| FirewallError::target_parse(token, "no version separator"))?;
        Self::new(Ecosystem::Pip, package, version)
            .map_err(|_| FirewallError::target_parse(token, "package or version is empty"))
    }

    pub fn ecosystem(&self) -> Ecosystem {
        self.ecosystem
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

impl std::fmt::Display for InstallTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.ecosystem {
            Ecosystem::Pip => write!(f, "{}-{}", self.package, self.version),
            Ecosystem::Npm => write!(f, "{}@{}", self.package, self.version),
        }
    }
}
