//! Pinned dependency records read from a lock file

use super::SemanticVersion;
use serde::Serialize;
use std::fmt;

/// One dependency as recorded in `Package.resolved`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pin {
    /// Package identity or name
    pub package: String,
    /// Remote the tags are listed from
    #[serde(rename = "repositoryURL")]
    pub repository_url: String,
    /// Commit the pin resolves to, if recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision: Option<String>,
    /// Resolved version; absent for branch or revision pins
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<SemanticVersion>,
}

impl Pin {
    /// Creates a pin with neither revision nor version
    pub fn new(package: impl Into<String>, repository_url: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            repository_url: repository_url.into(),
            revision: None,
            version: None,
        }
    }

    /// Sets the revision (builder pattern)
    pub fn with_revision(mut self, revision: impl Into<String>) -> Self {
        self.revision = Some(revision.into());
        self
    }

    /// Sets the version (builder pattern)
    pub fn with_version(mut self, version: SemanticVersion) -> Self {
        self.version = Some(version);
        self
    }

    /// Builds a pin from raw lock file strings.
    ///
    /// An empty or unparsable version string yields an absent version rather
    /// than an error, so one odd entry never hides the rest of the file.
    pub fn from_raw(
        package: impl Into<String>,
        repository_url: impl Into<String>,
        revision: Option<String>,
        version: Option<&str>,
    ) -> Self {
        Self {
            package: package.into(),
            repository_url: repository_url.into(),
            revision,
            version: version
                .filter(|v| !v.is_empty())
                .and_then(SemanticVersion::parse),
        }
    }

    /// Returns true if the lock file resolved this pin to a version
    pub fn has_resolved_version(&self) -> bool {
        self.version.is_some()
    }

    /// Revision shortened for display
    pub fn short_revision(&self) -> Option<&str> {
        self.revision
            .as_deref()
            .map(|r| r.get(..7).unwrap_or(r))
    }
}

impl fmt::Display for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.version, self.short_revision()) {
            (Some(version), _) => write!(f, "{}@{}", self.package, version),
            (None, Some(revision)) => write!(f, "{}#{}", self.package, revision),
            (None, None) => write!(f, "{}", self.package),
        }
    }
}
