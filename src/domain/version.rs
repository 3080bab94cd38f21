//! Semantic version model
//!
//! Wraps `semver::Version` with an ordering that ignores build metadata,
//! so `1.0.0+build.1` and `1.0.0+build.2` compare (and test) equal.

use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A parsed `MAJOR.MINOR.PATCH[-PRE][+BUILD]` version
#[derive(Debug, Clone)]
pub struct SemanticVersion(semver::Version);

impl SemanticVersion {
    /// Create a release version from its numeric components
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self(semver::Version::new(major, minor, patch))
    }

    /// Parse a version string, returning `None` for anything that is not strict semver
    pub fn parse(input: &str) -> Option<Self> {
        input.parse().ok()
    }

    pub fn major(&self) -> u64 {
        self.0.major
    }

    pub fn minor(&self) -> u64 {
        self.0.minor
    }

    pub fn patch(&self) -> u64 {
        self.0.patch
    }

    /// Returns true if the version carries a pre-release component
    pub fn is_prerelease(&self) -> bool {
        !self.0.pre.is_empty()
    }
}

impl Ord for SemanticVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        // semver's Prerelease orders the empty pre-release above any non-empty one
        (self.0.major, self.0.minor, self.0.patch, &self.0.pre).cmp(&(
            other.0.major,
            other.0.minor,
            other.0.patch,
            &other.0.pre,
        ))
    }
}

impl PartialOrd for SemanticVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SemanticVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SemanticVersion {}

impl Hash for SemanticVersion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.major.hash(state);
        self.0.minor.hash(state);
        self.0.patch.hash(state);
        self.0.pre.hash(state);
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SemanticVersion {
    type Err = semver::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        semver::Version::parse(s.trim()).map(Self)
    }
}

impl Serialize for SemanticVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
