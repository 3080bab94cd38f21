//! Outdated check result types

use super::{Pin, SemanticVersion};
use std::fmt;

/// Verdict for a single pin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PinStatus {
    /// A newer tagged release exists
    Outdated,
    /// The pinned version is the newest tagged release (or newer)
    UpToDate,
    /// The pin records a revision or branch only
    NotVersionPinned,
    /// No versions could be discovered for the repository
    Unknown,
}

impl fmt::Display for PinStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PinStatus::Outdated => write!(f, "outdated"),
            PinStatus::UpToDate => write!(f, "up to date"),
            PinStatus::NotVersionPinned => write!(f, "not a version pin"),
            PinStatus::Unknown => write!(f, "unknown"),
        }
    }
}

/// Result of checking one pin against its repository's tags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinReport {
    /// The pin as read from the lock file
    pub pin: Pin,
    /// Verdict for the pin
    pub status: PinStatus,
    /// Newest tagged version found, if any
    pub latest: Option<SemanticVersion>,
}

impl PinReport {
    /// Creates a new PinReport
    pub fn new(pin: Pin, status: PinStatus, latest: Option<SemanticVersion>) -> Self {
        Self {
            pin,
            status,
            latest,
        }
    }

    /// Tri-state outdated flag: `None` when the status is not a definite verdict
    pub fn is_outdated(&self) -> Option<bool> {
        match self.status {
            PinStatus::Outdated => Some(true),
            PinStatus::UpToDate => Some(false),
            PinStatus::NotVersionPinned | PinStatus::Unknown => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        assert_eq!(PinStatus::Outdated.to_string(), "outdated");
        assert_eq!(PinStatus::NotVersionPinned.to_string(), "not a version pin");
    }

    #[test]
    fn test_report_is_outdated() {
        let pin = Pin::new("a", "u");
        assert_eq!(
            PinReport::new(pin.clone(), PinStatus::Outdated, None).is_outdated(),
            Some(true)
        );
        assert_eq!(
            PinReport::new(pin.clone(), PinStatus::UpToDate, None).is_outdated(),
            Some(false)
        );
        assert_eq!(
            PinReport::new(pin, PinStatus::Unknown, None).is_outdated(),
            None
        );
    }
}
