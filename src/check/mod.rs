//! Outdated judgment for pins
//!
//! A pin is outdated when its resolved version is strictly older than the
//! newest version tagged in its repository. Pins without a version, and pins
//! whose repository yielded no versions, get no verdict.

mod filter;

pub use filter::PinFilter;

use crate::domain::{Pin, PinReport, PinStatus, SemanticVersion};

/// Tri-state outdated check: `None` when the pin has no version or no versions are known
pub fn is_outdated(pin: &Pin, available_versions: &[SemanticVersion]) -> Option<bool> {
    let current = pin.version.as_ref()?;
    let latest = available_versions.iter().max()?;
    Some(current < latest)
}

/// Build the report for a pin from the versions found for its repository
pub fn evaluate(pin: Pin, available_versions: &[SemanticVersion]) -> PinReport {
    let latest = available_versions.iter().max().cloned();

    let status = if !pin.has_resolved_version() {
        PinStatus::NotVersionPinned
    } else {
        match is_outdated(&pin, available_versions) {
            Some(true) => PinStatus::Outdated,
            Some(false) => PinStatus::UpToDate,
            None => PinStatus::Unknown,
        }
    };

    PinReport::new(pin, status, latest)
}
