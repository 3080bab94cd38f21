//! Package filter configuration
//!
//! Decides which pins are checked at all. Package identities are matched
//! case-insensitively, since v1 lock files record display names and v2 files
//! record lowercase identities for the same packages.

use crate::domain::Pin;

/// Filter configuration for pins
#[derive(Debug, Clone, Default)]
pub struct PinFilter {
    /// Packages to skip
    pub ignore: Vec<String>,
    /// If non-empty, only check these packages
    pub only: Vec<String>,
}

impl PinFilter {
    /// Create a new PinFilter that keeps every pin
    pub fn new() -> Self {
        Self::default()
    }

    /// Set packages to ignore
    pub fn with_ignore(mut self, ignore: Vec<String>) -> Self {
        self.ignore = ignore;
        self
    }

    /// Set packages to include (only list)
    pub fn with_only(mut self, only: Vec<String>) -> Self {
        self.only = only;
        self
    }

    /// Check if a package should be checked
    pub fn should_check_package(&self, name: &str) -> bool {
        if !self.only.is_empty() {
            return self.only.iter().any(|p| p.eq_ignore_ascii_case(name));
        }
        !self.ignore.iter().any(|p| p.eq_ignore_ascii_case(name))
    }

    /// Check if a pin should be checked
    pub fn should_check(&self, pin: &Pin) -> bool {
        self.should_check_package(&pin.package)
    }

    /// Keep only the pins that pass the filter, preserving order
    pub fn apply(&self, pins: Vec<Pin>) -> Vec<Pin> {
        pins.into_iter().filter(|p| self.should_check(p)).collect()
    }
}
