//! Core domain models for swift-outdated
//!
//! This module contains the fundamental types used throughout the application:
//! - Semantic versions with build-metadata-insensitive ordering
//! - Pins read from `Package.resolved`
//! - Per-pin check results and the run summary

mod pin;
mod report;
mod summary;
mod version;

pub use pin::Pin;
pub use report::{PinReport, PinStatus};
pub use summary::OutdatedSummary;
pub use version::SemanticVersion;
