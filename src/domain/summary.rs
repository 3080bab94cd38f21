//! Run-level summary of an outdated check
//!
//! Holds the per-pin reports in lock file order together with the path of
//! the lock file they were read from.

use super::{PinReport, PinStatus};
use std::path::{Path, PathBuf};

/// All pin reports produced for one lock file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutdatedSummary {
    /// Path of the lock file that was checked
    pub lock_file: PathBuf,
    /// Reports in lock file order
    pub reports: Vec<PinReport>,
}

impl OutdatedSummary {
    /// Creates an empty summary for a lock file
    pub fn new(lock_file: impl Into<PathBuf>) -> Self {
        Self {
            lock_file: lock_file.into(),
            reports: Vec::new(),
        }
    }

    /// Adds a pin report
    pub fn add_report(&mut self, report: PinReport) {
        self.reports.push(report);
    }

    /// Path of the lock file
    pub fn lock_file(&self) -> &Path {
        &self.lock_file
    }

    /// Reports with the given status, in lock file order
    pub fn with_status(&self, status: PinStatus) -> impl Iterator<Item = &PinReport> {
        self.reports.iter().filter(move |r| r.status == status)
    }

    /// Returns all outdated reports
    pub fn outdated(&self) -> impl Iterator<Item = &PinReport> {
        self.with_status(PinStatus::Outdated)
    }

    /// Number of reports with the given status
    pub fn count(&self, status: PinStatus) -> usize {
        self.with_status(status).count()
    }

    /// Number of outdated pins
    pub fn outdated_count(&self) -> usize {
        self.count(PinStatus::Outdated)
    }

    /// Total number of pins checked
    pub fn total(&self) -> usize {
        self.reports.len()
    }

    /// Returns true if any pin is outdated
    pub fn has_outdated(&self) -> bool {
        self.outdated_count() > 0
    }

    /// Returns true if the lock file contained no pins
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}
