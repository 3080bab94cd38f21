//! Diagnostic reporting for per-repository failures
//!
//! Tag discovery never fails the run; instead it hands what went wrong to a
//! [`DiagnosticSink`]. The default sink forwards to `tracing`, and
//! [`CollectingSink`] keeps diagnostics in memory so callers can inspect them.

use std::fmt;
use std::sync::Mutex;
use tracing::{error, warn};

/// Severity of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// A single reported problem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// How serious the problem is
    pub severity: Severity,
    /// Repository the problem relates to
    pub repository_url: String,
    /// Human-readable description
    pub message: String,
}

impl Diagnostic {
    /// Create an error diagnostic
    pub fn error(repository_url: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            repository_url: repository_url.into(),
            message: message.into(),
        }
    }

    /// Create a warning diagnostic
    pub fn warning(repository_url: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            repository_url: repository_url.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.repository_url, self.message)
    }
}

/// Receiver for diagnostics raised while checking pins
pub trait DiagnosticSink: Send + Sync {
    /// Record a diagnostic
    fn report(&self, diagnostic: Diagnostic);
}

/// Sink that emits diagnostics as `tracing` events
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Warning => warn!(
                repository = %diagnostic.repository_url,
                "{}", diagnostic.message
            ),
            Severity::Error => error!(
                repository = %diagnostic.repository_url,
                "{}", diagnostic.message
            ),
        }
    }
}

/// Sink that stores diagnostics in memory
#[derive(Debug, Default)]
pub struct CollectingSink {
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the diagnostics reported so far
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Number of diagnostics reported so far
    pub fn len(&self) -> usize {
        self.diagnostics
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    /// Returns true if nothing has been reported
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, diagnostic: Diagnostic) {
        self.diagnostics
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(diagnostic);
    }
}
