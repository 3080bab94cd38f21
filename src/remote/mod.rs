//! Remote tag discovery
//!
//! This module provides:
//! - The `TagLister` seam for listing tags of a remote repository
//! - A `git ls-remote` backed lister
//! - Listing text processing (ref names, prefix normalization, peeled tags)
//! - `TagDiscovery`, which turns a repository URL into sorted versions and
//!   reports failures to a diagnostic sink instead of returning them

mod git;
mod tags;

pub use git::{GitTagLister, DEFAULT_TIMEOUT, DEFAULT_TIMEOUT_SECS};
pub use tags::{
    is_dereferenced, normalize_tag, parse_listing, ref_name, tag_names, DEREFERENCED_TAG_MARKER,
};

use crate::diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
use crate::domain::SemanticVersion;
use crate::error::RemoteError;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Trait for listing the tag refs of a remote repository
#[async_trait]
pub trait TagLister: Send + Sync {
    /// Raw `<hash>\t<ref>` lines for every tag of the repository
    async fn list_tags(&self, url: &str) -> Result<Vec<String>, RemoteError>;
}

/// Discovers released versions for repositories
#[derive(Clone)]
pub struct TagDiscovery {
    lister: Arc<dyn TagLister>,
    sink: Arc<dyn DiagnosticSink>,
}

impl TagDiscovery {
    /// Create a discovery that reports through the given sink
    pub fn new(lister: Arc<dyn TagLister>, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self { lister, sink }
    }

    /// Create a discovery that reports through `tracing`
    pub fn with_lister(lister: Arc<dyn TagLister>) -> Self {
        Self::new(lister, Arc::new(TracingSink))
    }

    /// Released versions of the repository, sorted ascending.
    ///
    /// Never fails: when the listing cannot be obtained the problem goes to
    /// the diagnostic sink and no versions are returned.
    pub async fn available_versions(&self, repository_url: &str) -> Vec<SemanticVersion> {
        let lines = match self.lister.list_tags(repository_url).await {
            Ok(lines) => lines,
            Err(e) => {
                self.sink.report(Diagnostic::error(repository_url, e.to_string()));
                return Vec::new();
            }
        };

        let versions = parse_listing(&lines);
        debug!(
            "{}: {} version tags out of {} listed refs",
            repository_url,
            versions.len(),
            lines.len()
        );

        if versions.is_empty() && !lines.is_empty() {
            self.sink.report(Diagnostic::warning(
                repository_url,
                "no semantic version tags found",
            ));
        }

        versions
    }
}

impl Default for TagDiscovery {
    fn default() -> Self {
        Self::with_lister(Arc::new(GitTagLister::new()))
    }
}
