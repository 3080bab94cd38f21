//! Check orchestrator for coordinating the entire outdated workflow
//!
//! This module provides:
//! - Workflow coordination: locate → read → parse → filter → discover → judge
//! - Parallel tag discovery bounded by a semaphore, once per repository URL
//! - Per-repository failure isolation (a failed listing only makes its pins unknown)

use crate::check::{evaluate, PinFilter};
use crate::cli::{CliArgs, DEFAULT_JOBS};
use crate::domain::{OutdatedSummary, Pin, SemanticVersion};
use crate::error::{AppError, ConfigError};
use crate::lockfile;
use crate::progress::Progress;
use crate::remote::{GitTagLister, TagDiscovery, DEFAULT_TIMEOUT};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, error, info};

/// Configuration for the orchestrator
#[derive(Debug, Clone)]
pub struct OrchestratorConfig {
    /// Maximum concurrent tag listings
    pub jobs: usize,
    /// Timeout for listing one repository
    pub timeout: Duration,
    /// Which pins to check
    pub filter: PinFilter,
    /// Whether to draw a progress bar
    pub show_progress: bool,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            jobs: DEFAULT_JOBS,
            timeout: DEFAULT_TIMEOUT,
            filter: PinFilter::new(),
            show_progress: false,
        }
    }
}

impl OrchestratorConfig {
    /// Build the configuration from CLI arguments
    pub fn from_cli(args: &CliArgs) -> Self {
        Self {
            jobs: args.jobs,
            timeout: args.timeout(),
            filter: PinFilter::new()
                .with_ignore(args.ignore.clone())
                .with_only(args.only.clone()),
            show_progress: args.show_progress(),
        }
    }

    /// Reject settings the orchestrator cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jobs == 0 {
            return Err(ConfigError::InvalidJobs {
                value: self.jobs.to_string(),
            });
        }
        if self.timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout {
                value: self.timeout.as_secs().to_string(),
            });
        }
        Ok(())
    }
}

/// Orchestrator for coordinating the outdated check
pub struct Orchestrator {
    config: OrchestratorConfig,
    discovery: TagDiscovery,
    semaphore: Arc<Semaphore>,
}

impl Orchestrator {
    /// Create an orchestrator that lists tags with `git ls-remote`
    pub fn new(config: OrchestratorConfig) -> Result<Self, ConfigError> {
        let lister = GitTagLister::new().with_timeout(config.timeout);
        Self::with_discovery(config, TagDiscovery::with_lister(Arc::new(lister)))
    }

    /// Create an orchestrator with a custom tag discovery (for testing)
    pub fn with_discovery(
        config: OrchestratorConfig,
        discovery: TagDiscovery,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let semaphore = Arc::new(Semaphore::new(config.jobs));
        Ok(Self {
            config,
            discovery,
            semaphore,
        })
    }

    /// Check the lock file found in `dir`.
    ///
    /// Only locating and reading the lock file can fail; per-repository
    /// problems degrade to unknown results.
    pub async fn run(&self, dir: &Path) -> Result<OutdatedSummary, AppError> {
        let mut progress = Progress::new(self.config.show_progress);

        progress.spinner("Reading Package.resolved...");
        let loaded = lockfile::load(dir);
        progress.finish_and_clear();

        let (path, pins) = loaded?;
        info!("checking {} pins from {}", pins.len(), path.display());

        Ok(self.check_pins(path, pins).await)
    }

    /// Check already parsed pins
    pub async fn check_pins(
        &self,
        lock_file: impl Into<PathBuf>,
        pins: Vec<Pin>,
    ) -> OutdatedSummary {
        let pins = self.config.filter.apply(pins);
        let versions = self.discover_all(&pins).await;

        let mut summary = OutdatedSummary::new(lock_file);
        for pin in pins {
            let available = versions
                .get(&pin.repository_url)
                .map(Vec::as_slice)
                .unwrap_or_default();
            let report = evaluate(pin, available);
            debug!("{}: {}", report.pin, report.status);
            summary.add_report(report);
        }
        summary
    }

    /// Discover versions for every distinct repository of `pins`
    async fn discover_all(&self, pins: &[Pin]) -> HashMap<String, Vec<SemanticVersion>> {
        let mut urls: Vec<&str> = Vec::new();
        for pin in pins {
            if !urls.contains(&pin.repository_url.as_str()) {
                urls.push(&pin.repository_url);
            }
        }

        let mut progress = Progress::new(self.config.show_progress);
        progress.start(urls.len() as u64, "Listing tags");

        let mut tasks = JoinSet::new();
        for url in urls {
            let url = url.to_string();
            let discovery = self.discovery.clone();
            let semaphore = Arc::clone(&self.semaphore);
            tasks.spawn(async move {
                let Ok(_permit) = semaphore.acquire_owned().await else {
                    return (url, Vec::new());
                };
                let versions = discovery.available_versions(&url).await;
                (url, versions)
            });
        }

        let mut versions = HashMap::new();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((url, found)) => {
                    progress.set_message(&url);
                    versions.insert(url, found);
                }
                Err(e) => error!("tag discovery task failed: {}", e),
            }
            progress.inc();
        }
        progress.finish_and_clear();

        versions
    }
}
