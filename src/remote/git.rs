//! `git ls-remote` backed tag lister

use super::TagLister;
use crate::error::RemoteError;
use async_trait::async_trait;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::trace;

/// Default timeout in seconds for a single `git ls-remote` call
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default timeout for a single `git ls-remote` call
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(DEFAULT_TIMEOUT_SECS);

/// Default git executable
const DEFAULT_PROGRAM: &str = "git";

/// Lists tags by running `git ls-remote --tags <url>`
#[derive(Debug, Clone)]
pub struct GitTagLister {
    program: String,
    timeout: Duration,
}

impl GitTagLister {
    /// Create a lister using `git` from `PATH` and the default timeout
    pub fn new() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the per-repository timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Use a different git executable
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for GitTagLister {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TagLister for GitTagLister {
    async fn list_tags(&self, url: &str) -> Result<Vec<String>, RemoteError> {
        // Keep the URL from being read as a git option
        if url.starts_with('-') {
            return Err(RemoteError::invalid_url(url));
        }

        trace!("running {} ls-remote --tags {}", self.program, url);

        let mut command = Command::new(&self.program);
        command
            .args(["ls-remote", "--tags", url])
            .env("GIT_TERMINAL_PROMPT", "0")
            .stdin(Stdio::null())
            .kill_on_drop(true);

        let output = match tokio::time::timeout(self.timeout, command.output()).await {
            Ok(result) => result.map_err(|e| RemoteError::spawn(&self.program, url, e))?,
            Err(_) => return Err(RemoteError::timeout(url, self.timeout)),
        };

        if !output.status.success() {
            return Err(RemoteError::failed(
                url,
                output.status.to_string(),
                String::from_utf8_lossy(&output.stderr).trim(),
            ));
        }

        let stdout = String::from_utf8(output.stdout)
            .map_err(|e| RemoteError::invalid_output(url, e.to_string()))?;

        Ok(stdout.lines().map(str::to_string).collect())
    }
}
