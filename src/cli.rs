//! CLI argument parsing module for swift-outdated

use crate::error::ConfigError;
use crate::remote::DEFAULT_TIMEOUT_SECS;
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use std::time::Duration;

/// Default number of concurrent `git ls-remote` calls
pub const DEFAULT_JOBS: usize = 10;

/// Exit status for `--fail-on-outdated`; 1 is a fatal error and 2 a usage error
pub const OUTDATED_EXIT_CODE: u8 = 3;

/// Parse a job count of at least 1
fn parse_jobs(s: &str) -> Result<usize, ConfigError> {
    match s.trim().parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(ConfigError::InvalidJobs {
            value: s.to_string(),
        }),
    }
}

/// Parse a timeout given in whole seconds
fn parse_timeout(s: &str) -> Result<u64, ConfigError> {
    match s.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(ConfigError::InvalidTimeout {
            value: s.to_string(),
        }),
    }
}

/// Check Swift package manager dependencies for newer tagged releases
#[derive(Parser, Debug, Clone)]
#[command(
    name = "swift-outdated",
    version,
    about = "Check for outdated Swift package manager dependencies"
)]
pub struct CliArgs {
    /// Package or Xcode project directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    // Package filters
    /// Skip a package (can be specified multiple times)
    #[arg(long, action = ArgAction::Append)]
    pub ignore: Vec<String>,

    /// Check only specific packages (can be specified multiple times)
    #[arg(long, action = ArgAction::Append)]
    pub only: Vec<String>,

    // Output options
    /// Output results in JSON format
    #[arg(long, conflicts_with = "xcode")]
    pub json: bool,

    /// Output outdated packages as Xcode build warnings
    #[arg(long)]
    pub xcode: bool,

    /// Enable verbose output (lists up-to-date packages, debug logging)
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable quiet mode - only outdated packages, no progress
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    // Remote options
    /// Maximum number of repositories queried at once
    #[arg(short, long, default_value_t = DEFAULT_JOBS, value_parser = parse_jobs)]
    pub jobs: usize,

    /// Timeout in seconds for listing the tags of one repository
    #[arg(
        long = "timeout",
        value_name = "SECS",
        default_value_t = DEFAULT_TIMEOUT_SECS,
        value_parser = parse_timeout
    )]
    pub timeout_secs: u64,

    // Exit status
    /// Exit with status 3 when any package is outdated
    #[arg(long)]
    pub fail_on_outdated: bool,
}

impl CliArgs {
    /// Check if output is meant for machines rather than a terminal
    pub fn is_machine_readable(&self) -> bool {
        self.json || self.xcode
    }

    /// Per-repository timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if the progress bar should be shown
    pub fn show_progress(&self) -> bool {
        !self.quiet && !self.is_machine_readable()
    }
}
