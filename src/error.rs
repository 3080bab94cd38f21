//! Application error types using thiserror
//!
//! Error hierarchy:
//! - LockFileError: the lock file could not be located or read (fatal)
//! - RemoteError: listing tags for one repository failed (isolated per pin)
//! - ConfigError: invalid runtime configuration

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Lock file related errors
    #[error(transparent)]
    LockFile(#[from] LockFileError),

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to locating and reading `Package.resolved`
#[derive(Error, Debug)]
pub enum LockFileError {
    /// No candidate lock file exists
    #[error("no Package.resolved found in {}", dir.display())]
    NotFound { dir: PathBuf },

    /// A candidate exists but its bytes could not be read
    #[error("failed to read {}: {source}", path.display())]
    NotReadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while listing the tags of a remote repository
#[derive(Error, Debug)]
pub enum RemoteError {
    /// The listing process could not be started
    #[error("failed to run {program} for {url}: {source}")]
    Spawn {
        program: String,
        url: String,
        #[source]
        source: std::io::Error,
    },

    /// The listing did not finish in time
    #[error("timed out after {}s listing tags for {url}", timeout.as_secs())]
    Timeout { url: String, timeout: Duration },

    /// The listing process exited unsuccessfully
    #[error("listing tags for {url} failed ({status}): {stderr}")]
    Failed {
        url: String,
        status: String,
        stderr: String,
    },

    /// The listing produced output that is not text
    #[error("invalid tag listing for {url}: {message}")]
    InvalidOutput { url: String, message: String },

    /// The repository URL cannot be passed to the lister safely
    #[error("refusing to list tags for '{url}': repository URL must not start with '-'")]
    InvalidUrl { url: String },
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Concurrency must allow at least one job
    #[error("invalid job count '{value}': expected a number of at least 1")]
    InvalidJobs { value: String },

    /// Timeout must be a positive number of seconds
    #[error("invalid timeout '{value}': expected a number of seconds greater than 0")]
    InvalidTimeout { value: String },
}

impl LockFileError {
    /// Creates a new NotFound error
    pub fn not_found(dir: impl Into<PathBuf>) -> Self {
        LockFileError::NotFound { dir: dir.into() }
    }

    /// Creates a new NotReadable error
    pub fn not_readable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LockFileError::NotReadable {
            path: path.into(),
            source,
        }
    }
}

impl RemoteError {
    /// Creates a new Spawn error
    pub fn spawn(
        program: impl Into<String>,
        url: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        RemoteError::Spawn {
            program: program.into(),
            url: url.into(),
            source,
        }
    }

    /// Creates a new Timeout error
    pub fn timeout(url: impl Into<String>, timeout: Duration) -> Self {
        RemoteError::Timeout {
            url: url.into(),
            timeout,
        }
    }

    /// Creates a new Failed error
    pub fn failed(
        url: impl Into<String>,
        status: impl Into<String>,
        stderr: impl Into<String>,
    ) -> Self {
        RemoteError::Failed {
            url: url.into(),
            status: status.into(),
            stderr: stderr.into(),
        }
    }

    /// Creates a new InvalidOutput error
    pub fn invalid_output(url: impl Into<String>, message: impl Into<String>) -> Self {
        RemoteError::InvalidOutput {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Creates a new InvalidUrl error
    pub fn invalid_url(url: impl Into<String>) -> Self {
        RemoteError::InvalidUrl { url: url.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lock_file_error_not_found() {
        let err = LockFileError::not_found("/path/to/project");
        let msg = format!("{}", err);
        assert_eq!(msg, "no Package.resolved found in /path/to/project");
    }

    #[test]
    fn test_lock_file_error_not_readable() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = LockFileError::not_readable("/p/Package.resolved", io_err);
        let msg = format!("{}", err);
        assert!(msg.contains("failed to read /p/Package.resolved"));
        assert!(msg.contains("denied"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_remote_error_spawn() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = RemoteError::spawn("git", "https://example.com/a.git", io_err);
        let msg = format!("{}", err);
        assert!(msg.contains("failed to run git"));
        assert!(msg.contains("https://example.com/a.git"));
    }

    #[test]
    fn test_remote_error_timeout() {
        let err = RemoteError::timeout("u", Duration::from_secs(30));
        assert_eq!(format!("{}", err), "timed out after 30s listing tags for u");
    }

    #[test]
    fn test_remote_error_failed() {
        let err = RemoteError::failed("u", "exit status: 128", "repository not found");
        let msg = format!("{}", err);
        assert!(msg.contains("exit status: 128"));
        assert!(msg.contains("repository not found"));
    }

    #[test]
    fn test_config_error_invalid_jobs() {
        let err = ConfigError::InvalidJobs {
            value: "0".to_string(),
        };
        assert!(format!("{}", err).contains("invalid job count '0'"));
    }

    #[test]
    fn test_app_error_from_lock_file_error() {
        let app_err: AppError = LockFileError::not_found("/missing").into();
        let msg = format!("{}", app_err);
        assert!(msg.contains("no Package.resolved found"));
    }

    #[test]
    fn test_error_debug_trait() {
        let err = LockFileError::not_found("/test");
        let debug = format!("{:?}", err);
        assert!(debug.contains("NotFound"));
    }
}
