//! `Package.resolved` detection
//!
//! Search order, first match wins:
//! 1. `Package.resolved` in the directory
//! 2. `.package.resolved` in the directory
//! 3. `<*xcworkspace>/xcshareddata/swiftpm/Package.resolved`
//! 4. `<*xcodeproj>/project.xcworkspace/xcshareddata/swiftpm/Package.resolved`
//!
//! Once a workspace or project bundle is found, its nested lock file must
//! exist; the search does not fall through to the next tier.

use crate::error::LockFileError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Lock file name at the package root
pub const LOCK_FILE_NAME: &str = "Package.resolved";

/// Hidden variant of the lock file name
pub const HIDDEN_LOCK_FILE_NAME: &str = ".package.resolved";

const WORKSPACE_SUFFIX: &str = "xcworkspace";
const WORKSPACE_LOCK_PATH: &str = "xcshareddata/swiftpm/Package.resolved";

const PROJECT_SUFFIX: &str = "xcodeproj";
const PROJECT_LOCK_PATH: &str = "project.xcworkspace/xcshareddata/swiftpm/Package.resolved";

/// Find the lock file for the package or Xcode project in `dir`
pub fn locate(dir: &Path) -> Result<PathBuf, LockFileError> {
    for name in [LOCK_FILE_NAME, HIDDEN_LOCK_FILE_NAME] {
        let candidate = dir.join(name);
        if candidate.is_file() {
            debug!("found lock file {}", candidate.display());
            return Ok(candidate);
        }
    }

    let subdirs = subdirectories(dir);

    for (suffix, nested) in [
        (WORKSPACE_SUFFIX, WORKSPACE_LOCK_PATH),
        (PROJECT_SUFFIX, PROJECT_LOCK_PATH),
    ] {
        let Some(bundle) = first_with_suffix(&subdirs, suffix) else {
            continue;
        };

        let candidate = bundle.join(nested);
        if candidate.is_file() {
            debug!("found lock file {}", candidate.display());
            return Ok(candidate);
        }

        debug!("{} has no {}, giving up", bundle.display(), nested);
        return Err(LockFileError::not_found(dir));
    }

    Err(LockFileError::not_found(dir))
}

/// Read the raw bytes of a located lock file
pub fn read(path: &Path) -> Result<Vec<u8>, LockFileError> {
    std::fs::read(path).map_err(|e| LockFileError::not_readable(path, e))
}

/// Visible subdirectories of `dir`, ordered by name
fn subdirectories(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut dirs: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| !n.starts_with('.'))
        })
        .collect();
    dirs.sort();
    dirs
}

fn first_with_suffix<'a>(dirs: &'a [PathBuf], suffix: &str) -> Option<&'a PathBuf> {
    dirs.iter().find(|path| {
        path.file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.ends_with(suffix))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_file(root: &Path, relative: &str) -> PathBuf {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{}").unwrap();
        path
    }

    #[test]
    fn test_locate_root_lock_file() {
        let temp_dir = TempDir::new().unwrap();
        let expected = write_file(temp_dir.path(), "Package.resolved");

        assert_eq!(locate(temp_dir.path()).unwrap(), expected);
    }

    #[test]
    fn test_locate_hidden_lock_file() {
        let temp_dir = TempDir::new().unwrap();
        let expected = write_file(temp_dir.path(), ".package.resolved");

        assert_eq!(locate(temp_dir.path()).unwrap(), expected);
    }

    #[test]
    fn test_root_takes_precedence_over_hidden_and_bundles() {
        let temp_dir = TempDir::new().unwrap();
        let expected = write_file(temp_dir.path(), "Package.resolved");
        write_file(temp_dir.path(), ".package.resolved");
        write_file(
            temp_dir.path(),
            "App.xcworkspace/xcshareddata/swiftpm/Package.resolved",
        );

        assert_eq!(locate(temp_dir.path()).unwrap(), expected);
    }

    #[test]
    fn test_locate_in_workspace_bundle() {
        let temp_dir = TempDir::new().unwrap();
        let expected = write_file(
            temp_dir.path(),
            "App.xcworkspace/xcshareddata/swiftpm/Package.resolved",
        );

        assert_eq!(locate(temp_dir.path()).unwrap(), expected);
    }

    #[test]
    fn test_locate_in_project_bundle() {
        let temp_dir = TempDir::new().unwrap();
        let expected = write_file(
            temp_dir.path(),
            "App.xcodeproj/project.xcworkspace/xcshareddata/swiftpm/Package.resolved",
        );

        assert_eq!(locate(temp_dir.path()).unwrap(), expected);
    }

    #[test]
    fn test_workspace_without_lock_file_does_not_fall_through() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("App.xcworkspace")).unwrap();
        write_file(
            temp_dir.path(),
            "App.xcodeproj/project.xcworkspace/xcshareddata/swiftpm/Package.resolved",
        );

        let err = locate(temp_dir.path()).unwrap_err();
        assert!(matches!(err, LockFileError::NotFound { .. }));
    }

    #[test]
    fn test_project_without_lock_file_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("App.xcodeproj")).unwrap();

        let err = locate(temp_dir.path()).unwrap_err();
        assert!(matches!(err, LockFileError::NotFound { .. }));
    }

    #[test]
    fn test_empty_directory_is_not_found() {
        let temp_dir = TempDir::new().unwrap();

        let err = locate(temp_dir.path()).unwrap_err();
        assert!(matches!(err, LockFileError::NotFound { .. }));
    }

    #[test]
    fn test_directory_named_like_lock_file_is_ignored() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("Package.resolved")).unwrap();

        assert!(locate(temp_dir.path()).is_err());
    }

    #[test]
    fn test_first_bundle_by_name_wins() {
        let temp_dir = TempDir::new().unwrap();
        let expected = write_file(
            temp_dir.path(),
            "Alpha.xcworkspace/xcshareddata/swiftpm/Package.resolved",
        );
        write_file(
            temp_dir.path(),
            "Beta.xcworkspace/xcshareddata/swiftpm/Package.resolved",
        );

        assert_eq!(locate(temp_dir.path()).unwrap(), expected);
    }

    #[test]
    fn test_hidden_bundles_are_skipped() {
        let temp_dir = TempDir::new().unwrap();
        write_file(
            temp_dir.path(),
            ".Hidden.xcworkspace/xcshareddata/swiftpm/Package.resolved",
        );

        assert!(locate(temp_dir.path()).is_err());
    }

    #[test]
    fn test_missing_directory_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope");

        let err = locate(&missing).unwrap_err();
        assert!(matches!(err, LockFileError::NotFound { .. }));
    }

    #[test]
    fn test_read_returns_bytes() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_file(temp_dir.path(), "Package.resolved");

        assert_eq!(read(&path).unwrap(), b"{}");
    }

    #[test]
    fn test_read_missing_file_is_not_readable() {
        let temp_dir = TempDir::new().unwrap();
        let err = read(&temp_dir.path().join("Package.resolved")).unwrap_err();
        assert!(matches!(err, LockFileError::NotReadable { .. }));
    }

    #[test]
    fn test_read_existing_directory_is_not_readable() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Package.resolved");
        fs::create_dir(&path).unwrap();

        let err = read(&path).unwrap_err();
        assert!(matches!(err, LockFileError::NotReadable { .. }));
        assert!(err.to_string().starts_with("failed to read"));
    }
}
