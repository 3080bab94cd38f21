//! swift-outdated - Outdated dependency checker for Swift package manager
//!
//! This library reads a `Package.resolved` lock file (v1, v2 or v3 layout),
//! lists the tags of every pinned repository with `git ls-remote`, and reports
//! which version pins have a newer semantic version tag:
//! - `lockfile`: locating and decoding the lock file
//! - `remote`: tag listing and version discovery
//! - `check`: filtering and the outdated judgment
//! - `orchestrator`: the concurrent end-to-end run

pub mod check;
pub mod cli;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod lockfile;
pub mod orchestrator;
pub mod output;
pub mod progress;
pub mod remote;
