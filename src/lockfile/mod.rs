//! Lock file handling
//!
//! This module provides:
//! - Detection of `Package.resolved` in packages and Xcode bundles
//! - Schema adapters for the v1 and v2 lock file formats
//! - A parser that tries each schema in order

mod locator;
mod schema;

pub use locator::{locate, read, HIDDEN_LOCK_FILE_NAME, LOCK_FILE_NAME};
pub use schema::{default_schemas, LockFileSchema, ResolvedV1Schema, ResolvedV2Schema};

use crate::domain::Pin;
use crate::error::LockFileError;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Decodes lock file bytes with an ordered list of schema adapters
pub struct LockFileParser {
    schemas: Vec<Box<dyn LockFileSchema>>,
}

impl LockFileParser {
    /// Create a parser for the built-in schemas
    pub fn new() -> Self {
        Self::with_schemas(default_schemas())
    }

    /// Create a parser for a custom list of schemas
    pub fn with_schemas(schemas: Vec<Box<dyn LockFileSchema>>) -> Self {
        Self { schemas }
    }

    /// Decode pins with the first schema that accepts the bytes.
    ///
    /// Content that matches no schema yields no pins.
    pub fn parse(&self, bytes: &[u8]) -> Vec<Pin> {
        for schema in &self.schemas {
            if let Some(pins) = schema.try_decode(bytes) {
                debug!("decoded {} pins with schema {}", pins.len(), schema.name());
                return pins;
            }
        }

        warn!("lock file matched no known schema, treating it as empty");
        Vec::new()
    }
}

impl Default for LockFileParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode pins using the built-in schemas
pub fn parse_pins(bytes: &[u8]) -> Vec<Pin> {
    LockFileParser::new().parse(bytes)
}

/// Locate, read and parse the lock file for `dir`
pub fn load(dir: &Path) -> Result<(PathBuf, Vec<Pin>), LockFileError> {
    let path = locate(dir)?;
    let bytes = read(&path)?;
    Ok((path, parse_pins(&bytes)))
}
