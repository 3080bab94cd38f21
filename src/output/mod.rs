//! Output formatting for check results
//!
//! This module provides:
//! - Text output for human-readable display
//! - JSON output for machine processing
//! - Xcode build-log warnings for run script phases

mod json;
mod text;
mod xcode;

pub use json::JsonFormatter;
pub use text::TextFormatter;
pub use xcode::XcodeFormatter;

use crate::cli::CliArgs;
use crate::domain::OutdatedSummary;
use std::io::Write;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Text,
    /// JSON output for machine processing
    Json,
    /// `warning:` lines understood by Xcode
    Xcode,
}

/// Output verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Outdated packages only
    Quiet,
    #[default]
    Normal,
    /// Also lists up-to-date packages
    Verbose,
}

/// Configuration for output formatting
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub verbosity: Verbosity,
}

impl OutputConfig {
    pub fn new(format: OutputFormat, verbosity: Verbosity) -> Self {
        Self { format, verbosity }
    }

    /// Create configuration from CLI arguments
    pub fn from_cli(args: &CliArgs) -> Self {
        let format = if args.json {
            OutputFormat::Json
        } else if args.xcode {
            OutputFormat::Xcode
        } else {
            OutputFormat::Text
        };

        let verbosity = if args.quiet {
            Verbosity::Quiet
        } else if args.verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        };

        Self { format, verbosity }
    }
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and write the check result
    fn format(&self, summary: &OutdatedSummary, writer: &mut dyn Write) -> std::io::Result<()>;
}

/// Create an output formatter based on configuration
pub fn create_formatter(config: OutputConfig) -> Box<dyn OutputFormatter> {
    match config.format {
        OutputFormat::Text => Box::new(TextFormatter::new(config.verbosity)),
        OutputFormat::Json => Box::new(JsonFormatter::new()),
        OutputFormat::Xcode => Box::new(XcodeFormatter::new()),
    }
}
