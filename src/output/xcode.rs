//! Xcode build-log output
//!
//! Xcode turns `warning:` lines printed by a run script phase into build
//! warnings, so only outdated pins are written.

use crate::domain::OutdatedSummary;
use crate::output::OutputFormatter;
use std::io::Write;

#[derive(Debug, Default)]
pub struct XcodeFormatter;

impl XcodeFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputFormatter for XcodeFormatter {
    fn format(&self, summary: &OutdatedSummary, writer: &mut dyn Write) -> std::io::Result<()> {
        for report in summary.outdated() {
            let (Some(current), Some(latest)) = (&report.pin.version, &report.latest) else {
                continue;
            };
            writeln!(
                writer,
                "warning: Dependency \"{}\" is outdated ({} < {})",
                report.pin.package, current, latest
            )?;
        }
        Ok(())
    }
}
