//! Text output formatter for human-readable display
//!
//! This module provides:
//! - An aligned `Package | Current | Latest` table of outdated pins
//! - Optional sections for up-to-date, version-less and unknown pins
//! - A one-line summary

use crate::domain::{OutdatedSummary, PinReport, PinStatus};
use crate::output::{OutputFormatter, Verbosity};
use colored::Colorize;
use std::io::Write;

const HEADERS: [&str; 3] = ["Package", "Current", "Latest"];

/// Text formatter for human-readable output
pub struct TextFormatter {
    verbosity: Verbosity,
    color: bool,
}

impl TextFormatter {
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            color: true,
        }
    }

    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, color: bool) -> Self {
        Self { verbosity, color }
    }

    /// Cells for one table row; version-less pins show their short revision
    fn cells(report: &PinReport) -> [String; 3] {
        let current = match (&report.pin.version, report.pin.short_revision()) {
            (Some(version), _) => version.to_string(),
            (None, Some(revision)) => revision.to_string(),
            (None, None) => "-".to_string(),
        };
        let latest = report
            .latest
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_else(|| "-".to_string());
        [report.pin.package.clone(), current, latest]
    }

    fn write_section(
        &self,
        title: Option<&str>,
        reports: &[&PinReport],
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        if reports.is_empty() {
            return Ok(());
        }

        let rows: Vec<[String; 3]> = reports.iter().map(|r| Self::cells(r)).collect();
        let mut widths = HEADERS.map(str::len);
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        if let Some(title) = title {
            if self.color {
                writeln!(writer, "{}", format!("{}:", title).bold())?;
            } else {
                writeln!(writer, "{}:", title)?;
            }
        }

        let header = format!(
            "  {:w0$}  {:w1$}  {}",
            HEADERS[0],
            HEADERS[1],
            HEADERS[2],
            w0 = widths[0],
            w1 = widths[1]
        );
        if self.color {
            writeln!(writer, "{}", header.dimmed())?;
        } else {
            writeln!(writer, "{}", header)?;
        }

        for (report, [package, current, latest]) in reports.iter().zip(rows) {
            let package = format!("{:w$}", package, w = widths[0]);
            let current = format!("{:w$}", current, w = widths[1]);
            if self.color {
                let latest = match report.status {
                    PinStatus::Outdated => latest.green().bold(),
                    _ => latest.normal(),
                };
                let current = match report.status {
                    PinStatus::Outdated => current.yellow(),
                    PinStatus::NotVersionPinned => current.dimmed(),
                    _ => current.normal(),
                };
                writeln!(writer, "  {}  {}  {}", package.bold(), current, latest)?;
            } else {
                writeln!(writer, "  {}  {}  {}", package, current, latest)?;
            }
        }
        writeln!(writer)?;

        Ok(())
    }

    fn write_summary(
        &self,
        summary: &OutdatedSummary,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        if summary.is_empty() {
            return writeln!(writer, "No pins to check.");
        }

        let outdated = summary.outdated_count();
        let up_to_date = summary.count(PinStatus::UpToDate);
        let unknown = summary.count(PinStatus::Unknown);

        // Unknown pins never count as up to date
        if outdated == 0 && up_to_date > 0 && unknown == 0 {
            if self.color {
                writeln!(writer, "{}", "Everything is up to date.".green())?;
            } else {
                writeln!(writer, "Everything is up to date.")?;
            }
            return Ok(());
        }

        let line = format!(
            "{} outdated, {} up to date, {} not version pinned, {} unknown",
            outdated,
            up_to_date,
            summary.count(PinStatus::NotVersionPinned),
            unknown
        );
        if self.color && outdated > 0 {
            writeln!(writer, "{}", line.yellow())
        } else {
            writeln!(writer, "{}", line)
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, summary: &OutdatedSummary, writer: &mut dyn Write) -> std::io::Result<()> {
        let section = |status| summary.with_status(status).collect::<Vec<_>>();

        if self.verbosity == Verbosity::Quiet {
            return self.write_section(None, &section(PinStatus::Outdated), writer);
        }

        self.write_section(Some("Outdated"), &section(PinStatus::Outdated), writer)?;
        if self.verbosity == Verbosity::Verbose {
            self.write_section(Some("Up to date"), &section(PinStatus::UpToDate), writer)?;
        }
        self.write_section(
            Some("Not version pinned"),
            &section(PinStatus::NotVersionPinned),
            writer,
        )?;
        self.write_section(Some("Unknown"), &section(PinStatus::Unknown), writer)?;

        self.write_summary(summary, writer)
    }
}
