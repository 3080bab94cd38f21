//! JSON output formatter for machine processing
//!
//! Pins are grouped by status; every entry keeps the lock file's own key names
//! (`package`, `repositoryURL`, `revision`, `version`) plus `latest` when known.

use crate::domain::{OutdatedSummary, Pin, PinStatus, SemanticVersion};
use crate::output::OutputFormatter;
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
#[derive(Debug, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }

    fn entries(summary: &OutdatedSummary, status: PinStatus) -> Vec<JsonPin<'_>> {
        summary
            .with_status(status)
            .map(|report| JsonPin {
                pin: &report.pin,
                latest: report.latest.as_ref(),
            })
            .collect()
    }
}

/// JSON representation of the full result
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonOutput<'a> {
    lock_file: String,
    outdated: Vec<JsonPin<'a>>,
    up_to_date: Vec<JsonPin<'a>>,
    not_version_pinned: Vec<JsonPin<'a>>,
    unknown: Vec<JsonPin<'a>>,
}

/// JSON representation of one pin
#[derive(Serialize)]
struct JsonPin<'a> {
    #[serde(flatten)]
    pin: &'a Pin,
    #[serde(skip_serializing_if = "Option::is_none")]
    latest: Option<&'a SemanticVersion>,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, summary: &OutdatedSummary, writer: &mut dyn Write) -> std::io::Result<()> {
        let output = JsonOutput {
            lock_file: summary.lock_file().display().to_string(),
            outdated: Self::entries(summary, PinStatus::Outdated),
            up_to_date: Self::entries(summary, PinStatus::UpToDate),
            not_version_pinned: Self::entries(summary, PinStatus::NotVersionPinned),
            unknown: Self::entries(summary, PinStatus::Unknown),
        };

        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PinReport;
    use serde_json::Value;

    fn v(s: &str) -> SemanticVersion {
        SemanticVersion::parse(s).unwrap()
    }

    fn render(summary: &OutdatedSummary) -> Value {
        let mut out = Vec::new();
        JsonFormatter::new().format(summary, &mut out).unwrap();
        serde_json::from_slice(&out).unwrap()
    }

    #[test]
    fn test_empty_summary() {
        let json = render(&OutdatedSummary::new("App/Package.resolved"));

        assert_eq!(json["lockFile"], "App/Package.resolved");
        for key in ["outdated", "upToDate", "notVersionPinned", "unknown"] {
            assert_eq!(json[key], Value::Array(vec![]), "{}", key);
        }
    }

    #[test]
    fn test_entries_are_grouped_by_status() {
        let mut summary = OutdatedSummary::new("Package.resolved");
        summary.add_report(PinReport::new(
            Pin::new("swift-nio", "https://github.com/apple/swift-nio.git")
                .with_revision("6213ba7a06febe8fef60563a4a7d26a4085783cf")
                .with_version(v("2.40.0")),
            PinStatus::Outdated,
            Some(v("2.60.0")),
        ));
        summary.add_report(PinReport::new(
            Pin::new("Files", "https://github.com/JohnSundell/Files.git").with_revision("d273b5b"),
            PinStatus::NotVersionPinned,
            None,
        ));

        let json = render(&summary);

        let outdated = &json["outdated"][0];
        assert_eq!(outdated["package"], "swift-nio");
        assert_eq!(outdated["repositoryURL"], "https://github.com/apple/swift-nio.git");
        assert_eq!(outdated["revision"], "6213ba7a06febe8fef60563a4a7d26a4085783cf");
        assert_eq!(outdated["version"], "2.40.0");
        assert_eq!(outdated["latest"], "2.60.0");

        let pinned = &json["notVersionPinned"][0];
        assert_eq!(pinned["package"], "Files");
        assert!(pinned.get("version").is_none());
        assert!(pinned.get("latest").is_none());

        assert_eq!(json["upToDate"], Value::Array(vec![]));
    }
}
