//! `Package.resolved` schema adapters
//!
//! Each adapter knows one on-disk shape of the lock file. Adapters are tried
//! in registration order and the first one that decodes wins.

use crate::domain::Pin;
use serde::Deserialize;

/// Trait for decoding one lock file schema into pins
pub trait LockFileSchema: Send + Sync {
    /// Short name used in log output
    fn name(&self) -> &'static str;

    /// Decode the file, or `None` if the bytes are not in this schema
    fn try_decode(&self, bytes: &[u8]) -> Option<Vec<Pin>>;
}

#[derive(Debug, Deserialize)]
struct PinState {
    #[serde(default)]
    revision: Option<String>,
    #[serde(default)]
    version: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResolvedV1 {
    object: ResolvedV1Object,
}

#[derive(Debug, Deserialize)]
struct ResolvedV1Object {
    pins: Vec<ResolvedV1Pin>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResolvedV1Pin {
    package: String,
    #[serde(rename = "repositoryURL")]
    repository_url: String,
    state: PinState,
}

#[derive(Debug, Deserialize)]
struct ResolvedV2 {
    pins: Vec<ResolvedV2Pin>,
}

#[derive(Debug, Deserialize)]
struct ResolvedV2Pin {
    identity: String,
    location: String,
    state: PinState,
}

/// `{ "object": { "pins": [ { "package", "repositoryURL", "state" } ] } }`
#[derive(Debug, Default, Clone, Copy)]
pub struct ResolvedV1Schema;

impl LockFileSchema for ResolvedV1Schema {
    fn name(&self) -> &'static str {
        "v1"
    }

    fn try_decode(&self, bytes: &[u8]) -> Option<Vec<Pin>> {
        let resolved: ResolvedV1 = serde_json::from_slice(bytes).ok()?;
        Some(
            resolved
                .object
                .pins
                .into_iter()
                .map(|p| {
                    Pin::from_raw(
                        p.package,
                        p.repository_url,
                        p.state.revision,
                        p.state.version.as_deref(),
                    )
                })
                .collect(),
        )
    }
}

/// `{ "pins": [ { "identity", "location", "state" } ] }`, also used by version 3 files
#[derive(Debug, Default, Clone, Copy)]
pub struct ResolvedV2Schema;

impl LockFileSchema for ResolvedV2Schema {
    fn name(&self) -> &'static str {
        "v2"
    }

    fn try_decode(&self, bytes: &[u8]) -> Option<Vec<Pin>> {
        let resolved: ResolvedV2 = serde_json::from_slice(bytes).ok()?;
        Some(
            resolved
                .pins
                .into_iter()
                .map(|p| {
                    Pin::from_raw(
                        p.identity,
                        p.location,
                        p.state.revision,
                        p.state.version.as_deref(),
                    )
                })
                .collect(),
        )
    }
}

/// The built-in schemas in the order they are tried
pub fn default_schemas() -> Vec<Box<dyn LockFileSchema>> {
    vec![Box::new(ResolvedV1Schema), Box::new(ResolvedV2Schema)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SemanticVersion;

    const V1: &str = r#"{
        "object": {
            "pins": [
                {
                    "package": "swift-argument-parser",
                    "repositoryURL": "https://github.com/apple/swift-argument-parser",
                    "state": {
                        "branch": null,
                        "revision": "83b23d940471b313427da226196661856f6ba3e0",
                        "version": "0.4.4"
                    }
                },
                {
                    "package": "Files",
                    "repositoryURL": "https://github.com/JohnSundell/Files",
                    "state": {
                        "branch": "main",
                        "revision": "d273b5b7025d386feef79ef6bad7de762e106eaf",
                        "version": null
                    }
                }
            ]
        },
        "version": 1
    }"#;

    const V2: &str = r#"{
        "pins": [
            {
                "identity": "swift-log",
                "kind": "remoteSourceControl",
                "location": "https://github.com/apple/swift-log.git",
                "state": {
                    "revision": "6fe203dc33195667ce1759bf0182975e4653ba1c",
                    "version": "1.4.4"
                }
            }
        ],
        "version": 2
    }"#;

    #[test]
    fn test_v1_decodes_pins() {
        let pins = ResolvedV1Schema.try_decode(V1.as_bytes()).unwrap();
        assert_eq!(pins.len(), 2);

        assert_eq!(pins[0].package, "swift-argument-parser");
        assert_eq!(
            pins[0].repository_url,
            "https://github.com/apple/swift-argument-parser"
        );
        assert_eq!(
            pins[0].revision.as_deref(),
            Some("83b23d940471b313427da226196661856f6ba3e0")
        );
        assert_eq!(pins[0].version, Some(SemanticVersion::new(0, 4, 4)));

        assert_eq!(pins[1].package, "Files");
        assert!(pins[1].version.is_none());
        assert!(pins[1].revision.is_some());
    }

    #[test]
    fn test_v1_rejects_v2_shape() {
        assert!(ResolvedV1Schema.try_decode(V2.as_bytes()).is_none());
    }

    #[test]
    fn test_v2_decodes_pins() {
        let pins = ResolvedV2Schema.try_decode(V2.as_bytes()).unwrap();
        assert_eq!(pins.len(), 1);
        assert_eq!(pins[0].package, "swift-log");
        assert_eq!(pins[0].repository_url, "https://github.com/apple/swift-log.git");
        assert_eq!(pins[0].version, Some(SemanticVersion::new(1, 4, 4)));
    }

    #[test]
    fn test_v2_rejects_v1_shape() {
        assert!(ResolvedV2Schema.try_decode(V1.as_bytes()).is_none());
    }

    #[test]
    fn test_v2_accepts_version_3_files() {
        let v3 = r#"{
            "originHash": "0123",
            "pins": [
                {
                    "identity": "swift-nio",
                    "kind": "remoteSourceControl",
                    "location": "https://github.com/apple/swift-nio.git",
                    "state": { "revision": "abc", "version": "2.62.0" }
                }
            ],
            "version": 3
        }"#;
        let pins = ResolvedV2Schema.try_decode(v3.as_bytes()).unwrap();
        assert_eq!(pins[0].version, Some(SemanticVersion::new(2, 62, 0)));
    }

    #[test]
    fn test_missing_state_fields_are_absent() {
        let json = r#"{"pins": [{"identity": "a", "location": "u", "state": {}}]}"#;
        let pins = ResolvedV2Schema.try_decode(json.as_bytes()).unwrap();
        assert!(pins[0].revision.is_none());
        assert!(pins[0].version.is_none());
    }

    #[test]
    fn test_malformed_version_keeps_pin() {
        let json = r#"{"pins": [
            {"identity": "a", "location": "u", "state": {"version": "1.0"}},
            {"identity": "b", "location": "v", "state": {"version": "2.0.0"}}
        ]}"#;
        let pins = ResolvedV2Schema.try_decode(json.as_bytes()).unwrap();
        assert_eq!(pins.len(), 2);
        assert!(pins[0].version.is_none());
        assert_eq!(pins[1].version, Some(SemanticVersion::new(2, 0, 0)));
    }

    #[test]
    fn test_default_schema_order() {
        let names: Vec<_> = default_schemas().iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["v1", "v2"]);
    }
}
