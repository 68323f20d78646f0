//! Structured Embedding Tests
//!
//! Versions carried as a single string field inside larger documents.

use crate::common::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Release {
    channel: String,
    version: Version,
    #[serde(default)]
    minimum: Option<Version>,
}

#[test]
fn json_field_encodes_as_canonical_string() {
    let release = Release {
        channel: "stable".to_string(),
        version: Version::major_minor(2, 1),
        minimum: None,
    };
    let json = serde_json::to_value(&release).unwrap();
    assert_eq!(json["version"], serde_json::json!("2.1"));
    assert_eq!(json["minimum"], serde_json::Value::Null);
}

#[test]
fn json_field_decodes_leniently() {
    let release: Release =
        serde_json::from_str(r#"{"channel": "beta", "version": "v3.0-rc2"}"#).unwrap();
    assert_eq!(release.version.major(), 3);
    assert_eq!(release.version.minor(), Some(2));
    assert_eq!(release.minimum, None);
}

#[test]
fn json_field_missing_is_an_error() {
    let result = serde_json::from_str::<Release>(r#"{"channel": "beta"}"#);
    assert!(result.is_err());
}

#[test]
fn json_field_wrong_type_is_an_error() {
    let result = serde_json::from_str::<Release>(r#"{"channel": "beta", "version": 3}"#);
    assert!(result.is_err());
}

#[test]
fn toml_field_round_trips() {
    let text = "channel = \"stable\"\nversion = \"1.2.3\"\nminimum = \"1\"\n";
    let release: Release = toml::from_str(text).unwrap();
    assert_eq!(release.version, Version::full(1, 2, 3));
    assert_eq!(release.minimum.map(|v| v.to_string()), Some("1".to_string()));

    let rendered = toml::to_string(&release).unwrap();
    assert_eq!(rendered, text);
}

#[test]
fn versions_as_map_keys_merge_equal_values() {
    use std::collections::BTreeMap;

    let mut notes = BTreeMap::new();
    notes.insert(Version::parse("1"), "first");
    notes.insert(Version::parse("1.0.0"), "same release");
    notes.insert(Version::parse("1.1"), "second");

    assert_eq!(notes.len(), 2);
    assert_eq!(notes.get(&Version::major_only(1)), Some(&"same release"));
}

// ============================================================================
// HostManifest
// ============================================================================

#[test]
fn manifest_from_toml_and_json_agree() {
    let from_toml = HostManifest::from_toml("name = \"app\"\nversion = \"4.2\"").unwrap();
    let from_json = HostManifest::from_json(r#"{"name": "app", "version": "4.2"}"#).unwrap();
    assert_eq!(from_toml, from_json);
    assert_eq!(from_toml.version.map(|v| v.to_string()), Some("4.2".to_string()));
}

#[test]
fn manifest_non_string_version_is_rejected() {
    let err = HostManifest::from_json(r#"{"version": 4.2}"#).unwrap_err();
    assert!(matches!(err, Error::Serialization(_)));
    assert!(err.to_string().contains("Serialization error"));
}

#[test]
fn manifest_round_trips_through_toml() {
    let manifest = HostManifest::new("app", Version::full(0, 9, 12));
    let text = manifest.to_toml().unwrap();
    assert_eq!(HostManifest::from_toml(&text).unwrap(), manifest);
}
