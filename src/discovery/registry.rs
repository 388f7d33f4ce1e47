//! Sub-application registry as reported by the GG hub
//!
//! The hub answers `GET /subApps` with
//! `{ "subApps": { "<name>": { "isEnabled", "isRunning", "metadata": { "webServerAddress" } } } }`.
//! The body must be a JSON object whose `subApps` (when present) is an object.
//! Each entry is projected into a typed record on lookup, so one badly shaped
//! entry only affects its own name. Unknown fields are ignored.

use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Availability flags and endpoint of one sub-application
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubAppDescriptor {
    pub is_enabled: bool,
    pub is_running: bool,
    pub web_server_address: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct SubAppRecord {
    #[serde(rename = "isEnabled", default)]
    is_enabled: Option<bool>,
    #[serde(rename = "isRunning", default)]
    is_running: Option<bool>,
    #[serde(default)]
    metadata: Option<SubAppMetadata>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct SubAppMetadata {
    #[serde(rename = "webServerAddress", default)]
    web_server_address: Option<String>,
}

impl SubAppRecord {
    fn descriptor(&self) -> SubAppDescriptor {
        SubAppDescriptor {
            is_enabled: self.is_enabled.unwrap_or(false),
            is_running: self.is_running.unwrap_or(false),
            web_server_address: self
                .metadata
                .as_ref()
                .and_then(|m| m.web_server_address.clone()),
        }
    }
}

/// Snapshot of the hub's sub-application registry
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistryDocument {
    #[serde(rename = "subApps", default)]
    sub_apps: Option<BTreeMap<String, Value>>,
}

impl RegistryDocument {
    /// Parse a registry body
    pub fn from_json(body: &str) -> serde_json::Result<Self> {
        serde_json::from_str(body)
    }

    /// Look up `subApps.<name>`. `Some(Err(_))` when the entry exists but
    /// does not have the expected shape.
    pub fn descriptor(&self, name: &str) -> Option<serde_json::Result<SubAppDescriptor>> {
        self.sub_apps
            .as_ref()
            .and_then(|apps| apps.get(name))
            .map(|entry| SubAppRecord::deserialize(entry).map(|record| record.descriptor()))
    }

    /// Names of every listed sub-application, sorted
    pub fn names(&self) -> Vec<&str> {
        self.sub_apps
            .as_ref()
            .map(|apps| apps.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.sub_apps.as_ref().map_or(0, BTreeMap::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_projection() {
        let doc = RegistryDocument::from_json(
            r#"{
                "subApps": {
                    "sonar": {
                        "isEnabled": true,
                        "isRunning": true,
                        "name": "sonar",
                        "metadata": { "webServerAddress": "127.0.0.1:8080", "encryptedWebServerAddress": "x" }
                    },
                    "engine": { "isEnabled": true, "isRunning": false, "metadata": {} }
                },
                "version": 3
            }"#,
        )
        .unwrap();

        assert_eq!(doc.len(), 2);
        assert_eq!(doc.names(), vec!["engine", "sonar"]);

        let sonar = doc.descriptor("sonar").unwrap().unwrap();
        assert!(sonar.is_enabled);
        assert!(sonar.is_running);
        assert_eq!(sonar.web_server_address.as_deref(), Some("127.0.0.1:8080"));

        let engine = doc.descriptor("engine").unwrap().unwrap();
        assert!(!engine.is_running);
        assert_eq!(engine.web_server_address, None);
    }

    #[test]
    fn test_missing_flags_default_to_false() {
        let doc = RegistryDocument::from_json(r#"{"subApps":{"moments":{"metadata":null}}}"#).unwrap();
        assert_eq!(
            doc.descriptor("moments").unwrap().unwrap(),
            SubAppDescriptor::default()
        );
    }

    #[test]
    fn test_no_sub_apps_key() {
        let doc = RegistryDocument::from_json("{}").unwrap();
        assert!(doc.is_empty());
        assert!(doc.descriptor("sonar").is_none());
    }

    #[test]
    fn test_malformed_body() {
        assert!(RegistryDocument::from_json("<html>").is_err());
        assert!(RegistryDocument::from_json(r#"{"subApps":[]}"#).is_err());
        assert!(RegistryDocument::from_json(r#"{"subApps":"sonar"}"#).is_err());
    }

    #[test]
    fn test_bad_entry_only_affects_its_name() {
        let doc = RegistryDocument::from_json(
            r#"{
                "subApps": {
                    "sonar": { "isEnabled": true, "isRunning": true, "metadata": { "webServerAddress": "127.0.0.1:8080" } },
                    "moments": { "isEnabled": true, "isRunning": false, "metadata": { "webServerAddress": 0 } },
                    "engine": { "isEnabled": "yes" },
                    "gamesense": null
                }
            }"#,
        )
        .unwrap();

        assert_eq!(doc.len(), 4);
        assert!(doc.descriptor("moments").unwrap().is_err());
        assert!(doc.descriptor("engine").unwrap().is_err());
        assert!(doc.descriptor("gamesense").unwrap().is_err());

        let sonar = doc.descriptor("sonar").unwrap().unwrap();
        assert_eq!(sonar.web_server_address.as_deref(), Some("127.0.0.1:8080"));
    }
}
