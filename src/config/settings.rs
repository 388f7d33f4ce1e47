//! Probe configuration settings

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::discovery::{default_props_dir, HubTrust, Scheme, TransportOptions};

/// Main probe configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub hub: HubSettings,
    #[serde(default)]
    pub transport: TransportSettings,
    #[serde(default)]
    pub probe: ProbeSettings,
}

/// Where to find the hub
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HubSettings {
    /// Directory holding `coreProps.json` (platform default when unset)
    pub data_dir: Option<String>,
}

impl HubSettings {
    pub fn props_dir(&self) -> PathBuf {
        self.data_dir
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(default_props_dir)
    }
}

/// Transport settings
#[derive(Debug, Clone, Deserialize)]
pub struct TransportSettings {
    /// "https" or "http"
    #[serde(default)]
    pub scheme: Scheme,
    /// Accept the hub's self-signed certificate
    #[serde(default = "default_true")]
    pub accept_self_signed: bool,
    /// Request timeout in seconds
    pub timeout_sec: Option<u64>,
}

fn default_true() -> bool {
    true
}

impl Default for TransportSettings {
    fn default() -> Self {
        TransportSettings {
            scheme: Scheme::Https,
            accept_self_signed: true,
            timeout_sec: None,
        }
    }
}

impl TransportSettings {
    pub fn options(&self) -> TransportOptions {
        TransportOptions {
            scheme: self.scheme,
            trust: if self.accept_self_signed {
                HubTrust::AcceptSelfSigned
            } else {
                HubTrust::SystemRoots
            },
            timeout: self.timeout_sec.map(Duration::from_secs),
        }
    }
}

/// What the probe asks for
#[derive(Debug, Clone, Deserialize)]
pub struct ProbeSettings {
    /// Sub-application to resolve
    #[serde(default = "default_sub_app")]
    pub sub_app: String,
    /// Path to GET on the sub-application
    #[serde(default = "default_probe_path")]
    pub path: String,
}

fn default_sub_app() -> String {
    "sonar".to_string()
}

fn default_probe_path() -> String {
    "/volumeSettings/classic".to_string()
}

impl Default for ProbeSettings {
    fn default() -> Self {
        ProbeSettings {
            sub_app: default_sub_app(),
            path: default_probe_path(),
        }
    }
}

impl Settings {
    /// Load settings from file and environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("gg-probe")
    }

    /// Load settings from a specific config file path (without extension)
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let config_path = path.as_ref();

        let builder = Config::builder()
            .set_default("transport.scheme", "https")?
            .set_default("transport.accept_self_signed", true)?
            .set_default("probe.sub_app", default_sub_app())?
            .set_default("probe.path", default_probe_path())?
            // Add config file if it exists
            .add_source(File::with_name(config_path.to_str().unwrap_or("gg-probe")).required(false))
            // Add environment variables with prefix GG_PROBE_
            .add_source(Environment::with_prefix("GG_PROBE").separator("__"));

        builder.build()?.try_deserialize()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            hub: HubSettings::default(),
            transport: TransportSettings::default(),
            probe: ProbeSettings::default(),
        }
    }
}
