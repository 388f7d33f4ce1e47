//! Hub configuration read from GG's `coreProps.json`

use serde::Deserialize;
use std::path::Path;

use super::{GgError, GgResult};

/// Raw shape of `coreProps.json`. Every field is optional on disk.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoreProps {
    #[serde(rename = "encryptedAddress")]
    pub encrypted_address: Option<String>,
    /// Despite the name this holds a plain `host:port` string
    #[serde(rename = "ggEncryptedAddress")]
    pub gg_encrypted_address: Option<String>,
    #[serde(rename = "address")]
    pub address: Option<String>,
}

/// Validated hub configuration
///
/// Only constructed once the hub address is known to be non-empty, so holders
/// never need to re-check it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HubConfig {
    encrypted_address: Option<String>,
    hub_address: String,
    address: Option<String>,
}

impl HubConfig {
    /// Validate props read from `path`
    pub fn from_props(props: CoreProps, path: &Path) -> GgResult<Self> {
        let hub_address = match props.gg_encrypted_address {
            Some(addr) if !addr.trim().is_empty() => addr.trim().to_string(),
            Some(_) => return Err(GgError::config_invalid(path, "ggEncryptedAddress is empty")),
            None => return Err(GgError::config_invalid(path, "ggEncryptedAddress is missing")),
        };

        Ok(Self {
            encrypted_address: props.encrypted_address,
            hub_address,
            address: props.address,
        })
    }

    /// `host:port` of the hub control API (no scheme)
    pub fn hub_address(&self) -> &str {
        &self.hub_address
    }

    pub fn encrypted_address(&self) -> Option<&str> {
        self.encrypted_address.as_deref()
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }
}
