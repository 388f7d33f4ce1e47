//! Registry client for the GG hub control API

use tracing::debug;

use super::{HubTransport, RegistryDocument};
use crate::models::{GgError, GgResult};

/// Path of the sub-application registry on the hub
pub const SUB_APPS_PATH: &str = "/subApps";

/// Fetches the sub-application registry from a hub. No retries.
#[derive(Debug, Clone)]
pub struct RegistryClient {
    transport: HubTransport,
}

impl RegistryClient {
    pub fn new(transport: HubTransport) -> Self {
        Self { transport }
    }

    /// GET `{scheme}://{address}/subApps`
    pub async fn fetch(&self, address: &str) -> GgResult<RegistryDocument> {
        let url = format!("{}{}", self.transport.base_url(address), SUB_APPS_PATH);
        debug!("Fetching sub-app registry from {}", url);

        let response = self
            .transport
            .http_client()
            .get(&url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|source| GgError::RegistryUnavailable {
                url: url.clone(),
                source,
            })?;

        let body = response
            .text()
            .await
            .map_err(|source| GgError::RegistryUnavailable {
                url: url.clone(),
                source,
            })?;

        RegistryDocument::from_json(&body).map_err(|source| GgError::RegistryMalformed { url, source })
    }
}
