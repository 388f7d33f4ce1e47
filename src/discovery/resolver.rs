//! Sub-application endpoint resolution

use tracing::{debug, warn};

use super::RegistryDocument;
use crate::models::{GgError, GgResult};

/// Resolve the endpoint of `name`.
///
/// Checks run in order and stop at the first failure: present, well formed,
/// enabled, running, has a web server address.
pub fn resolve_endpoint(registry: &RegistryDocument, name: &str) -> GgResult<String> {
    let descriptor = registry
        .descriptor(name)
        .ok_or_else(|| GgError::SubAppNotFound(name.to_string()))?
        .map_err(|source| {
            warn!("Registry entry for sub-app {} is malformed: {}", name, source);
            GgError::SubAppMalformed {
                name: name.to_string(),
                source,
            }
        })?;

    if !descriptor.is_enabled {
        warn!("Sub-app {} is disabled", name);
        return Err(GgError::SubAppDisabled(name.to_string()));
    }

    if !descriptor.is_running {
        warn!("Sub-app {} is not running", name);
        return Err(GgError::SubAppNotRunning(name.to_string()));
    }

    let endpoint = descriptor
        .web_server_address
        .map(|addr| addr.trim().to_string())
        .filter(|addr| !addr.is_empty())
        .ok_or_else(|| GgError::EndpointMissing(name.to_string()))?;

    debug!("Resolved sub-app {} to {}", name, endpoint);
    Ok(endpoint)
}
