//! Sonar (audio routing) sub-application client

use serde_json::Value;

use super::{SubApp, SubAppClient};
use crate::models::GgResult;

/// Thin client for the Sonar web API
#[derive(Debug, Clone)]
pub struct SonarClient {
    client: SubAppClient,
}

impl SubApp for SonarClient {
    const NAME: &'static str = "sonar";

    fn from_client(client: SubAppClient) -> Self {
        Self { client }
    }
}

impl SonarClient {
    pub fn endpoint(&self) -> &str {
        self.client.endpoint()
    }

    pub fn inner(&self) -> &SubAppClient {
        &self.client
    }

    /// Volume settings in classic (non-streamer) mode
    pub async fn volume_settings_classic(&self) -> GgResult<Value> {
        self.client.get_json("/volumeSettings/classic").await
    }

    /// Current Sonar mode
    pub async fn mode(&self) -> GgResult<Value> {
        self.client.get_json("/mode").await
    }
}
