//! Hub session
//!
//! Runs GG discovery once and hands out clients for registered
//! sub-applications. The registry snapshot taken during `initialize` is used
//! for every later resolution; create a new session to observe hub changes.

use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::clients::{SubApp, SubAppClient};
use crate::discovery::{
    default_props_dir, read_hub_config, resolve_endpoint, HubTransport, RegistryClient,
    RegistryDocument, TransportOptions,
};
use crate::models::{GgError, GgResult, HubConfig};

/// Observable lifecycle of a [`HubSession`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Uninitialized,
    Ready,
    Failed,
}

#[derive(Debug)]
enum SessionState {
    Uninitialized,
    Ready {
        config: HubConfig,
        registry: RegistryDocument,
    },
    Failed {
        reason: String,
    },
}

/// One-shot discovery session against the local GG hub
#[derive(Debug)]
pub struct HubSession {
    props_dir: PathBuf,
    options: TransportOptions,
    transport: Option<HubTransport>,
    state: SessionState,
}

impl HubSession {
    /// Session reading `coreProps.json` from the platform default directory
    pub fn new() -> Self {
        Self::with_dir(default_props_dir())
    }

    /// Session reading `coreProps.json` from `props_dir`
    pub fn with_dir(props_dir: impl Into<PathBuf>) -> Self {
        Self {
            props_dir: props_dir.into(),
            options: TransportOptions::default(),
            transport: None,
            state: SessionState::Uninitialized,
        }
    }

    /// Options for transports the session creates itself
    pub fn with_transport_options(mut self, options: TransportOptions) -> Self {
        self.options = options;
        self
    }

    /// Caller-owned transport used for the registry fetch
    pub fn with_transport(mut self, transport: HubTransport) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn props_dir(&self) -> &Path {
        &self.props_dir
    }

    pub fn status(&self) -> SessionStatus {
        match self.state {
            SessionState::Uninitialized => SessionStatus::Uninitialized,
            SessionState::Ready { .. } => SessionStatus::Ready,
            SessionState::Failed { .. } => SessionStatus::Failed,
        }
    }

    /// Hub config, once ready
    pub fn config(&self) -> Option<&HubConfig> {
        match &self.state {
            SessionState::Ready { config, .. } => Some(config),
            _ => None,
        }
    }

    /// Registry snapshot, once ready
    pub fn registry(&self) -> Option<&RegistryDocument> {
        match &self.state {
            SessionState::Ready { registry, .. } => Some(registry),
            _ => None,
        }
    }

    /// Read the hub config and fetch the registry.
    ///
    /// Does nothing once ready. A failure is final for this session: later
    /// calls return [`GgError::SessionFailed`] without touching disk or network.
    pub async fn initialize(&mut self) -> GgResult<()> {
        match &self.state {
            SessionState::Ready { .. } => return Ok(()),
            SessionState::Failed { reason } => return Err(GgError::SessionFailed(reason.clone())),
            SessionState::Uninitialized => {}
        }

        match self.discover().await {
            Ok((config, registry)) => {
                info!(
                    "GG hub at {} lists {} sub-apps",
                    config.hub_address(),
                    registry.len()
                );
                self.state = SessionState::Ready { config, registry };
                Ok(())
            }
            Err(e) => {
                warn!("GG discovery failed: {}", e);
                self.state = SessionState::Failed {
                    reason: e.to_string(),
                };
                Err(e)
            }
        }
    }

    async fn discover(&self) -> GgResult<(HubConfig, RegistryDocument)> {
        debug!("Discovering GG hub from {}", self.props_dir.display());

        let config = read_hub_config(&self.props_dir).await?;

        // An internally built transport is dropped once the fetch completes
        let transport = match &self.transport {
            Some(transport) => transport.clone(),
            None => HubTransport::new(&self.options)?,
        };

        let registry = RegistryClient::new(transport)
            .fetch(config.hub_address())
            .await?;

        Ok((config, registry))
    }

    /// Client for the sub-application `name`.
    ///
    /// Initializes the session first if needed. `transport` is used for the
    /// client when given; otherwise a new one is built with the session's
    /// transport options. Resolution failures leave the session ready.
    pub async fn sub_app_client(
        &mut self,
        name: &str,
        transport: Option<HubTransport>,
    ) -> GgResult<SubAppClient> {
        self.initialize().await?;

        let SessionState::Ready { registry, .. } = &self.state else {
            return Err(GgError::SessionFailed(format!(
                "session not ready while resolving {}",
                name
            )));
        };

        let endpoint = resolve_endpoint(registry, name)?;

        let transport = match transport {
            Some(transport) => transport,
            None => HubTransport::new(&self.options)?,
        };

        Ok(SubAppClient::new(endpoint, transport))
    }

    /// Typed client for a known sub-application
    pub async fn client<S: SubApp>(&mut self) -> GgResult<S> {
        self.sub_app_client(S::NAME, None).await.map(S::from_client)
    }
}

impl Default for HubSession {
    fn default() -> Self {
        Self::new()
    }
}
