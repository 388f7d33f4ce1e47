//! HTTP transport used to talk to the local GG hub and its sub-applications

use serde::Deserialize;
use std::fmt;
use std::time::Duration;

use crate::models::{GgError, GgResult};

/// URL scheme for hub and sub-application requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    #[default]
    Https,
    /// Plain HTTP, for local test servers only
    Http,
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scheme::Https => write!(f, "https"),
            Scheme::Http => write!(f, "http"),
        }
    }
}

/// Certificate trust policy
///
/// GG serves its APIs with a self-signed certificate. Accepting it is scoped to
/// transports built for the local hub and never applied to other clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HubTrust {
    /// Skip certificate-chain validation for the local hub
    #[default]
    AcceptSelfSigned,
    /// Validate against the platform root store
    SystemRoots,
}

/// Options for building a [`HubTransport`]
#[derive(Debug, Clone, Default)]
pub struct TransportOptions {
    pub scheme: Scheme,
    pub trust: HubTrust,
    /// Request timeout; `None` keeps the client default
    pub timeout: Option<Duration>,
}

impl TransportOptions {
    /// Plain HTTP options for talking to local test servers
    pub fn plain_http() -> Self {
        Self {
            scheme: Scheme::Http,
            ..Default::default()
        }
    }

    pub fn with_trust(mut self, trust: HubTrust) -> Self {
        self.trust = trust;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Cheaply cloneable HTTP handle bound to a scheme
#[derive(Clone)]
pub struct HubTransport {
    http_client: reqwest::Client,
    scheme: Scheme,
}

impl HubTransport {
    /// Build a transport with the given options
    pub fn new(options: &TransportOptions) -> GgResult<Self> {
        let mut builder = reqwest::Client::builder();

        if options.trust == HubTrust::AcceptSelfSigned {
            builder = builder.danger_accept_invalid_certs(true);
        }
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }

        let http_client = builder.build().map_err(GgError::Transport)?;

        Ok(Self {
            http_client,
            scheme: options.scheme,
        })
    }

    /// Wrap an already configured client
    pub fn from_client(http_client: reqwest::Client, scheme: Scheme) -> Self {
        Self {
            http_client,
            scheme,
        }
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    pub fn http_client(&self) -> &reqwest::Client {
        &self.http_client
    }

    /// Base URL for a `host:port` address. Addresses that already carry a
    /// scheme are kept as they are.
    pub fn base_url(&self, address: &str) -> String {
        let address = address.trim_end_matches('/');
        if address.contains("://") {
            address.to_string()
        } else {
            format!("{}://{}", self.scheme, address)
        }
    }
}

impl fmt::Debug for HubTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HubTransport")
            .field("scheme", &self.scheme)
            .finish()
    }
}
