//! Error types for GG discovery and sub-application clients

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// What was missing on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingKind {
    Directory,
    File,
}

impl fmt::Display for MissingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingKind::Directory => write!(f, "directory"),
            MissingKind::File => write!(f, "file"),
        }
    }
}

/// GG errors
#[derive(Debug, Error)]
pub enum GgError {
    #[error("GG {kind} not found: {}", .path.display())]
    NotFound { kind: MissingKind, path: PathBuf },

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid GG config {}: {reason}", .path.display())]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("GG registry unavailable at {url}: {source}")]
    RegistryUnavailable {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("GG registry at {url} returned malformed data: {source}")]
    RegistryMalformed {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Sub-application not found in registry: {0}")]
    SubAppNotFound(String),

    #[error("Sub-application is disabled: {0}")]
    SubAppDisabled(String),

    #[error("Sub-application is not running: {0}")]
    SubAppNotRunning(String),

    #[error("Sub-application has no web server address: {0}")]
    EndpointMissing(String),

    #[error("Registry entry for sub-application {name} is malformed: {source}")]
    SubAppMalformed {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Hub session failed earlier: {0}")]
    SessionFailed(String),

    #[error("Failed to build HTTP transport: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Response from {url} is not valid JSON: {source}")]
    ResponseMalformed {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl GgError {
    pub fn not_found(kind: MissingKind, path: impl Into<PathBuf>) -> Self {
        GgError::NotFound {
            kind,
            path: path.into(),
        }
    }

    pub fn config_invalid(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        GgError::ConfigInvalid {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Name of the sub-application a resolution error refers to
    pub fn sub_app(&self) -> Option<&str> {
        match self {
            GgError::SubAppNotFound(name)
            | GgError::SubAppDisabled(name)
            | GgError::SubAppNotRunning(name)
            | GgError::EndpointMissing(name)
            | GgError::SubAppMalformed { name, .. } => Some(name),
            _ => None,
        }
    }
}

/// Result type for GG operations
pub type GgResult<T> = Result<T, GgError>;
