//! SteelSeries GG discovery
//!
//! Client bootstrap for SteelSeries GG sub-applications:
//! - Reads the hub address from `coreProps.json`
//! - Fetches the hub's sub-application registry
//! - Resolves enabled, running sub-applications to clients bound to their endpoint

pub mod config;
pub mod models;
pub mod discovery;
pub mod services;
pub mod clients;

// Re-export commonly used types
pub use config::Settings;
pub use models::{GgError, GgResult, HubConfig, MissingKind};
pub use discovery::{HubTransport, HubTrust, RegistryDocument, Scheme, TransportOptions};
pub use services::{HubSession, SessionStatus};
pub use clients::{SonarClient, SubApp, SubAppClient};

/// Version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
