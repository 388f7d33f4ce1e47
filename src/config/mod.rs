//! Configuration for the `gg-probe` binary
//!
//! Supports loading configuration from TOML files and environment variables.

mod settings;

pub use settings::*;
