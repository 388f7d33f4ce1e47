//! GG hub discovery
//!
//! Reads the hub address from disk, fetches the sub-application registry and
//! resolves sub-application endpoints.

mod client;
mod props;
mod registry;
mod resolver;
mod transport;

pub use client::*;
pub use props::*;
pub use registry::*;
pub use resolver::*;
pub use transport::*;
