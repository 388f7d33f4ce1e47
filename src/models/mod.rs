//! Data models for GG discovery
//!
//! Hub configuration as read from disk and the crate error type.

mod core_props;
mod error;

pub use core_props::*;
pub use error::*;
