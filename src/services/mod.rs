//! Services built on top of GG discovery

mod hub_session;

pub use hub_session::*;
