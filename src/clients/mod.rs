//! Clients for GG sub-applications

mod sonar;
mod sub_app;

pub use sonar::*;
pub use sub_app::*;
