//! Port traits implemented by adapters.

pub mod config_port;
pub mod reference_port;
pub mod submission_port;
