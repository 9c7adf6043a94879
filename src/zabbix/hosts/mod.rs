//! Host module

mod commands;
pub mod models;
mod provisioner;

pub use commands::run_add_host_command;
pub use models::{split_names, HostCreationResult, HostRequest, HostStatus, PskConfig};
pub use provisioner::Provisioner;
