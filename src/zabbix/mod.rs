//! Zabbix API client module
//!
//! This module provides the JSON-RPC transport, login, name resolution and
//! host creation against the Zabbix API.

mod client;
pub mod hosts;
mod lookup;
pub mod models;
pub mod resolver;
mod session;

pub use client::{ClientOptions, ZabbixClient};
pub use hosts::{
    run_add_host_command, split_names, HostCreationResult, HostRequest, HostStatus, Provisioner,
    PskConfig,
};
pub use lookup::{HostGroup, Template};
pub use resolver::{NamePolicy, Resolution, Resolver};
pub use session::Session;
