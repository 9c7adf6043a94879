//! zbxctl - Provision hosts into Zabbix
//!
//! A CLI tool that adds monitored hosts through the Zabbix JSON-RPC API.
//!
//! # Features
//!
//! - One login per run, session reused for every call
//! - Host group and template names resolved to their IDs
//! - Optional PSK encryption for the agent connection
//! - Bulk mode from a CSV file with a per-host outcome report
//! - Multiple report formats (table, CSV, JSON, YAML)
//!
//! # Example
//!
//! ```bash
//! # Add one host
//! zbxctl --url https://zabbix.example.com add-host \
//!     --hostname sensor01 --ip 10.0.0.5 \
//!     --groups "Linux servers" --templates "Template OS Linux"
//!
//! # Add hosts from a CSV file, report as JSON
//! zbxctl --url https://zabbix.example.com bulk-add --file hosts.csv -o json
//! ```

pub mod batch;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod settings;
pub mod ui;
pub mod zabbix;

pub use batch::{run_bulk_add_command, BatchReport, BatchRunner};
pub use cli::{AddHostArgs, BulkAddArgs, Cli, Command, OutputFormat};
pub use error::{Result, ZbxError};
pub use settings::{CliOverrides, ConnectionSettings, SettingsFile, SettingsStore};
pub use zabbix::{
    run_add_host_command, ClientOptions, HostCreationResult, HostRequest, HostStatus, NamePolicy,
    Provisioner, Session, ZabbixClient,
};
