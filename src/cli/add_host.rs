//! Arguments for 'add-host'

use clap::Parser;

use crate::zabbix::{split_names, HostRequest};

/// Arguments for 'add-host' subcommand
#[derive(Parser, Debug)]
pub struct AddHostArgs {
    /// Host name (must be unique in Zabbix)
    #[arg(long)]
    pub hostname: String,

    /// Agent interface IP address
    #[arg(long)]
    pub ip: String,

    /// Host group names, comma-separated
    #[arg(long)]
    pub groups: String,

    /// Template names, comma-separated
    #[arg(long)]
    pub templates: String,

    /// PSK identity (requires --psk-key)
    #[arg(long, requires = "psk_key")]
    pub psk_identity: Option<String>,

    /// PSK key in hex (requires --psk-identity)
    #[arg(long, requires = "psk_identity")]
    pub psk_key: Option<String>,
}

impl AddHostArgs {
    pub fn to_request(&self) -> HostRequest {
        HostRequest {
            hostname: self.hostname.clone(),
            ip: self.ip.clone(),
            groups: split_names(&self.groups),
            templates: split_names(&self.templates),
            psk_identity: self.psk_identity.clone(),
            psk_key: self.psk_key.clone(),
        }
    }
}
