//! CLI argument parsing

mod add_host;
mod bulk_add;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{defaults, settings};
use crate::settings::CliOverrides;
use crate::zabbix::NamePolicy;

pub use add_host::AddHostArgs;
pub use bulk_add::{BulkAddArgs, OutputFormat};

/// Zabbix host provisioning CLI
#[derive(Parser, Debug)]
#[command(name = "zbxctl")]
#[command(version)]
#[command(about = "Add hosts to Zabbix through its JSON-RPC API", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Zabbix frontend URL (e.g. https://zabbix.example.com/zabbix)
    #[arg(long, global = true, env = settings::URL_ENV_VAR)]
    pub url: Option<String>,

    /// Zabbix user name [default: Admin]
    #[arg(short = 'u', long, global = true, env = settings::USER_ENV_VAR)]
    pub username: Option<String>,

    /// Zabbix password (prompted for when missing and interactive)
    #[arg(
        short = 'p',
        long,
        global = true,
        env = settings::PASSWORD_ENV_VAR,
        hide_env_values = true
    )]
    pub password: Option<String>,

    /// Settings file [default: ~/.zbxctl/config.json]
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Validate the server TLS certificate
    #[arg(long, global = true)]
    pub verify_tls: bool,

    /// Per-request timeout in seconds [default: 30]
    #[arg(long, global = true, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Fail when a group or template name matches more than one object
    #[arg(long, global = true)]
    pub strict_names: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Quiet mode (no spinners, no interactive prompts)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

impl Cli {
    /// Connection values given on the command line or in the environment
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            url: self.url.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            verify_tls: self.verify_tls,
            timeout_secs: self.timeout,
        }
    }

    pub fn name_policy(&self) -> NamePolicy {
        if self.strict_names {
            NamePolicy::Strict
        } else {
            NamePolicy::FirstMatch
        }
    }
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a single host
    AddHost(AddHostArgs),

    /// Add hosts in bulk from a CSV file
    #[command(visible_alias = "bulk")]
    BulkAdd(BulkAddArgs),
}
