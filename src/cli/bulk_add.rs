//! Arguments for 'bulk-add'

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::defaults;

/// Report format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Table with a summary (default)
    Table,
    /// Comma-separated values
    Csv,
    /// JSON object with counts and results
    Json,
    /// YAML format
    Yaml,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}

/// Arguments for 'bulk-add' subcommand
#[derive(Parser, Debug)]
pub struct BulkAddArgs {
    /// CSV file with columns hostname,ip,groups,templates[,psk_identity,psk_key]
    #[arg(short, long, value_name = "PATH")]
    pub file: PathBuf,

    /// Hosts provisioned at once (results keep file order)
    #[arg(long, default_value_t = defaults::CONCURRENCY)]
    pub concurrency: usize,

    /// Report format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}
