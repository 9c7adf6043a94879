//! CSV host record source

use log::{debug, warn};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::config::defaults;
use crate::error::{Result, ZbxError};
use crate::zabbix::{split_names, HostRequest};

/// Columns every input file must have
pub const REQUIRED_COLUMNS: &[&str] = &["hostname", "ip", "groups", "templates"];

/// One row of the input file
///
/// Every field is optional at this stage so that an incomplete row can still
/// be reported by hostname.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct InputRecord {
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(default)]
    pub ip: Option<String>,
    /// Comma-joined host group names
    #[serde(default)]
    pub groups: Option<String>,
    /// Comma-joined template names
    #[serde(default)]
    pub templates: Option<String>,
    #[serde(default)]
    pub psk_identity: Option<String>,
    #[serde(default)]
    pub psk_key: Option<String>,
}

impl InputRecord {
    /// Hostname for reporting, `"unknown"` when the row has none
    pub fn display_name(&self) -> &str {
        self.hostname
            .as_deref()
            .map(str::trim)
            .filter(|h| !h.is_empty())
            .unwrap_or(defaults::UNKNOWN_HOSTNAME)
    }

    /// Turn the row into a host request
    ///
    /// Hostname and IP must be present. Empty group or template cells give
    /// empty lists.
    pub fn into_request(self) -> Result<HostRequest> {
        let hostname = non_empty(self.hostname)
            .ok_or_else(|| ZbxError::Record("missing required field 'hostname'".to_string()))?;
        let ip = non_empty(self.ip)
            .ok_or_else(|| ZbxError::Record("missing required field 'ip'".to_string()))?;

        Ok(HostRequest {
            hostname,
            ip,
            groups: self.groups.as_deref().map(split_names).unwrap_or_default(),
            templates: self
                .templates
                .as_deref()
                .map(split_names)
                .unwrap_or_default(),
            psk_identity: non_empty(self.psk_identity),
            psk_key: non_empty(self.psk_key),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// A row that could not be read at all
#[derive(Debug, Clone, PartialEq)]
pub struct MalformedRecord {
    /// Line number in the input file (header is line 1)
    pub line: u64,
    /// Best-available hostname, `"unknown"` when none
    pub hostname: String,
    pub message: String,
}

/// One input row, parsed or not
pub type RecordSlot = std::result::Result<InputRecord, MalformedRecord>;

/// Read host records from a CSV file
///
/// Only failing to open or read the file is an error. Problems with single
/// rows are kept as [`MalformedRecord`] entries in file order.
pub fn read_records(path: &Path) -> Result<Vec<RecordSlot>> {
    let file = File::open(path)
        .map_err(|e| ZbxError::Input(format!("Failed to open {}: {}", path.display(), e)))?;
    debug!("Reading host records from {}", path.display());
    read_records_from(file)
}

/// Read host records from any CSV source
pub fn read_records_from<R: Read>(source: R) -> Result<Vec<RecordSlot>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    let missing_columns: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|column| !headers.iter().any(|h| h == *column))
        .collect();
    if !missing_columns.is_empty() {
        warn!(
            "Input is missing required column(s): {}",
            missing_columns.join(", ")
        );
    }
    let hostname_index = headers.iter().position(|h| h == "hostname");

    let mut slots = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let line = index as u64 + 2;
        let slot = match row {
            Ok(row) => {
                let hostname = hostname_index
                    .and_then(|i| row.get(i))
                    .filter(|h| !h.is_empty())
                    .unwrap_or(defaults::UNKNOWN_HOSTNAME)
                    .to_string();

                if let Some(column) = missing_columns.first() {
                    Err(MalformedRecord {
                        line,
                        hostname,
                        message: format!("missing required column '{}'", column),
                    })
                } else {
                    row.deserialize::<InputRecord>(Some(&headers))
                        .map_err(|e| MalformedRecord {
                            line,
                            hostname,
                            message: e.to_string(),
                        })
                }
            }
            Err(e) => Err(MalformedRecord {
                line,
                hostname: defaults::UNKNOWN_HOSTNAME.to_string(),
                message: e.to_string(),
            }),
        };
        slots.push(slot);
    }

    debug!("Read {} host record(s)", slots.len());
    Ok(slots)
}
