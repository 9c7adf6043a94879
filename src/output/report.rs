//! Batch report output formatter

use comfy_table::{presets::NOTHING, Table};
use serde::Serialize;

use crate::batch::BatchReport;
use crate::cli::OutputFormat;
use crate::zabbix::HostCreationResult;

/// Serializable report for structured output (JSON/YAML)
#[derive(Serialize)]
struct SerializableReport<'a> {
    success_count: usize,
    error_count: usize,
    results: &'a [HostCreationResult],
}

impl<'a> From<&'a BatchReport> for SerializableReport<'a> {
    fn from(report: &'a BatchReport) -> Self {
        Self {
            success_count: report.success_count(),
            error_count: report.error_count(),
            results: report.results(),
        }
    }
}

/// Print the batch report in the specified format
pub fn output_report(
    report: &BatchReport,
    format: &OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let rendered = match format {
        OutputFormat::Table => render_table(report),
        OutputFormat::Csv => render_csv(report)?,
        OutputFormat::Json => serde_json::to_string_pretty(&SerializableReport::from(report))?,
        OutputFormat::Yaml => serde_yml::to_string(&SerializableReport::from(report))?,
    };
    println!("{}", rendered.trim_end());
    Ok(())
}

fn render_table(report: &BatchReport) -> String {
    let mut table = Table::new();
    table
        .load_preset(NOTHING)
        .set_header(vec!["HOSTNAME", "STATUS", "HOST ID", "MESSAGE"]);

    for result in report.results() {
        table.add_row(vec![
            result.hostname.clone(),
            result.status.to_string(),
            result.host_id.clone().unwrap_or_else(|| "-".to_string()),
            message(result),
        ]);
    }

    let mut out = format!("{table}\n\n=== Summary ===\n");
    out.push_str(&format!("Succeeded: {}\n", report.success_count()));
    out.push_str(&format!("Failed: {}\n", report.error_count()));

    if report.error_count() > 0 {
        out.push_str("\nFailed hosts:\n");
        for failed in report.failures() {
            out.push_str(&format!(
                "  {}: {}\n",
                failed.hostname,
                failed.error_message.as_deref().unwrap_or_default()
            ));
        }
    }
    out
}

fn render_csv(report: &BatchReport) -> Result<String, Box<dyn std::error::Error>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["hostname", "status", "host_id", "error_message", "warnings"])?;
    for result in report.results() {
        let status = result.status.to_string();
        let warnings = result.warnings.join("; ");
        writer.write_record([
            result.hostname.as_str(),
            status.as_str(),
            result.host_id.as_deref().unwrap_or_default(),
            result.error_message.as_deref().unwrap_or_default(),
            warnings.as_str(),
        ])?;
    }
    let bytes = writer.into_inner().map_err(|e| e.to_string())?;
    Ok(String::from_utf8(bytes)?)
}

/// Error message for failures, joined warnings otherwise
fn message(result: &HostCreationResult) -> String {
    match &result.error_message {
        Some(err) => err.clone(),
        None => result.warnings.join("; "),
    }
}
