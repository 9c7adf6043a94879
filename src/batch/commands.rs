//! Bulk command handlers

use log::debug;

use crate::cli::BulkAddArgs;
use crate::output::{output_report, print_host_result};
use crate::zabbix::Provisioner;

use super::input::read_records;
use super::report::BatchReport;
use super::runner::BatchRunner;

/// Run the bulk-add command
///
/// Per-record failures end up in the report; only an unreadable input file
/// or a report that can't be rendered is an error.
pub async fn run_bulk_add_command(
    provisioner: &Provisioner<'_>,
    args: &BulkAddArgs,
) -> Result<BatchReport, Box<dyn std::error::Error>> {
    let records = read_records(&args.file)?;
    debug!(
        "Read {} record(s) from {}",
        records.len(),
        args.file.display()
    );

    let runner = BatchRunner::new(provisioner).with_concurrency(args.concurrency);
    let report = runner.run_with(records, print_host_result).await;

    output_report(&report, &args.output)?;
    Ok(report)
}
