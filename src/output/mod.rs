//! Output formatting module
//!
//! Progress lines go to stderr so that stdout only carries the report.

mod report;

pub use report::output_report;

use crate::zabbix::HostCreationResult;

/// Progress line for one finished host, followed by its warnings
pub fn host_result_line(result: &HostCreationResult) -> String {
    let mut line = match (&result.host_id, &result.error_message) {
        (Some(id), _) => format!("  ✓ {} added (ID: {})", result.hostname, id),
        (None, Some(err)) => format!("  ✗ {}: {}", result.hostname, err),
        (None, None) => format!("  ✗ {}", result.hostname),
    };
    for warning in &result.warnings {
        line.push_str(&format!("\n    ! {}", warning));
    }
    line
}

/// Print the progress line for one finished host
pub fn print_host_result(result: &HostCreationResult) {
    eprintln!("{}", host_result_line(result));
}
