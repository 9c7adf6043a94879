//! Bulk provisioning from a CSV file

mod commands;
pub mod input;
mod report;
mod runner;

pub use commands::run_bulk_add_command;
pub use input::{read_records, read_records_from, InputRecord, MalformedRecord, RecordSlot};
pub use report::BatchReport;
pub use runner::BatchRunner;
