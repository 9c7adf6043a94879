//! Bulk host provisioning

use futures::stream::{self, StreamExt};
use log::{debug, info};
use std::pin::pin;

use crate::config::defaults;
use crate::zabbix::{HostCreationResult, Provisioner};

use super::input::RecordSlot;
use super::report::BatchReport;

/// Provisions a list of host records, one outcome per record
///
/// A failing record never stops the run: its error becomes that record's
/// outcome. Outcomes are reported in input order even when several records
/// are in flight.
pub struct BatchRunner<'p, 'c> {
    provisioner: &'p Provisioner<'c>,
    concurrency: usize,
}

impl<'p, 'c> BatchRunner<'p, 'c> {
    pub fn new(provisioner: &'p Provisioner<'c>) -> Self {
        Self {
            provisioner,
            concurrency: defaults::CONCURRENCY,
        }
    }

    /// Maximum number of records provisioned at once (at least 1)
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub async fn run(&self, records: Vec<RecordSlot>) -> BatchReport {
        self.run_with(records, |_| {}).await
    }

    /// Like [`run`](Self::run), calling `on_result` as each record finishes
    pub async fn run_with<F>(&self, records: Vec<RecordSlot>, mut on_result: F) -> BatchReport
    where
        F: FnMut(&HostCreationResult),
    {
        info!(
            "Provisioning {} host record(s), up to {} at a time",
            records.len(),
            self.concurrency
        );

        let mut report = BatchReport::with_capacity(records.len());
        let mut outcomes = pin!(stream::iter(records)
            .map(|slot| self.process(slot))
            .buffered(self.concurrency));

        while let Some(result) = outcomes.next().await {
            on_result(&result);
            report.push(result);
        }

        info!(
            "Bulk run finished: {} succeeded, {} failed",
            report.success_count(),
            report.error_count()
        );
        report
    }

    async fn process(&self, slot: RecordSlot) -> HostCreationResult {
        let record = match slot {
            Ok(record) => record,
            Err(malformed) => {
                debug!("Skipping malformed line {}", malformed.line);
                return HostCreationResult::error(
                    &malformed.hostname,
                    format!("line {}: {}", malformed.line, malformed.message),
                );
            }
        };

        let display_name = record.display_name().to_string();
        let request = match record.into_request() {
            Ok(request) => request,
            Err(e) => return HostCreationResult::error(&display_name, e.to_string()),
        };

        info!("Adding host: {} ({})", request.hostname, request.ip);
        match self.provisioner.create_host(&request).await {
            Ok(result) => result,
            Err(e) => {
                debug!("Host '{}' failed: {}", request.hostname, e);
                HostCreationResult::error(&request.hostname, e.to_string())
            }
        }
    }
}
