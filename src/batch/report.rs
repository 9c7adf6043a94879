//! Batch outcome report

use serde::Serialize;

use crate::zabbix::HostCreationResult;

/// Ordered per-record results of a bulk run
#[derive(Serialize, Debug, Default, Clone, PartialEq)]
pub struct BatchReport {
    results: Vec<HostCreationResult>,
}

impl BatchReport {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            results: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, result: HostCreationResult) {
        self.results.push(result);
    }

    /// Results in input order
    pub fn results(&self) -> &[HostCreationResult] {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn success_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_success()).count()
    }

    pub fn error_count(&self) -> usize {
        self.results.len() - self.success_count()
    }

    /// Failed results in input order
    pub fn failures(&self) -> impl Iterator<Item = &HostCreationResult> {
        self.results.iter().filter(|r| !r.is_success())
    }
}
