use serde::Serialize;

use crate::system::memory::MemoryInfo;
use crate::system::process::{EnumerationStatus, ProcessRecord, top_by_memory};
use crate::system::snapshot::{Reading, SystemSnapshot};

/// The `--once` output: one snapshot with the process list already cut
/// down to the heaviest entries.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub cpu_usage_percent: Reading<f32>,
    pub memory: Reading<MemoryInfo>,
    pub uptime_seconds: Reading<u64>,
    pub process_status: EnumerationStatus,
    pub process_count: usize,
    pub top_processes: Vec<&'a ProcessRecord>,
}

impl<'a> Report<'a> {
    pub fn from_snapshot(snapshot: &'a SystemSnapshot, top_n: usize) -> Self {
        Report {
            cpu_usage_percent: snapshot.cpu_usage_percent,
            memory: snapshot.memory,
            uptime_seconds: snapshot.uptime_seconds,
            process_status: snapshot.processes.status,
            process_count: snapshot.processes.records.len(),
            top_processes: top_by_memory(&snapshot.processes.records, top_n),
        }
    }
}
