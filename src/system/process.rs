use serde::Serialize;

use super::memory::BYTES_PER_MB;
use super::source::{RawProcess, TelemetrySource};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProcessRecord {
    pub pid: u32,
    pub name: String,
    /// Working set (resident set) in whole megabytes.
    pub memory_mb: u64,
    pub age_seconds: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnumerationStatus {
    Complete,
    /// The process table could not be read at all.
    Failed,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProcessList {
    pub records: Vec<ProcessRecord>,
    pub status: EnumerationStatus,
}

impl ProcessList {
    pub fn failed() -> Self {
        ProcessList {
            records: Vec::new(),
            status: EnumerationStatus::Failed,
        }
    }

    pub fn is_failed(&self) -> bool {
        self.status == EnumerationStatus::Failed
    }
}

impl ProcessRecord {
    /// Processes that could not be queried keep their pid and name but
    /// report zero memory and age.
    pub fn from_raw(raw: RawProcess, now_unix: u64) -> Self {
        let (memory_mb, age_seconds) = match raw.details {
            Some(details) => (
                details.memory_bytes / BYTES_PER_MB,
                now_unix.saturating_sub(details.start_time_unix),
            ),
            None => (0, 0),
        };
        ProcessRecord {
            pid: raw.pid,
            name: raw.name,
            memory_mb,
            age_seconds,
        }
    }
}

/// Snapshots the process table. No ordering is guaranteed.
pub fn list_processes<S: TelemetrySource + ?Sized>(source: &mut S, now_unix: u64) -> ProcessList {
    match source.processes() {
        Some(raw) => ProcessList {
            records: raw
                .into_iter()
                .map(|p| ProcessRecord::from_raw(p, now_unix))
                .collect(),
            status: EnumerationStatus::Complete,
        },
        None => ProcessList::failed(),
    }
}

/// The `n` heaviest processes by memory, descending. Equal memory is
/// ordered by ascending pid so the selection is deterministic.
pub fn top_by_memory(records: &[ProcessRecord], n: usize) -> Vec<&ProcessRecord> {
    let mut sorted: Vec<&ProcessRecord> = records.iter().collect();
    sorted.sort_unstable_by(|a, b| b.memory_mb.cmp(&a.memory_mb).then(a.pid.cmp(&b.pid)));
    sorted.truncate(n);
    sorted
}
