//! The boundary between the samplers and the operating system.
//!
//! Every reading a [`TelemetrySource`] hands out is raw: cumulative counters,
//! byte counts and millisecond ticks. Conversion into display units and all
//! state-carrying logic live in the providers built on top of it.

use std::collections::VecDeque;

/// Cumulative processor time counters, in platform ticks.
///
/// `kernel` includes `idle`, so `kernel + user` is the total elapsed
/// processor time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CpuTimes {
    pub idle: u64,
    pub kernel: u64,
    pub user: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemoryBytes {
    pub total: u64,
    pub available: u64,
}

/// Fields that are only available when the process could be opened for
/// querying.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProcessDetails {
    pub memory_bytes: u64,
    /// Creation time, seconds since the unix epoch.
    pub start_time_unix: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawProcess {
    pub pid: u32,
    pub name: String,
    pub details: Option<ProcessDetails>,
}

/// A source of operating system telemetry.
///
/// Each method is one synchronous query; `None` means the query failed.
pub trait TelemetrySource {
    fn cpu_times(&mut self) -> Option<CpuTimes>;
    fn memory(&mut self) -> Option<MemoryBytes>;
    fn uptime_millis(&mut self) -> Option<u64>;
    /// A best-effort snapshot of the process table. `None` when the table
    /// itself could not be read.
    fn processes(&mut self) -> Option<Vec<RawProcess>>;
}

/// A scripted source. Each query pops the next queued reading; an exhausted
/// queue behaves like a failed query.
#[derive(Debug, Default)]
pub struct MockSource {
    cpu: VecDeque<Option<CpuTimes>>,
    memory: VecDeque<Option<MemoryBytes>>,
    uptime: VecDeque<Option<u64>>,
    processes: VecDeque<Option<Vec<RawProcess>>>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_cpu(&mut self, reading: Option<CpuTimes>) -> &mut Self {
        self.cpu.push_back(reading);
        self
    }

    pub fn push_memory(&mut self, reading: Option<MemoryBytes>) -> &mut Self {
        self.memory.push_back(reading);
        self
    }

    pub fn push_uptime(&mut self, reading: Option<u64>) -> &mut Self {
        self.uptime.push_back(reading);
        self
    }

    pub fn push_processes(&mut self, reading: Option<Vec<RawProcess>>) -> &mut Self {
        self.processes.push_back(reading);
        self
    }
}

impl TelemetrySource for MockSource {
    fn cpu_times(&mut self) -> Option<CpuTimes> {
        self.cpu.pop_front().flatten()
    }

    fn memory(&mut self) -> Option<MemoryBytes> {
        self.memory.pop_front().flatten()
    }

    fn uptime_millis(&mut self) -> Option<u64> {
        self.uptime.pop_front().flatten()
    }

    fn processes(&mut self) -> Option<Vec<RawProcess>> {
        self.processes.pop_front().flatten()
    }
}
