use sysinfo::{ProcessRefreshKind, ProcessesToUpdate, System};

use super::platform;
use super::source::{CpuTimes, MemoryBytes, ProcessDetails, RawProcess, TelemetrySource};

/// Telemetry from the running operating system.
///
/// Memory and the process table come from sysinfo; the raw processor
/// counters and the millisecond uptime come from the platform layer.
pub struct SysinfoSource {
    sys: System,
}

impl Default for SysinfoSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SysinfoSource {
    pub fn new() -> Self {
        SysinfoSource { sys: System::new() }
    }
}

impl TelemetrySource for SysinfoSource {
    fn cpu_times(&mut self) -> Option<CpuTimes> {
        platform::cpu_times()
    }

    fn memory(&mut self) -> Option<MemoryBytes> {
        self.sys.refresh_memory();
        Some(MemoryBytes {
            total: self.sys.total_memory(),
            available: self.sys.available_memory(),
        })
    }

    fn uptime_millis(&mut self) -> Option<u64> {
        platform::uptime_millis().or_else(|| match System::uptime() {
            0 => None,
            seconds => Some(seconds.saturating_mul(1000)),
        })
    }

    fn processes(&mut self) -> Option<Vec<RawProcess>> {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return None;
        }

        let _span = tracing::debug_span!("sysinfo.refresh_processes").entered();

        self.sys.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::nothing().with_memory(),
        );

        let processes = self.sys.processes();
        // A live system always has at least one process: ours.
        if processes.is_empty() {
            return None;
        }

        Some(
            processes
                .iter()
                .map(|(pid, process)| RawProcess {
                    pid: pid.as_u32(),
                    name: process.name().to_string_lossy().to_string(),
                    details: details(process.start_time(), process.memory()),
                })
                .collect(),
        )
    }
}

/// sysinfo leaves the start time at zero for processes it could not open.
fn details(start_time_unix: u64, memory_bytes: u64) -> Option<ProcessDetails> {
    match start_time_unix {
        0 => None,
        start_time_unix => Some(ProcessDetails {
            memory_bytes,
            start_time_unix,
        }),
    }
}
