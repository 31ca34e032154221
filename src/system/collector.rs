use std::time::{SystemTime, UNIX_EPOCH};

use super::cpu::{CpuSample, CpuSampler};
use super::memory::{self, MemoryInfo};
use super::process;
use super::snapshot::{Reading, SystemSnapshot};
use super::source::TelemetrySource;
use super::sysinfo_source::SysinfoSource;
use super::uptime;

/// Runs one sampling cycle per call and owns all state carried between
/// cycles: the CPU baseline and the last published readings.
pub struct Collector<S = SysinfoSource> {
    source: S,
    cpu: CpuSampler,
    clock: fn() -> u64,
    last_cpu: Reading<f32>,
    last_memory: Reading<MemoryInfo>,
    last_uptime: Reading<u64>,
}

impl Default for Collector {
    fn default() -> Self {
        Self::new()
    }
}

impl Collector {
    pub fn new() -> Self {
        Collector::with_source(SysinfoSource::new())
    }
}

impl<S: TelemetrySource> Collector<S> {
    pub fn with_source(source: S) -> Self {
        Collector {
            source,
            cpu: CpuSampler::new(),
            clock: unix_now,
            last_cpu: Reading::Unavailable,
            last_memory: Reading::Unavailable,
            last_uptime: Reading::Unavailable,
        }
    }

    /// Overrides the wall clock used for process ages.
    pub fn with_clock(mut self, clock: fn() -> u64) -> Self {
        self.clock = clock;
        self
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Samples everything, advancing the CPU baseline.
    pub fn refresh(&mut self) -> SystemSnapshot {
        let _refresh_span = tracing::debug_span!("collector.refresh").entered();

        let cpu_usage_percent = match self.cpu.sample(&mut self.source) {
            Ok(CpuSample::Usage(percent)) => Reading::Fresh(percent),
            Ok(CpuSample::Warmup) => {
                tracing::debug!("cpu sampler recorded its baseline");
                Reading::Unavailable
            }
            Err(err) => {
                tracing::warn!(%err, "keeping previous cpu reading");
                self.last_cpu.degrade()
            }
        };
        self.collect(cpu_usage_percent)
    }

    /// Re-reads memory, uptime and processes but leaves the CPU baseline
    /// alone, so an out-of-band refresh does not shrink the next tick's
    /// CPU window. The CPU reading is carried over unchanged.
    pub fn refresh_keep_cpu(&mut self) -> SystemSnapshot {
        let _refresh_span = tracing::debug_span!("collector.refresh_keep_cpu").entered();
        self.collect(self.last_cpu)
    }

    fn collect(&mut self, cpu_usage_percent: Reading<f32>) -> SystemSnapshot {

        let memory = match memory::sample(&mut self.source) {
            Ok(info) => Reading::Fresh(info),
            Err(err) => {
                tracing::warn!(%err, "keeping previous memory reading");
                self.last_memory.degrade()
            }
        };

        let uptime_seconds = match uptime::sample(&mut self.source) {
            // Never publish a smaller uptime than one already shown.
            Ok(seconds) => Reading::Fresh(seconds.max(self.last_uptime.value().unwrap_or(0))),
            Err(err) => {
                tracing::warn!(%err, "keeping previous uptime reading");
                self.last_uptime.degrade()
            }
        };

        let processes = process::list_processes(&mut self.source, (self.clock)());
        if processes.is_failed() {
            tracing::warn!("process table could not be enumerated");
        } else {
            tracing::debug!(count = processes.records.len(), "enumerated processes");
        }

        self.last_cpu = cpu_usage_percent;
        self.last_memory = memory;
        self.last_uptime = uptime_seconds;

        SystemSnapshot {
            cpu_usage_percent,
            memory,
            uptime_seconds,
            processes,
        }
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::memory::BYTES_PER_MB;
    use crate::system::process::EnumerationStatus;
    use crate::system::source::{CpuTimes, MemoryBytes, MockSource, ProcessDetails, RawProcess};

    fn fixed_clock() -> u64 {
        10_000
    }

    fn collector() -> Collector<MockSource> {
        Collector::with_source(MockSource::new()).with_clock(fixed_clock)
    }

    #[test]
    fn first_refresh_reports_cpu_unavailable() {
        let mut collector = collector();
        collector
            .source_mut()
            .push_cpu(Some(CpuTimes { idle: 100, kernel: 150, user: 50 }))
            .push_cpu(Some(CpuTimes { idle: 120, kernel: 170, user: 70 }));

        assert_eq!(collector.refresh().cpu_usage_percent, Reading::Unavailable);
        assert_eq!(collector.refresh().cpu_usage_percent, Reading::Fresh(50.0));
    }

    #[test]
    fn failed_queries_publish_stale_values() {
        let mut collector = collector();
        collector
            .source_mut()
            .push_memory(Some(MemoryBytes {
                total: 8 * 1024 * BYTES_PER_MB,
                available: 1024 * BYTES_PER_MB,
            }))
            .push_memory(None)
            .push_uptime(Some(90_000))
            .push_uptime(None);

        let first = collector.refresh();
        assert!(!first.has_stale_readings());
        let second = collector.refresh();
        assert_eq!(
            second.memory,
            Reading::Stale(MemoryInfo { total_mb: 8192, free_mb: 1024 })
        );
        assert_eq!(second.uptime_seconds, Reading::Stale(90));
        assert_eq!(second.cpu_usage_percent, Reading::Unavailable);
        assert!(second.has_stale_readings());
    }

    #[test]
    fn uptime_does_not_go_backwards() {
        let mut collector = collector();
        collector
            .source_mut()
            .push_uptime(Some(5_000))
            .push_uptime(Some(4_000))
            .push_uptime(Some(6_500));

        assert_eq!(collector.refresh().uptime_seconds, Reading::Fresh(5));
        assert_eq!(collector.refresh().uptime_seconds, Reading::Fresh(5));
        assert_eq!(collector.refresh().uptime_seconds, Reading::Fresh(6));
    }

    #[test]
    fn process_ages_use_the_injected_clock() {
        let mut collector = collector();
        collector.source_mut().push_processes(Some(vec![RawProcess {
            pid: 77,
            name: "worker".to_string(),
            details: Some(ProcessDetails {
                memory_bytes: 10 * BYTES_PER_MB,
                start_time_unix: 9_000,
            }),
        }]));

        let snapshot = collector.refresh();
        assert_eq!(snapshot.processes.status, EnumerationStatus::Complete);
        assert_eq!(snapshot.processes.records[0].age_seconds, 1_000);
        assert_eq!(snapshot.processes.records[0].memory_mb, 10);

        // The next tick has nothing queued: enumeration fails outright.
        assert!(collector.refresh().processes.is_failed());
    }

    #[test]
    fn refresh_keep_cpu_leaves_the_baseline_alone() {
        let mut collector = collector();
        collector
            .source_mut()
            .push_cpu(Some(CpuTimes { idle: 100, kernel: 150, user: 50 }))
            .push_cpu(Some(CpuTimes { idle: 120, kernel: 170, user: 70 }))
            .push_cpu(Some(CpuTimes { idle: 150, kernel: 200, user: 70 }))
            .push_uptime(Some(1_000))
            .push_uptime(Some(2_000))
            .push_uptime(Some(3_000));

        assert_eq!(collector.refresh().cpu_usage_percent, Reading::Unavailable);
        assert_eq!(collector.refresh().cpu_usage_percent, Reading::Fresh(50.0));

        let manual = collector.refresh_keep_cpu();
        assert_eq!(manual.cpu_usage_percent, Reading::Fresh(50.0));
        assert_eq!(manual.uptime_seconds, Reading::Fresh(3));

        // The third counter reading is still queued and diffs against the second.
        assert_eq!(collector.refresh().cpu_usage_percent, Reading::Fresh(0.0));
    }
}
