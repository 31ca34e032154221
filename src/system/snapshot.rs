use serde::Serialize;

use super::memory::MemoryInfo;
use super::process::ProcessList;

/// A sampled value together with how current it is.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum Reading<T> {
    /// Sampled on the latest tick.
    Fresh(T),
    /// The latest query failed; this is the last good value.
    Stale(T),
    /// No value has been obtained yet.
    Unavailable,
}

impl<T: Copy> Reading<T> {
    pub fn value(&self) -> Option<T> {
        match self {
            Reading::Fresh(v) | Reading::Stale(v) => Some(*v),
            Reading::Unavailable => None,
        }
    }

    pub fn is_stale(&self) -> bool {
        matches!(self, Reading::Stale(_))
    }

    /// The reading to publish when the next query fails.
    pub fn degrade(self) -> Self {
        match self {
            Reading::Fresh(v) | Reading::Stale(v) => Reading::Stale(v),
            Reading::Unavailable => Reading::Unavailable,
        }
    }
}

/// Everything sampled on one tick. Replaced wholesale, never patched.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SystemSnapshot {
    pub cpu_usage_percent: Reading<f32>,
    pub memory: Reading<MemoryInfo>,
    pub uptime_seconds: Reading<u64>,
    pub processes: ProcessList,
}

impl SystemSnapshot {
    pub fn has_stale_readings(&self) -> bool {
        self.cpu_usage_percent.is_stale() || self.memory.is_stale() || self.uptime_seconds.is_stale()
    }
}
