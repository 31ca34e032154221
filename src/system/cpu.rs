use super::error::SampleError;
use super::source::{CpuTimes, TelemetrySource};

/// Outcome of one successful counter read.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CpuSample {
    /// First reading of the process lifetime; there is nothing to diff against yet.
    Warmup,
    /// Percentage of processor time spent non-idle since the previous reading.
    Usage(f32),
}

/// Delta-based estimator of aggregate processor utilization.
#[derive(Debug, Default)]
pub struct CpuSampler {
    previous: Option<CpuTimes>,
}

impl CpuSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the counters from `source` and diffs them against the last
    /// successful read. A failed read leaves the baseline untouched.
    pub fn sample<S: TelemetrySource + ?Sized>(
        &mut self,
        source: &mut S,
    ) -> Result<CpuSample, SampleError> {
        let current = source.cpu_times().ok_or(SampleError::CpuTimes)?;
        Ok(self.observe(current))
    }

    pub fn observe(&mut self, current: CpuTimes) -> CpuSample {
        match self.previous.replace(current) {
            Some(previous) => CpuSample::Usage(usage_between(previous, current)),
            None => CpuSample::Warmup,
        }
    }
}

/// Busy percentage between two counter readings.
///
/// Counters that went backwards contribute a zero delta. The result is
/// always within `0.0..=100.0`.
pub fn usage_between(previous: CpuTimes, current: CpuTimes) -> f32 {
    let idle = current.idle.saturating_sub(previous.idle);
    let kernel = current.kernel.saturating_sub(previous.kernel);
    let user = current.user.saturating_sub(previous.user);

    let total = kernel.saturating_add(user);
    if total == 0 {
        return 0.0;
    }
    let busy = kernel.saturating_sub(idle).saturating_add(user);
    let usage = busy as f64 * 100.0 / total as f64;
    (usage as f32).clamp(0.0, 100.0)
}
