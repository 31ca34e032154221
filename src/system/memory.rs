use serde::Serialize;

use super::error::SampleError;
use super::source::TelemetrySource;

pub const BYTES_PER_MB: u64 = 1024 * 1024;

/// Physical memory, truncated to whole megabytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MemoryInfo {
    pub total_mb: u64,
    pub free_mb: u64,
}

impl MemoryInfo {
    pub fn from_bytes(total: u64, available: u64) -> Self {
        let total_mb = total / BYTES_PER_MB;
        MemoryInfo {
            total_mb,
            free_mb: (available / BYTES_PER_MB).min(total_mb),
        }
    }

    pub fn used_mb(&self) -> u64 {
        self.total_mb - self.free_mb
    }
}

/// A source that reports zero total memory is treated as a failed query.
pub fn sample<S: TelemetrySource + ?Sized>(source: &mut S) -> Result<MemoryInfo, SampleError> {
    match source.memory() {
        Some(bytes) if bytes.total > 0 => Ok(MemoryInfo::from_bytes(bytes.total, bytes.available)),
        _ => Err(SampleError::Memory),
    }
}
