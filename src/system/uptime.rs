use super::error::SampleError;
use super::source::TelemetrySource;

/// Whole seconds since boot; the millisecond counter is truncated.
pub fn sample<S: TelemetrySource + ?Sized>(source: &mut S) -> Result<u64, SampleError> {
    source
        .uptime_millis()
        .map(|millis| millis / 1000)
        .ok_or(SampleError::Uptime)
}
