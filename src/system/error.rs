use std::fmt::{self, Display};

/// A provider could not obtain a reading from the operating system.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SampleError {
    CpuTimes,
    Memory,
    Uptime,
}

impl Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self {
            SampleError::CpuTimes => "cpu time counters",
            SampleError::Memory => "physical memory status",
            SampleError::Uptime => "system uptime",
        };
        write!(f, "failed to read {what}")
    }
}

impl std::error::Error for SampleError {}
