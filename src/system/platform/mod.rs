use super::source::CpuTimes;

/// Raw counters that sysinfo does not expose.
pub trait PlatformCounters {
    /// Cumulative idle, kernel (idle included) and user processor time.
    fn cpu_times() -> Option<CpuTimes>;
    /// Milliseconds since boot.
    fn uptime_millis() -> Option<u64>;
}

#[cfg(target_os = "linux")]
mod linux;
#[cfg(target_os = "macos")]
mod macos;
#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
mod unsupported;
#[cfg(target_os = "windows")]
mod windows;

#[cfg(target_os = "linux")]
use linux as platform_impl;
#[cfg(target_os = "macos")]
use macos as platform_impl;
#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
use unsupported as platform_impl;
#[cfg(target_os = "windows")]
use windows as platform_impl;

pub fn cpu_times() -> Option<CpuTimes> {
    platform_impl::Platform::cpu_times()
}

pub fn uptime_millis() -> Option<u64> {
    platform_impl::Platform::uptime_millis()
}
