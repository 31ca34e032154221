use super::PlatformCounters;
use crate::system::source::CpuTimes;

pub struct Platform;

impl PlatformCounters for Platform {
    fn cpu_times() -> Option<CpuTimes> {
        let contents = std::fs::read_to_string("/proc/stat").ok()?;
        parse_proc_stat(&contents)
    }

    fn uptime_millis() -> Option<u64> {
        let contents = std::fs::read_to_string("/proc/uptime").ok()?;
        parse_proc_uptime(&contents)
    }
}

/// Folds the aggregate `cpu` line of /proc/stat into idle/kernel/user.
fn parse_proc_stat(contents: &str) -> Option<CpuTimes> {
    let line = contents.lines().find(|l| l.starts_with("cpu "))?;
    // user nice system idle iowait irq softirq steal guest guest_nice
    let fields: Vec<u64> = line
        .split_whitespace()
        .skip(1)
        .map(|f| f.parse().ok())
        .collect::<Option<_>>()?;
    if fields.len() < 4 {
        return None;
    }
    let field = |i: usize| fields.get(i).copied().unwrap_or(0);

    // guest time is already accounted for in user and nice.
    let idle = field(3) + field(4);
    let kernel = field(2) + field(5) + field(6) + field(7) + idle;
    let user = field(0) + field(1);
    Some(CpuTimes { idle, kernel, user })
}

/// First field of /proc/uptime: seconds with a fractional part.
fn parse_proc_uptime(contents: &str) -> Option<u64> {
    let token = contents.split_whitespace().next()?;
    let (seconds, fraction) = token.split_once('.').unwrap_or((token, "0"));
    let seconds: u64 = seconds.parse().ok()?;
    let padded = format!("{fraction:0<3}");
    let millis: u64 = padded.get(..3)?.parse().ok()?;
    Some(seconds * 1000 + millis)
}
