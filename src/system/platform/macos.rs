use super::PlatformCounters;
use crate::system::source::CpuTimes;

const HOST_CPU_LOAD_INFO: libc::c_int = 3;
const CPU_STATE_USER: usize = 0;
const CPU_STATE_SYSTEM: usize = 1;
const CPU_STATE_IDLE: usize = 2;
const CPU_STATE_NICE: usize = 3;
const CPU_STATE_MAX: usize = 4;

unsafe extern "C" {
    fn mach_host_self() -> libc::mach_port_t;
    fn host_statistics(
        host_priv: libc::mach_port_t,
        flavor: libc::c_int,
        host_info_out: *mut libc::integer_t,
        host_info_out_cnt: *mut libc::mach_msg_type_number_t,
    ) -> libc::kern_return_t;
}

pub struct Platform;

impl PlatformCounters for Platform {
    fn cpu_times() -> Option<CpuTimes> {
        let mut ticks: [libc::natural_t; CPU_STATE_MAX] = [0; CPU_STATE_MAX];
        let mut count = CPU_STATE_MAX as libc::mach_msg_type_number_t;
        // host_cpu_load_info is a bare array of CPU_STATE_MAX natural_t tick counters.
        let ret = unsafe {
            host_statistics(
                mach_host_self(),
                HOST_CPU_LOAD_INFO,
                ticks.as_mut_ptr().cast(),
                &mut count,
            )
        };
        if ret != libc::KERN_SUCCESS || count as usize != CPU_STATE_MAX {
            return None;
        }
        Some(load_info_to_cpu_times(ticks))
    }

    fn uptime_millis() -> Option<u64> {
        // sysinfo's boot-time based uptime is used instead
        None
    }
}

/// Maps the host load ticks onto idle/kernel/user, kernel including idle.
fn load_info_to_cpu_times(ticks: [libc::natural_t; CPU_STATE_MAX]) -> CpuTimes {
    let tick = |state: usize| u64::from(ticks[state]);
    let idle = tick(CPU_STATE_IDLE);
    CpuTimes {
        idle,
        kernel: tick(CPU_STATE_SYSTEM) + idle,
        user: tick(CPU_STATE_USER) + tick(CPU_STATE_NICE),
    }
}
