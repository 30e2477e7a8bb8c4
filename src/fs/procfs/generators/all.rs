//! `/all`：全部进程的统计信息（JSON 数组）
//!
//! 字段集合是外部契约（ps/top 类工具按名取值），不要改名。
//! 输出永远以内核空闲任务的合成记录开头，随后才是进程表里的存活进程；
//! 即使系统上没有任何用户进程，数组也不为空。

use alloc::{string::String, vec::Vec};

use serde::Serialize;

use crate::kernel::task::{PROCESS_TABLE, ProcessPriority, ProcessState};
use crate::vfs::InodeIdentifier;

#[derive(Serialize)]
struct ProcessStatistics {
    pid: u32,
    times_scheduled: u64,
    pgid: u32,
    pgp: u32,
    sid: u32,
    uid: u32,
    gid: u32,
    state: &'static str,
    ppid: u32,
    nfds: usize,
    name: String,
    tty: String,
    amount_virtual: usize,
    amount_resident: usize,
    amount_shared: usize,
    ticks: u64,
    priority: &'static str,
    syscall_count: u64,
    icon_id: i32,
}

/// 空闲任务不进入进程表，它的统计行在这里合成（pid 0，计数全零）
fn idle_statistics() -> ProcessStatistics {
    ProcessStatistics {
        pid: 0,
        times_scheduled: 0,
        pgid: 0,
        pgp: 0,
        sid: 0,
        uid: 0,
        gid: 0,
        state: ProcessState::Running.as_str(),
        ppid: 0,
        nfds: 0,
        name: String::from("idle"),
        tty: String::from("notty"),
        amount_virtual: 0,
        amount_resident: 0,
        amount_shared: 0,
        ticks: 0,
        priority: ProcessPriority::Idle.as_str(),
        syscall_count: 0,
        icon_id: 0,
    }
}

pub fn all(_id: InodeIdentifier) -> Option<Vec<u8>> {
    let processes = PROCESS_TABLE.lock().all();

    let mut array = Vec::with_capacity(processes.len() + 1);
    array.push(idle_statistics());
    for process in processes {
        let process = process.lock();
        array.push(ProcessStatistics {
            pid: process.pid,
            times_scheduled: process.times_scheduled,
            pgid: process.tty_pgid,
            pgp: process.pgid,
            sid: process.sid,
            uid: process.uid,
            gid: process.gid,
            state: process.state.as_str(),
            ppid: process.ppid,
            nfds: process.number_of_open_fds(),
            name: process.name.clone(),
            tty: process
                .tty_name
                .clone()
                .unwrap_or_else(|| String::from("notty")),
            amount_virtual: process.amount_virtual(),
            amount_resident: process.amount_resident(),
            amount_shared: process.amount_shared,
            ticks: process.ticks,
            priority: process.priority.as_str(),
            syscall_count: process.syscall_count,
            icon_id: process.icon_id,
        });
    }

    serde_json::to_vec(&array).ok()
}
