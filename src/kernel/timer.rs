//! 系统运行时间
//!
//! 宿主内核的时钟中断负责推进这里的毫秒计数；`/uptime` 只读取它。

use core::sync::atomic::{AtomicU64, Ordering};

static UPTIME_MS: AtomicU64 = AtomicU64::new(0);

/// 自启动以来的毫秒数
pub fn get_time_ms() -> u64 {
    UPTIME_MS.load(Ordering::Relaxed)
}

pub fn set_time_ms(ms: u64) {
    UPTIME_MS.store(ms, Ordering::Relaxed);
}

/// 时钟中断推进计数
pub fn tick(ms: u64) {
    UPTIME_MS.fetch_add(ms, Ordering::Relaxed);
}
