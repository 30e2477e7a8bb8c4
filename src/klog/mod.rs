//! 内核日志环形缓冲区
//!
//! 收集内核各处通过 `log` 宏打出的日志，容量固定，写满后丢弃最旧的
//! 字节。`/dmesg` 的内容即这份缓冲区的快照。

use alloc::{collections::VecDeque, format, vec::Vec};

use lazy_static::lazy_static;
use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::config::LOG_RING_CAPACITY;
use crate::sync::SpinLock;

/// 有界日志环
pub struct LogRing {
    buf: VecDeque<u8>,
    capacity: usize,
}

impl LogRing {
    pub fn new(capacity: usize) -> Self {
        LogRing {
            buf: VecDeque::new(),
            capacity,
        }
    }

    /// 追加一段字节，超出容量时从头部丢弃
    pub fn append(&mut self, bytes: &[u8]) {
        for &b in bytes {
            if self.buf.len() == self.capacity {
                self.buf.pop_front();
            }
            self.buf.push_back(b);
        }
    }

    /// 当前内容的快照
    pub fn snapshot(&self) -> Vec<u8> {
        self.buf.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

lazy_static! {
    pub static ref LOG_RING: SpinLock<LogRing> = SpinLock::new(LogRing::new(LOG_RING_CAPACITY));
}

/// `log` 门面的落地实现：把格式化后的记录追加到日志环
pub struct KernelLogger;

static KLOGGER: KernelLogger = KernelLogger;

impl Log for KernelLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!("[{:>5}] {}\n", record.level(), record.args());
        LOG_RING.lock().append(line.as_bytes());
    }

    fn flush(&self) {}
}

/// 安装全局日志器。重复调用是无害的（后续调用不生效）。
pub fn init() {
    if log::set_logger(&KLOGGER).is_ok() {
        log::set_max_level(LevelFilter::Debug);
    }
}
