//! 全局配置常量

pub const PAGE_SIZE: usize = 4096;

/// 单个进程默认的最大文件描述符数量
pub const DEFAULT_MAX_FDS: usize = 256;

/// 内核日志环形缓冲区容量（字节）
pub const LOG_RING_CAPACITY: usize = 64 * 1024;
