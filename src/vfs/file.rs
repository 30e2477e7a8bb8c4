//! 打开文件描述
//!
//! ProcFS 生成的内容以"每次打开"为粒度做快照：第一次 `read_bytes` 时调用
//! 生成器并把结果存放在 [`FileDescription`] 上，之后的读取都从这份快照切片，
//! 直到某次读取返回 0 字节（EOF），快照被清除，下一次读取重新生成。
//!
//! 快照归打开文件描述所有，不同句柄之间互不共享。

use alloc::vec::Vec;

use crate::sync::{SpinLock, SpinLockGuard};

/// 打开文件描述（由宿主 VFS 为每次 open 创建并持有）
pub struct FileDescription {
    /// 生成器快照缓存；None 表示下一次读取需要重新生成
    generator_cache: SpinLock<Option<Vec<u8>>>,
}

impl FileDescription {
    pub fn new() -> Self {
        FileDescription {
            generator_cache: SpinLock::new(None),
        }
    }

    /// 访问快照缓存。调用方在守卫存续期间独占缓存。
    pub fn generator_cache(&self) -> SpinLockGuard<'_, Option<Vec<u8>>> {
        self.generator_cache.lock()
    }
}

impl Default for FileDescription {
    fn default() -> Self {
        Self::new()
    }
}
