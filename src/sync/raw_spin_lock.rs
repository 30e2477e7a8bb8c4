use core::{
    hint,
    sync::atomic::{AtomicBool, Ordering},
};

/// 自旋锁结构体，提供互斥访问临界区的能力。
/// 基于原子操作实现自旋锁机制。
/// 不可重入 (即不能嵌套调用 RawSpinLock::lock())。
/// 使用示例：
/// ```ignore
/// let lock = RawSpinLock::new();
/// {
///   let guard = lock.lock(); // 获取锁
///   // 临界区代码
/// } // 离开作用域，自动释放锁
/// ```
#[derive(Debug)]
pub struct RawSpinLock {
    lock: AtomicBool,
}

impl RawSpinLock {
    pub const fn new() -> Self {
        RawSpinLock {
            lock: AtomicBool::new(false),
        }
    }

    /// 获取自旋锁，并返回一个 RAII 保护器。
    pub fn lock(&self) -> RawSpinLockGuard<'_> {
        while self
            .lock
            .compare_exchange_weak(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            hint::spin_loop();
        }

        RawSpinLockGuard { lock: self }
    }

    /// 尝试获取自旋锁，如果成功则返回 RAII 保护器，否则返回 None。
    pub fn try_lock(&self) -> Option<RawSpinLockGuard<'_>> {
        if self
            .lock
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_ok()
        {
            Some(RawSpinLockGuard { lock: self })
        } else {
            None
        }
    }

    /// 仅释放锁标志。
    fn unlock(&self) {
        self.lock.store(false, Ordering::Release);
    }

    /// 检查锁是否被占用 (仅用于调试/测试)
    #[cfg(test)]
    pub fn is_locked(&self) -> bool {
        self.lock.load(Ordering::Relaxed)
    }
}

/// 自动释放自旋锁的 RAII 结构体
pub struct RawSpinLockGuard<'a> {
    lock: &'a RawSpinLock,
}

impl Drop for RawSpinLockGuard<'_> {
    fn drop(&mut self) {
        self.lock.unlock();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 测试锁的初始化状态和基本锁定/解锁功能
    #[test]
    fn test_raw_spin_lock_basic_lock_unlock() {
        let lock = RawSpinLock::new();
        assert!(!lock.is_locked());

        let guard = lock.lock();
        assert!(lock.is_locked());

        drop(guard);
        assert!(!lock.is_locked());
    }

    // 测试 RAII 行为 (自动释放)
    #[test]
    fn test_raw_spin_lock_raii_release() {
        let lock = RawSpinLock::new();

        {
            let _guard = lock.lock();
            assert!(lock.is_locked());
        } // <- _guard 在此离开作用域，Drop 被自动调用

        assert!(!lock.is_locked());
    }

    // 测试 try_lock 在锁被占用时失败
    #[test]
    fn test_raw_spin_lock_try_lock() {
        let lock = RawSpinLock::new();

        let guard = lock.lock();
        assert!(lock.try_lock().is_none());

        drop(guard);
        assert!(lock.try_lock().is_some());
    }
}
