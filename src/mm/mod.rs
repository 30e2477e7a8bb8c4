//! 内存统计
//!
//! 宿主内核的分配器与页帧管理在这里汇报计数；`/memstat` 与 `/mm` 只读。

use alloc::vec::Vec;

use lazy_static::lazy_static;

use crate::sync::SpinLock;

/// 单个虚拟内存对象的账目
#[derive(Debug, Clone)]
pub struct VmObjectInfo {
    pub anonymous: bool,
    pub ref_count: usize,
    pub page_count: usize,
}

/// 内存统计总表
pub struct MemoryStats {
    pub kmalloc_allocated: usize,
    pub kmalloc_available: usize,
    pub kmalloc_eternal_allocated: usize,
    pub kmalloc_call_count: u64,
    pub kfree_call_count: u64,
    pub user_physical_pages: usize,
    pub user_physical_pages_used: usize,
    pub super_physical_pages: usize,
    pub super_physical_pages_used: usize,
    pub vmobjects: Vec<VmObjectInfo>,
}

impl MemoryStats {
    pub const fn new() -> Self {
        MemoryStats {
            kmalloc_allocated: 0,
            kmalloc_available: 0,
            kmalloc_eternal_allocated: 0,
            kmalloc_call_count: 0,
            kfree_call_count: 0,
            user_physical_pages: 0,
            user_physical_pages_used: 0,
            super_physical_pages: 0,
            super_physical_pages_used: 0,
            vmobjects: Vec::new(),
        }
    }

    pub fn free_user_physical_pages(&self) -> usize {
        self.user_physical_pages - self.user_physical_pages_used
    }

    pub fn free_super_physical_pages(&self) -> usize {
        self.super_physical_pages - self.super_physical_pages_used
    }
}

lazy_static! {
    pub static ref MEMORY_STATS: SpinLock<MemoryStats> = SpinLock::new(MemoryStats::new());
}
