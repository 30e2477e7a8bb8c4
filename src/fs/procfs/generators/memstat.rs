//! `/memstat`：内存分配统计（JSON 对象）

use alloc::vec::Vec;

use serde::Serialize;

use crate::mm::MEMORY_STATS;
use crate::vfs::InodeIdentifier;

#[derive(Serialize)]
struct MemstatSnapshot {
    kmalloc_allocated: usize,
    kmalloc_available: usize,
    kmalloc_eternal_allocated: usize,
    user_physical_allocated: usize,
    user_physical_available: usize,
    super_physical_allocated: usize,
    super_physical_available: usize,
    kmalloc_call_count: u64,
    kfree_call_count: u64,
}

pub fn memstat(_id: InodeIdentifier) -> Option<Vec<u8>> {
    let snapshot = {
        let stats = MEMORY_STATS.lock();
        MemstatSnapshot {
            kmalloc_allocated: stats.kmalloc_allocated,
            kmalloc_available: stats.kmalloc_available,
            kmalloc_eternal_allocated: stats.kmalloc_eternal_allocated,
            user_physical_allocated: stats.user_physical_pages_used,
            user_physical_available: stats.user_physical_pages,
            super_physical_allocated: stats.super_physical_pages_used,
            super_physical_available: stats.super_physical_pages,
            kmalloc_call_count: stats.kmalloc_call_count,
            kfree_call_count: stats.kfree_call_count,
        }
    };
    serde_json::to_vec(&snapshot).ok()
}
