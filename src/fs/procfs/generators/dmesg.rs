//! `/dmesg`：内核日志环的当前内容

use alloc::vec::Vec;

use crate::klog::LOG_RING;
use crate::vfs::InodeIdentifier;

pub fn dmesg(_id: InodeIdentifier) -> Option<Vec<u8>> {
    Some(LOG_RING.lock().snapshot())
}
