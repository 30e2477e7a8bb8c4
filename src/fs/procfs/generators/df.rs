//! `/df`：挂载点容量信息（JSON 数组）
//!
//! 对挂载表的一次性快照，与并发的挂载变更之间天然存在竞态。

use alloc::vec::Vec;

use crate::vfs::{InodeIdentifier, MOUNT_TABLE};

pub fn df(_id: InodeIdentifier) -> Option<Vec<u8>> {
    let mounts = MOUNT_TABLE.list_all();
    serde_json::to_vec(&mounts).ok()
}
