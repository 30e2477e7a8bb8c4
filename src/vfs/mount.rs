//! 挂载点表
//!
//! 宿主 VFS 在挂载/卸载时维护这张表；ProcFS 的 `/mounts` 与 `/df` 只做
//! 一次性的只读快照遍历。对并发的挂载变更不做跨文件一致性承诺。

use alloc::{string::String, vec::Vec};

use lazy_static::lazy_static;
use serde::Serialize;

use crate::sync::SpinLock;
use crate::vfs::InodeIdentifier;

/// 单个挂载点的描述。字段名即 `/df` 输出的外部契约。
#[derive(Debug, Clone, Serialize)]
pub struct MountInfo {
    pub class_name: String,
    pub total_block_count: usize,
    pub free_block_count: usize,
    pub total_inode_count: usize,
    pub free_inode_count: usize,
    #[serde(rename = "mount_point")]
    pub absolute_path: String,
    pub block_size: usize,
    pub readonly: bool,
    /// 底层设备路径；内存文件系统为 None（序列化为 null）
    pub device: Option<String>,
    /// 宿主目录的标识符；根挂载为 None
    #[serde(skip)]
    pub host: Option<InodeIdentifier>,
}

/// 挂载点表
pub struct MountTable {
    mounts: SpinLock<Vec<MountInfo>>,
}

impl MountTable {
    pub fn new() -> Self {
        MountTable {
            mounts: SpinLock::new(Vec::new()),
        }
    }

    /// 登记一个挂载点
    pub fn register(&self, mount: MountInfo) {
        self.mounts.lock().push(mount);
    }

    /// 注销指定路径的挂载点
    pub fn unregister(&self, absolute_path: &str) {
        self.mounts
            .lock()
            .retain(|m| m.absolute_path != absolute_path);
    }

    /// 获取所有挂载点的快照
    pub fn list_all(&self) -> Vec<MountInfo> {
        self.mounts.lock().clone()
    }
}

lazy_static! {
    pub static ref MOUNT_TABLE: MountTable = MountTable::new();
}
