//! ProcFS 门面
//!
//! 拥有静态条目表与 inode 缓存，并向 VFS 提供根标识符和 inode 工厂。
//!
//! # inode 驻留化
//!
//! 缓存是 `index -> Weak<ProcFSInode>` 的映射：缓存本身不持有所有权，
//! 强引用全部在 VFS 手里。同一标识符在任意时刻至多对应一个存活的
//! inode 对象；最后一个强引用消失后缓存条目被摘除，下一次 `get_inode`
//! 会按需重建一个新的对象。调用方不得依赖跨越消亡的指针相等性。

use alloc::{
    collections::btree_map::BTreeMap,
    sync::{Arc, Weak},
    vec::Vec,
};
use core::sync::atomic::{AtomicU32, Ordering};

use hashbrown::HashMap;
use lazy_static::lazy_static;

use crate::fs::procfs::entries::{EntryTable, ProcFSDirectoryEntry};
use crate::fs::procfs::ident::FileKind;
use crate::fs::procfs::inode::ProcFSInode;
use crate::fs::procfs::sys_variables;
use crate::fs::procfs::sys_variables::NotifyHook;
use crate::sync::SpinLock;
use crate::vfs::{FileMode, FsError, InodeIdentifier};

lazy_static! {
    /// 进程级的实例注册表（fsid -> 门面），供 `/inodes` 生成器枚举
    static ref FILE_SYSTEMS: SpinLock<BTreeMap<u32, Weak<ProcFS>>> =
        SpinLock::new(BTreeMap::new());
}

/// 全局 fsid 分配器（挂载身份）
static NEXT_FSID: AtomicU32 = AtomicU32::new(1);

pub struct ProcFS {
    fsid: u32,
    entries: EntryTable,
    inodes: SpinLock<HashMap<u32, Weak<ProcFSInode>>>,
    root: Arc<ProcFSInode>,
}

impl ProcFS {
    /// 创建新的 ProcFS 实例
    pub fn new() -> Arc<Self> {
        let fsid = NEXT_FSID.fetch_add(1, Ordering::Relaxed);
        let fs = Arc::new_cyclic(|weak: &Weak<ProcFS>| ProcFS {
            fsid,
            entries: EntryTable::new(),
            inodes: SpinLock::new(HashMap::new()),
            root: Arc::new(ProcFSInode::new(
                weak.clone(),
                InodeIdentifier::new(fsid, FileKind::Root as u32),
            )),
        });
        FILE_SYSTEMS.lock().insert(fsid, Arc::downgrade(&fs));
        fs
    }

    pub fn fsid(&self) -> u32 {
        self.fsid
    }

    pub fn class_name(&self) -> &'static str {
        "ProcFS"
    }

    /// 根目录的标识符
    pub fn root_inode(&self) -> InodeIdentifier {
        InodeIdentifier::new(self.fsid, FileKind::Root as u32)
    }

    /// 按标识符取得 inode，必要时按需构造并驻留
    pub fn get_inode(self: &Arc<Self>, id: InodeIdentifier) -> Arc<ProcFSInode> {
        debug_assert!(id.fsid == self.fsid);
        if id == self.root_inode() {
            return self.root.clone();
        }

        let mut inodes = self.inodes.lock();
        if let Some(weak) = inodes.get(&id.index) {
            if let Some(inode) = weak.upgrade() {
                return inode;
            }
        }
        let inode = Arc::new(ProcFSInode::new(Arc::downgrade(self), id));
        inodes.insert(id.index, Arc::downgrade(&inode));
        inode
    }

    /// inode 析构时回调：仅当缓存里仍是死引用时摘除条目。
    /// （get_inode 可能已经为同一 index 驻留了新对象）
    pub(crate) fn remove_dead_inode(&self, index: u32) {
        let mut inodes = self.inodes.lock();
        if let Some(weak) = inodes.get(&index) {
            if weak.upgrade().is_none() {
                inodes.remove(&index);
            }
        }
    }

    pub(crate) fn entry(&self, kind: FileKind) -> Option<&ProcFSDirectoryEntry> {
        self.entries.get(kind)
    }

    pub(crate) fn entries(&self) -> &EntryTable {
        &self.entries
    }

    /// 当前存活的驻留 inode 快照：(index, 强引用计数)，含根
    pub(crate) fn live_inodes(&self) -> Vec<(u32, usize)> {
        let mut result = Vec::new();
        result.push((
            self.root.identifier().index,
            Arc::strong_count(&self.root),
        ));
        for (index, weak) in self.inodes.lock().iter() {
            let count = Weak::strong_count(weak);
            if count > 0 {
                result.push((*index, count));
            }
        }
        result.sort_unstable_by_key(|(index, _)| *index);
        result
    }

    /// 所有存活实例的快照
    pub(crate) fn instances() -> Vec<Arc<ProcFS>> {
        FILE_SYSTEMS
            .lock()
            .values()
            .filter_map(|weak| weak.upgrade())
            .collect()
    }

    /// 注册布尔可调参数，出现在 `/sys/<name>`
    pub fn add_sys_bool(name: &str, cell: Arc<SpinLock<bool>>, notify: Option<NotifyHook>) {
        sys_variables::add_bool(name, cell, notify);
    }

    /// 注册字符串可调参数，出现在 `/sys/<name>`
    pub fn add_sys_string(name: &str, cell: Arc<SpinLock<alloc::string::String>>, notify: Option<NotifyHook>) {
        sys_variables::add_string(name, cell, notify);
    }

    /// ProcFS 不支持创建普通文件
    pub fn create_inode(
        &self,
        _parent: InodeIdentifier,
        _name: &str,
        _mode: FileMode,
    ) -> Result<Arc<ProcFSInode>, FsError> {
        Err(FsError::PermissionDenied)
    }

    /// ProcFS 不支持创建目录
    pub fn create_directory(
        &self,
        _parent: InodeIdentifier,
        _name: &str,
        _mode: FileMode,
    ) -> Result<Arc<ProcFSInode>, FsError> {
        Err(FsError::ReadOnlyFs)
    }
}

impl Drop for ProcFS {
    fn drop(&mut self) {
        FILE_SYSTEMS.lock().remove(&self.fsid);
    }
}
