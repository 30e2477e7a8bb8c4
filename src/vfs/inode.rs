//! Inode 标识符与元数据
//!
//! ProcFS 不在 inode 对象里缓存任何内容；一个 [`InodeIdentifier`] 就足以
//! 完整描述一个节点。`index` 的位布局见 `fs::procfs::ident`，它是读写与
//! 目录分发的唯一依据。

use alloc::string::String;

use crate::uapi::time::TimeSpec;

/// 合成文件的时间戳固定为一个纪元常量，不随读写变化。
pub const MEPOCH: TimeSpec = TimeSpec::new(993_849_600, 0);

/// Inode 标识符：`fsid` 由 VFS 在挂载时分配，`index` 是 32 位路由键。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InodeIdentifier {
    pub fsid: u32,
    pub index: u32,
}

impl InodeIdentifier {
    pub const fn new(fsid: u32, index: u32) -> Self {
        InodeIdentifier { fsid, index }
    }

    /// 无效标识符哨兵（查找未命中时的边界值）
    pub const fn invalid() -> Self {
        InodeIdentifier { fsid: 0, index: 0 }
    }

    pub fn is_valid(&self) -> bool {
        self.fsid != 0 || self.index != 0
    }
}

/// 文件类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InodeType {
    File,
    Directory,
    Symlink,
    CharDevice,
    BlockDevice,
    Fifo,
    Socket,
}

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    /// 文件权限和类型（与 POSIX 兼容）
    pub struct FileMode: u32 {
        // 文件类型掩码
        const S_IFMT   = 0o170000;  // 文件类型掩码
        const S_IFREG  = 0o100000;  // 普通文件
        const S_IFDIR  = 0o040000;  // 目录
        const S_IFLNK  = 0o120000;  // 符号链接
        const S_IFCHR  = 0o020000;  // 字符设备
        const S_IFBLK  = 0o060000;  // 块设备
        const S_IFIFO  = 0o010000;  // FIFO
        const S_IFSOCK = 0o140000;  // Socket

        // 用户权限
        const S_IRUSR  = 0o400;     // 用户读
        const S_IWUSR  = 0o200;     // 用户写
        const S_IXUSR  = 0o100;     // 用户执行

        // 组权限
        const S_IRGRP  = 0o040;     // 组读
        const S_IWGRP  = 0o020;     // 组写
        const S_IXGRP  = 0o010;     // 组执行

        // 其他用户权限
        const S_IROTH  = 0o004;     // 其他读
        const S_IWOTH  = 0o002;     // 其他写
        const S_IXOTH  = 0o001;     // 其他执行
    }
}

/// 文件元数据
#[derive(Debug, Clone)]
pub struct InodeMetadata {
    pub id: InodeIdentifier,
    pub inode_type: InodeType,
    pub mode: FileMode,
    pub uid: u32,
    pub gid: u32,
    pub size: usize,
    pub atime: TimeSpec,
    pub mtime: TimeSpec,
    pub ctime: TimeSpec,
    pub nlinks: usize,
    pub blocks: usize,
    pub rdev: u64,
}

/// 目录项：目录遍历回调逐项收到的数据
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub id: InodeIdentifier,
}
