//! 标识符编码
//!
//! ProcFS 的每个节点由一个 32 位 index 完整描述，布局如下：
//!
//! | 位     | 字段                                           |
//! |--------|------------------------------------------------|
//! | 0-7    | 文件类别（fd 子节点为 `MAX_STATIC_FILE_INDEX + fd`） |
//! | 8-11   | 保留                                           |
//! | 12-15  | 父目录类别                                     |
//! | 16-31  | 所有者：进程 pid，或可调参数下标               |
//!
//! 这个编码是路由的唯一依据：目录引擎和读写分发不依赖 inode 对象里的
//! 任何额外状态。根目录的 index 恒为 `FileKind::Root`（1）。

use crate::vfs::InodeIdentifier;

/// 父目录类别（index 的 12-15 位）
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentDirectory {
    AbstractRoot = 0,
    Root = 1,
    RootSys = 2,
    RootNet = 3,
    Pid = 4,
    PidFd = 5,
}

impl ParentDirectory {
    fn from_bits(bits: u32) -> ParentDirectory {
        match bits {
            0 => ParentDirectory::AbstractRoot,
            1 => ParentDirectory::Root,
            2 => ParentDirectory::RootSys,
            3 => ParentDirectory::RootNet,
            4 => ParentDirectory::Pid,
            5 => ParentDirectory::PidFd,
            _ => unreachable!("procfs: 非法的父目录类别 {:#x}", bits),
        }
    }
}

/// 文件类别（index 的 0-7 位）
///
/// 闭合枚举，按区间划分：根目录文件、`/net` 文件、每进程文件。
/// fd 子节点不在枚举内，它们占用 `MAX_STATIC_FILE_INDEX` 起的开放区间。
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FileKind {
    Invalid = 0,

    Root = 1, // 目录

    RootMm = 2,
    RootMounts = 3,
    RootDf = 4,
    RootAll = 5,
    RootMemstat = 6,
    RootCpuinfo = 7,
    RootInodes = 8,
    RootDmesg = 9,
    RootPci = 10,
    RootDevices = 11,
    RootUptime = 12,
    RootCmdline = 13,
    RootSelf = 14, // 符号链接
    RootSys = 15,  // 目录
    RootNet = 16,  // 目录

    SysVariable = 17,

    NetAdapters = 18,
    NetTcp = 19,
    NetUdp = 20,
    NetLocal = 21,

    Pid = 22, // 目录

    PidVm = 23,
    PidVmo = 24,
    PidStack = 25,
    PidRegs = 26,
    PidFds = 27,
    PidExe = 28, // 符号链接
    PidCwd = 29, // 符号链接
    PidFd = 30,  // 目录
}

/// 静态文件类别上界；低 8 位大于等于它的 index 表示 fd 子节点
pub const MAX_STATIC_FILE_INDEX: u32 = 31;

impl FileKind {
    /// 从 index 低 8 位恢复文件类别；fd 区间与未知值归为 Invalid
    pub fn from_index(byte: u32) -> FileKind {
        match byte {
            1 => FileKind::Root,
            2 => FileKind::RootMm,
            3 => FileKind::RootMounts,
            4 => FileKind::RootDf,
            5 => FileKind::RootAll,
            6 => FileKind::RootMemstat,
            7 => FileKind::RootCpuinfo,
            8 => FileKind::RootInodes,
            9 => FileKind::RootDmesg,
            10 => FileKind::RootPci,
            11 => FileKind::RootDevices,
            12 => FileKind::RootUptime,
            13 => FileKind::RootCmdline,
            14 => FileKind::RootSelf,
            15 => FileKind::RootSys,
            16 => FileKind::RootNet,
            17 => FileKind::SysVariable,
            18 => FileKind::NetAdapters,
            19 => FileKind::NetTcp,
            20 => FileKind::NetUdp,
            21 => FileKind::NetLocal,
            22 => FileKind::Pid,
            23 => FileKind::PidVm,
            24 => FileKind::PidVmo,
            25 => FileKind::PidStack,
            26 => FileKind::PidRegs,
            27 => FileKind::PidFds,
            28 => FileKind::PidExe,
            29 => FileKind::PidCwd,
            30 => FileKind::PidFd,
            _ => FileKind::Invalid,
        }
    }

    /// 是否属于根目录列出的静态文件区间
    pub fn is_root_level(self) -> bool {
        (self as u8) >= (FileKind::RootMm as u8) && (self as u8) <= (FileKind::RootNet as u8)
    }

    /// 是否属于进程目录列出的静态文件区间
    pub fn is_pid_level(self) -> bool {
        (self as u8) >= (FileKind::PidVm as u8) && (self as u8) <= (FileKind::PidFd as u8)
    }
}

/// 打包标识符。所有者占 16 位，调用方保证不越界。
pub fn to_identifier(
    fsid: u32,
    parent: ParentDirectory,
    owner: u32,
    kind: FileKind,
) -> InodeIdentifier {
    debug_assert!(owner <= 0xffff);
    InodeIdentifier::new(fsid, ((parent as u32) << 12) | (owner << 16) | (kind as u32))
}

/// fd 子节点的标识符：低 8 位为 `MAX_STATIC_FILE_INDEX + fd`
pub fn to_identifier_with_fd(fsid: u32, pid: u32, fd: usize) -> InodeIdentifier {
    debug_assert!(fd < (0x100 - MAX_STATIC_FILE_INDEX) as usize);
    InodeIdentifier::new(
        fsid,
        ((ParentDirectory::PidFd as u32) << 12)
            | (pid << 16)
            | (MAX_STATIC_FILE_INDEX + fd as u32),
    )
}

/// 可调参数的标识符：所有者字段存放注册表下标
pub fn sys_var_to_identifier(fsid: u32, index: usize) -> InodeIdentifier {
    assert!(index < 256);
    InodeIdentifier::new(
        fsid,
        ((ParentDirectory::RootSys as u32) << 12)
            | ((index as u32) << 16)
            | (FileKind::SysVariable as u32),
    )
}

pub fn to_pid(id: InodeIdentifier) -> u32 {
    id.index >> 16
}

pub fn to_parent_directory(id: InodeIdentifier) -> ParentDirectory {
    ParentDirectory::from_bits((id.index >> 12) & 0xf)
}

pub fn to_file_type(id: InodeIdentifier) -> FileKind {
    FileKind::from_index(id.index & 0xff)
}

/// fd 子节点的描述符编号
pub fn to_fd(id: InodeIdentifier) -> usize {
    assert!(to_parent_directory(id) == ParentDirectory::PidFd);
    ((id.index & 0xff) - MAX_STATIC_FILE_INDEX) as usize
}

/// 可调参数标识符对应的注册表下标
pub fn to_sys_index(id: InodeIdentifier) -> usize {
    assert!(to_parent_directory(id) == ParentDirectory::RootSys);
    assert!(to_file_type(id) == FileKind::SysVariable);
    (id.index >> 16) as usize
}

/// 所在目录的标识符。对合法标识符是全函数，按父目录类别逐一给出，
/// 与 `lookup` 的下行互为逆运算。
pub fn to_parent_id(id: InodeIdentifier) -> InodeIdentifier {
    match to_parent_directory(id) {
        ParentDirectory::AbstractRoot | ParentDirectory::Root => {
            InodeIdentifier::new(id.fsid, FileKind::Root as u32)
        }
        ParentDirectory::RootSys => {
            to_identifier(id.fsid, ParentDirectory::Root, 0, FileKind::RootSys)
        }
        ParentDirectory::RootNet => {
            to_identifier(id.fsid, ParentDirectory::Root, 0, FileKind::RootNet)
        }
        ParentDirectory::Pid => {
            to_identifier(id.fsid, ParentDirectory::Root, to_pid(id), FileKind::Pid)
        }
        ParentDirectory::PidFd => {
            to_identifier(id.fsid, ParentDirectory::Pid, to_pid(id), FileKind::PidFd)
        }
    }
}

pub fn is_directory(id: InodeIdentifier) -> bool {
    matches!(
        to_file_type(id),
        FileKind::Root | FileKind::RootSys | FileKind::RootNet | FileKind::Pid | FileKind::PidFd
    )
}

/// 是否与某个具体进程关联（决定 uid/gid 的来源）
pub fn is_process_related(id: InodeIdentifier) -> bool {
    if to_file_type(id) == FileKind::Pid {
        return true;
    }
    matches!(
        to_parent_directory(id),
        ParentDirectory::Pid | ParentDirectory::PidFd
    )
}

/// 持久 inode：只有可调参数所在的目录类别允许写入
pub fn is_persistent_inode(id: InodeIdentifier) -> bool {
    to_parent_directory(id) == ParentDirectory::RootSys
}
