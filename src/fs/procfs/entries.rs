//! 静态条目表
//!
//! 已知文件类别到（名字, 生成器）的映射，门面构造时建一次，之后只读。
//! 目录类别（sys、net、fd）在表里登记名字但没有生成器；每进程文件的
//! 名字也从这里取。fd 子节点和可调参数不在表内，它们由读写分发按父
//! 目录类别单独路由。

use alloc::vec::Vec;

use crate::fs::procfs::generators;
use crate::fs::procfs::ident::{FileKind, MAX_STATIC_FILE_INDEX};
use crate::vfs::InodeIdentifier;

/// 读取生成器：从当前内核状态生成一份完整内容。
/// None 表示内容来源已消失（如进程退出）。
pub type ReadFn = fn(InodeIdentifier) -> Option<Vec<u8>>;

/// 写入处理器：返回消费的字节数。
pub type WriteFn = fn(InodeIdentifier, &[u8]) -> usize;

#[derive(Clone, Copy)]
pub struct ProcFSDirectoryEntry {
    pub name: &'static str,
    pub kind: FileKind,
    pub read: Option<ReadFn>,
    pub write: Option<WriteFn>,
}

/// 按文件类别索引的条目表
pub struct EntryTable {
    entries: [Option<ProcFSDirectoryEntry>; MAX_STATIC_FILE_INDEX as usize],
}

impl EntryTable {
    pub fn new() -> Self {
        let mut table = EntryTable {
            entries: [None; MAX_STATIC_FILE_INDEX as usize],
        };

        table.set("mm", FileKind::RootMm, Some(generators::mm));
        table.set("mounts", FileKind::RootMounts, Some(generators::mounts));
        table.set("df", FileKind::RootDf, Some(generators::df));
        table.set("all", FileKind::RootAll, Some(generators::all));
        table.set("memstat", FileKind::RootMemstat, Some(generators::memstat));
        table.set("cpuinfo", FileKind::RootCpuinfo, Some(generators::cpuinfo));
        table.set("inodes", FileKind::RootInodes, Some(generators::inodes));
        table.set("dmesg", FileKind::RootDmesg, Some(generators::dmesg));
        table.set("self", FileKind::RootSelf, Some(generators::self_link));
        table.set("pci", FileKind::RootPci, Some(generators::pci));
        table.set("devices", FileKind::RootDevices, Some(generators::devices));
        table.set("uptime", FileKind::RootUptime, Some(generators::uptime));
        table.set("cmdline", FileKind::RootCmdline, Some(generators::cmdline));
        table.set("sys", FileKind::RootSys, None);
        table.set("net", FileKind::RootNet, None);

        table.set(
            "adapters",
            FileKind::NetAdapters,
            Some(generators::net_adapters),
        );
        table.set("tcp", FileKind::NetTcp, Some(generators::net_tcp));
        table.set("udp", FileKind::NetUdp, Some(generators::net_udp));
        table.set("local", FileKind::NetLocal, Some(generators::net_local));

        table.set("vm", FileKind::PidVm, Some(generators::pid_vm));
        table.set("vmo", FileKind::PidVmo, Some(generators::pid_vmo));
        table.set("stack", FileKind::PidStack, Some(generators::pid_stack));
        table.set("regs", FileKind::PidRegs, Some(generators::pid_regs));
        table.set("fds", FileKind::PidFds, Some(generators::pid_fds));
        table.set("exe", FileKind::PidExe, Some(generators::pid_exe));
        table.set("cwd", FileKind::PidCwd, Some(generators::pid_cwd));
        table.set("fd", FileKind::PidFd, None);

        table
    }

    fn set(&mut self, name: &'static str, kind: FileKind, read: Option<ReadFn>) {
        self.entries[kind as usize] = Some(ProcFSDirectoryEntry {
            name,
            kind,
            read,
            write: None,
        });
    }

    /// O(1) 查询。Invalid 与可调参数类别永远没有静态条目。
    pub fn get(&self, kind: FileKind) -> Option<&ProcFSDirectoryEntry> {
        if kind == FileKind::Invalid || kind == FileKind::SysVariable {
            return None;
        }
        self.entries[kind as usize].as_ref()
    }

    /// 按类别升序遍历所有已登记的条目
    pub fn iter(&self) -> impl Iterator<Item = &ProcFSDirectoryEntry> {
        self.entries.iter().flatten()
    }
}

impl Default for EntryTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_table_lookup() {
        let table = EntryTable::new();

        let uptime = table.get(FileKind::RootUptime).unwrap();
        assert!(uptime.name == "uptime");
        assert!(uptime.read.is_some());
        assert!(uptime.write.is_none());

        // 目录类别登记了名字但没有生成器
        let sys = table.get(FileKind::RootSys).unwrap();
        assert!(sys.name == "sys");
        assert!(sys.read.is_none());

        assert!(table.get(FileKind::Invalid).is_none());
        assert!(table.get(FileKind::SysVariable).is_none());
        assert!(table.get(FileKind::Root).is_none());
    }

    #[test]
    fn test_entry_table_iteration_order() {
        let table = EntryTable::new();
        let root_names: alloc::vec::Vec<_> = table
            .iter()
            .filter(|e| e.kind.is_root_level())
            .map(|e| e.name)
            .collect();
        assert!(
            root_names
                == [
                    "mm", "mounts", "df", "all", "memstat", "cpuinfo", "inodes", "dmesg", "pci",
                    "devices", "uptime", "cmdline", "self", "sys", "net"
                ]
        );
    }
}
