//! ProcFS Inode：目录引擎与读写分发
//!
//! inode 对象只携带标识符和指回门面的弱引用，没有任何缓存内容；
//! 元数据、目录遍历、名字解析、读写全部由标识符编码直接推导。

use alloc::{
    string::{String, ToString},
    sync::{Arc, Weak},
    vec::Vec,
};

use crate::fs::procfs::entries::{ReadFn, WriteFn};
use crate::fs::procfs::ident::{
    self, FileKind, ParentDirectory, sys_var_to_identifier, to_identifier, to_identifier_with_fd,
};
use crate::fs::procfs::procfs::ProcFS;
use crate::fs::procfs::sys_variables::{self, SysVariableValue};
use crate::kernel::task::process_from_pid;
use crate::vfs::{
    DirEntry, FileDescription, FileMode, FsError, InodeIdentifier, InodeMetadata, InodeType,
    MEPOCH,
};

pub struct ProcFSInode {
    ident: InodeIdentifier,
    fs: Weak<ProcFS>,
}

impl ProcFSInode {
    pub(crate) fn new(fs: Weak<ProcFS>, ident: InodeIdentifier) -> Self {
        ProcFSInode { fs, ident }
    }

    pub fn identifier(&self) -> InodeIdentifier {
        self.ident
    }

    fn fs(&self) -> Arc<ProcFS> {
        self.fs.upgrade().expect("procfs: inode 比文件系统活得更久")
    }

    /// 元数据完全由标识符推导：模式位看文件类别，uid/gid 看所属进程，
    /// 时间戳是固定纪元
    pub fn metadata(&self) -> InodeMetadata {
        let mut metadata = InodeMetadata {
            id: self.ident,
            inode_type: InodeType::File,
            mode: FileMode::from_bits_truncate(0o100644),
            uid: 0,
            gid: 0,
            size: 0,
            atime: MEPOCH,
            mtime: MEPOCH,
            ctime: MEPOCH,
            nlinks: 1,
            blocks: 0,
            rdev: 0,
        };

        if ident::is_process_related(self.ident) {
            // 进程已退出时维持默认的 0:0
            if let Some(process) = process_from_pid(ident::to_pid(self.ident)) {
                let process = process.lock();
                metadata.uid = process.uid;
                metadata.gid = process.gid;
            }
        }

        if ident::to_parent_directory(self.ident) == ParentDirectory::PidFd {
            metadata.inode_type = InodeType::Symlink;
            metadata.mode = FileMode::from_bits_truncate(0o120777);
            return metadata;
        }

        match ident::to_file_type(self.ident) {
            FileKind::RootSelf | FileKind::PidCwd | FileKind::PidExe => {
                metadata.inode_type = InodeType::Symlink;
                metadata.mode = FileMode::from_bits_truncate(0o120777);
            }
            FileKind::Root
            | FileKind::RootSys
            | FileKind::RootNet
            | FileKind::Pid
            | FileKind::PidFd => {
                metadata.inode_type = InodeType::Directory;
                metadata.mode = FileMode::from_bits_truncate(0o040777);
                metadata.nlinks = 2;
            }
            _ => {}
        }

        metadata
    }

    /// 目录遍历：先发出 `.` 和 `..`，再按目录类别逐项发出子节点。
    /// 回调返回 false 时提前终止。
    ///
    /// 各数据源（条目表、进程表、fd 槽位、参数注册表）都先在锁内取好
    /// 快照，发出回调时不持有任何锁。
    pub fn traverse_as_directory<F>(&self, mut callback: F) -> Result<(), FsError>
    where
        F: FnMut(&DirEntry) -> bool,
    {
        if !ident::is_directory(self.ident) {
            return Err(FsError::NotDirectory);
        }

        let fs = self.fs();
        let fsid = self.ident.fsid;
        let pid = ident::to_pid(self.ident);

        let mut emit = |name: String, id: InodeIdentifier| -> bool {
            callback(&DirEntry { name, id })
        };

        if !emit(".".to_string(), self.ident) {
            return Ok(());
        }
        if !emit("..".to_string(), ident::to_parent_id(self.ident)) {
            return Ok(());
        }

        match ident::to_file_type(self.ident) {
            FileKind::Root => {
                for entry in fs.entries().iter() {
                    if !entry.kind.is_root_level() {
                        continue;
                    }
                    let id = to_identifier(fsid, ParentDirectory::Root, 0, entry.kind);
                    if !emit(entry.name.to_string(), id) {
                        return Ok(());
                    }
                }
                let pids = crate::kernel::task::PROCESS_TABLE.lock().pids();
                for pid_child in pids {
                    let id = to_identifier(fsid, ParentDirectory::Root, pid_child, FileKind::Pid);
                    if !emit(pid_child.to_string(), id) {
                        return Ok(());
                    }
                }
            }

            FileKind::RootSys => {
                let variables = sys_variables::snapshot();
                for (index, variable) in variables.iter().enumerate().skip(1) {
                    if !emit(variable.name.clone(), sys_var_to_identifier(fsid, index)) {
                        return Ok(());
                    }
                }
            }

            FileKind::RootNet => {
                let children = [
                    ("adapters", FileKind::NetAdapters),
                    ("tcp", FileKind::NetTcp),
                    ("udp", FileKind::NetUdp),
                    ("local", FileKind::NetLocal),
                ];
                for (name, kind) in children {
                    let id = to_identifier(fsid, ParentDirectory::RootNet, 0, kind);
                    if !emit(name.to_string(), id) {
                        return Ok(());
                    }
                }
            }

            FileKind::Pid => {
                let process = process_from_pid(pid).ok_or(FsError::NotFound)?;
                let has_exe = process.lock().exe_path.is_some();
                for entry in fs.entries().iter() {
                    if !entry.kind.is_pid_level() {
                        continue;
                    }
                    // 没有可执行文件的进程不列出 exe
                    if entry.kind == FileKind::PidExe && !has_exe {
                        continue;
                    }
                    let id = to_identifier(fsid, ParentDirectory::Pid, pid, entry.kind);
                    if !emit(entry.name.to_string(), id) {
                        return Ok(());
                    }
                }
            }

            FileKind::PidFd => {
                let process = process_from_pid(pid).ok_or(FsError::NotFound)?;
                let open_fds: Vec<usize> = {
                    let process = process.lock();
                    process
                        .fds
                        .iter()
                        .enumerate()
                        .filter_map(|(fd, slot)| slot.as_ref().map(|_| fd))
                        .collect()
                };
                for fd in open_fds {
                    if !emit(fd.to_string(), to_identifier_with_fd(fsid, pid, fd)) {
                        return Ok(());
                    }
                }
            }

            _ => unreachable!("procfs: 目录谓词与类别不一致"),
        }

        Ok(())
    }

    /// 名字解析，与遍历对称：遍历发出的每个名字都能在这里解析回
    /// 同一个标识符
    pub fn lookup(&self, name: &str) -> Result<InodeIdentifier, FsError> {
        if !ident::is_directory(self.ident) {
            return Err(FsError::NotDirectory);
        }
        if name == "." {
            return Ok(self.ident);
        }
        if name == ".." {
            return Ok(ident::to_parent_id(self.ident));
        }

        let fs = self.fs();
        let fsid = self.ident.fsid;

        match ident::to_file_type(self.ident) {
            FileKind::Root => {
                for entry in fs.entries().iter() {
                    if entry.kind.is_root_level() && name == entry.name {
                        return Ok(to_identifier(fsid, ParentDirectory::Root, 0, entry.kind));
                    }
                }
                if let Some(pid) = parse_decimal(name) {
                    if process_from_pid(pid).is_some() {
                        return Ok(to_identifier(fsid, ParentDirectory::Root, pid, FileKind::Pid));
                    }
                }
                Err(FsError::NotFound)
            }

            FileKind::RootSys => {
                let variables = sys_variables::snapshot();
                for (index, variable) in variables.iter().enumerate().skip(1) {
                    if name == variable.name {
                        return Ok(sys_var_to_identifier(fsid, index));
                    }
                }
                Err(FsError::NotFound)
            }

            FileKind::RootNet => {
                let kind = match name {
                    "adapters" => FileKind::NetAdapters,
                    "tcp" => FileKind::NetTcp,
                    "udp" => FileKind::NetUdp,
                    "local" => FileKind::NetLocal,
                    _ => return Err(FsError::NotFound),
                };
                Ok(to_identifier(fsid, ParentDirectory::RootNet, 0, kind))
            }

            FileKind::Pid => {
                let pid = ident::to_pid(self.ident);
                let process = process_from_pid(pid).ok_or(FsError::NotFound)?;
                let has_exe = process.lock().exe_path.is_some();
                for entry in fs.entries().iter() {
                    if !entry.kind.is_pid_level() {
                        continue;
                    }
                    if entry.kind == FileKind::PidExe && !has_exe {
                        continue;
                    }
                    if name == entry.name {
                        return Ok(to_identifier(fsid, ParentDirectory::Pid, pid, entry.kind));
                    }
                }
                Err(FsError::NotFound)
            }

            FileKind::PidFd => {
                let pid = ident::to_pid(self.ident);
                let fd = parse_decimal(name).ok_or(FsError::NotFound)? as usize;
                let process = process_from_pid(pid).ok_or(FsError::NotFound)?;
                if process.lock().fd(fd).is_none() {
                    return Err(FsError::NotFound);
                }
                Ok(to_identifier_with_fd(fsid, pid, fd))
            }

            _ => unreachable!("procfs: 目录谓词与类别不一致"),
        }
    }

    /// 读取内容
    ///
    /// 生成器的定位顺序：静态条目表 -> fd 子节点 -> 可调参数。命中之后：
    /// - 没有打开文件描述时每次现生成；
    /// - 有打开文件描述时，首次读取生成快照存放在描述上，后续读取从
    ///   快照切片；某次读取返回 0 字节后清除快照，下一次重新生成。
    pub fn read_bytes(
        &self,
        offset: usize,
        buf: &mut [u8],
        description: Option<&FileDescription>,
    ) -> Result<usize, FsError> {
        let fs = self.fs();

        let read_fn: ReadFn = match fs.entry(ident::to_file_type(self.ident)).and_then(|e| e.read)
        {
            Some(read_fn) => read_fn,
            None => match ident::to_parent_directory(self.ident) {
                ParentDirectory::PidFd => crate::fs::procfs::generators::pid_fd_entry,
                ParentDirectory::RootSys => {
                    match &sys_variables::for_inode(self.ident).value {
                        SysVariableValue::Boolean(_) => sys_variables::read_sys_bool,
                        SysVariableValue::Str(_) => sys_variables::read_sys_string,
                        SysVariableValue::Invalid => {
                            unreachable!("procfs: 读取了无效的可调参数标识符")
                        }
                    }
                }
                _ => unreachable!("procfs: 标识符 {:?} 不可读取", self.ident),
            },
        };

        let description = match description {
            None => {
                // 无打开描述：现生成现切片
                let data = read_fn(self.ident).ok_or(FsError::NotFound)?;
                return Ok(copy_slice(&data, offset, buf));
            }
            Some(description) => description,
        };

        let mut cache = description.generator_cache();
        if cache.is_none() {
            *cache = Some(read_fn(self.ident).ok_or(FsError::NotFound)?);
        }
        let nread = copy_slice(cache.as_ref().unwrap(), offset, buf);
        if nread == 0 {
            // 读尽：丢弃快照，让下一次读取看到新内容
            *cache = None;
        }
        Ok(nread)
    }

    /// 写入内容。只有可调参数可写；其余一律权限拒绝。
    /// 非零偏移属于调用方违约。
    pub fn write_bytes(&self, offset: usize, buf: &[u8]) -> Result<usize, FsError> {
        let fs = self.fs();

        let write_fn: WriteFn = match fs.entry(ident::to_file_type(self.ident)) {
            Some(entry) => match entry.write {
                Some(write_fn) => write_fn,
                None => return Err(FsError::PermissionDenied),
            },
            None => {
                if ident::to_parent_directory(self.ident) != ParentDirectory::RootSys {
                    return Err(FsError::PermissionDenied);
                }
                match &sys_variables::for_inode(self.ident).value {
                    SysVariableValue::Boolean(_) => sys_variables::write_sys_bool,
                    SysVariableValue::Str(_) => sys_variables::write_sys_string,
                    SysVariableValue::Invalid => {
                        unreachable!("procfs: 写入了无效的可调参数标识符")
                    }
                }
            }
        };

        assert!(ident::is_persistent_inode(self.ident));
        assert!(offset == 0, "procfs: 不支持带偏移的写入");

        Ok(write_fn(self.ident, buf))
    }

    /// 目录项总数（含 `.` 和 `..`）
    pub fn directory_entry_count(&self) -> Result<usize, FsError> {
        let mut count = 0;
        self.traverse_as_directory(|_| {
            count += 1;
            true
        })?;
        Ok(count)
    }

    /// 目录结构不可变
    pub fn add_child(
        &self,
        _child: InodeIdentifier,
        _name: &str,
        _mode: FileMode,
    ) -> Result<(), FsError> {
        Err(FsError::PermissionDenied)
    }

    pub fn remove_child(&self, _name: &str) -> Result<(), FsError> {
        Err(FsError::PermissionDenied)
    }

    pub fn chmod(&self, _mode: FileMode) -> Result<(), FsError> {
        Err(FsError::PermissionDenied)
    }

    pub fn chown(&self, _uid: u32, _gid: u32) -> Result<(), FsError> {
        Err(FsError::PermissionDenied)
    }

    /// 元数据没有落盘形态，刷新是空操作
    pub fn flush_metadata(&self) {}
}

impl Drop for ProcFSInode {
    fn drop(&mut self) {
        if let Some(fs) = self.fs.upgrade() {
            fs.remove_dead_inode(self.ident.index);
        }
    }
}

/// 从 data[offset..] 拷贝至多 buf.len() 字节，返回拷贝数
fn copy_slice(data: &[u8], offset: usize, buf: &mut [u8]) -> usize {
    if offset >= data.len() {
        return 0;
    }
    let nread = (data.len() - offset).min(buf.len());
    buf[..nread].copy_from_slice(&data[offset..offset + nread]);
    nread
}

/// 纯十进制数字解析（不接受符号、空串与溢出）
fn parse_decimal(name: &str) -> Option<u32> {
    if name.is_empty() || !name.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    name.parse::<u32>().ok()
}
