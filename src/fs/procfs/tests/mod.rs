//! ProcFS 测试
//!
//! 按关注点拆分的测试模块。测试通过协作者注册表构造假的进程/挂载点/
//! 网络状态；进程使用互不重复的 pid，可调参数使用互不重复的名字，
//! 保证各用例并行运行时互不干扰。

use alloc::{sync::Arc, vec, vec::Vec};

use crate::fs::procfs::{ProcFS, ProcFSInode};
use crate::kernel::task::{PROCESS_TABLE, Process, SharedProcess};
use crate::sync::SpinLock;
use crate::vfs::{DirEntry, FileDescription};

mod procfs_read;

/// 创建一个测试用 ProcFS 实例
fn create_test_procfs() -> Arc<ProcFS> {
    ProcFS::new()
}

/// 注册一个测试进程；守卫析构时自动从进程表注销
struct ProcessGuard {
    pid: u32,
    process: SharedProcess,
}

impl Drop for ProcessGuard {
    fn drop(&mut self) {
        PROCESS_TABLE.lock().remove_process(self.pid);
    }
}

fn register_process(pid: u32, name: &str) -> ProcessGuard {
    let process: SharedProcess = Arc::new(SpinLock::new(Process::new(pid, name)));
    PROCESS_TABLE.lock().add_process(process.clone());
    ProcessGuard { pid, process }
}

/// 把目录遍历的结果收集成列表
fn collect_entries(inode: &ProcFSInode) -> Vec<DirEntry> {
    let mut entries = Vec::new();
    inode
        .traverse_as_directory(|entry| {
            entries.push(entry.clone());
            true
        })
        .unwrap();
    entries
}

/// 以固定块大小读到 EOF，返回拼接的内容
fn read_to_end(
    inode: &ProcFSInode,
    description: Option<&FileDescription>,
    chunk_size: usize,
) -> Vec<u8> {
    let mut content = Vec::new();
    let mut buf = vec![0u8; chunk_size];
    loop {
        let nread = inode
            .read_bytes(content.len(), &mut buf, description)
            .unwrap();
        if nread == 0 {
            break;
        }
        content.extend_from_slice(&buf[..nread]);
    }
    content
}
