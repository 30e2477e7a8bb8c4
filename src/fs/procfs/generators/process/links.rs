//! 每进程符号链接的目标路径
//!
//! `exe`、`cwd` 与 `fd/<n>` 的内容都是绝对路径字节，无换行。

use alloc::vec::Vec;

use crate::fs::procfs::ident::{to_fd, to_pid};
use crate::kernel::task::process_from_pid;
use crate::vfs::InodeIdentifier;

pub fn pid_exe(id: InodeIdentifier) -> Option<Vec<u8>> {
    let process = process_from_pid(to_pid(id))?;
    let process = process.lock();
    process
        .exe_path
        .as_ref()
        .map(|path| path.as_bytes().to_vec())
}

pub fn pid_cwd(id: InodeIdentifier) -> Option<Vec<u8>> {
    let process = process_from_pid(to_pid(id))?;
    let cwd = process.lock().cwd.clone();
    Some(cwd.into_bytes())
}

pub fn pid_fd_entry(id: InodeIdentifier) -> Option<Vec<u8>> {
    let process = process_from_pid(to_pid(id))?;
    let fd = to_fd(id);
    let process = process.lock();
    process
        .fd(fd)
        .map(|info| info.absolute_path.as_bytes().to_vec())
}
