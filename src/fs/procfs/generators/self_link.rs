//! `/self`：指向当前进程目录的符号链接
//!
//! 链接目标即当前 pid 的十进制字符串，无换行。

use alloc::{string::ToString, vec::Vec};

use crate::kernel::task::current_pid;
use crate::vfs::InodeIdentifier;

pub fn self_link(_id: InodeIdentifier) -> Option<Vec<u8>> {
    Some(current_pid().to_string().into_bytes())
}
