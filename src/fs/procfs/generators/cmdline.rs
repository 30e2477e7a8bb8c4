//! `/cmdline`：内核启动命令行

use alloc::{format, vec::Vec};

use crate::kernel::kparams;
use crate::vfs::InodeIdentifier;

pub fn cmdline(_id: InodeIdentifier) -> Option<Vec<u8>> {
    Some(format!("{}\n", kparams::cmdline()).into_bytes())
}
