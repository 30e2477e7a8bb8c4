//! `/uptime`：系统运行秒数

use alloc::{format, vec::Vec};

use crate::kernel::timer;
use crate::vfs::InodeIdentifier;

pub fn uptime(_id: InodeIdentifier) -> Option<Vec<u8>> {
    Some(format!("{}\n", timer::get_time_ms() / 1000).into_bytes())
}
