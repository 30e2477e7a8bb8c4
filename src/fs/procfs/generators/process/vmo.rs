//! `/<pid>/vmo`：区域与虚拟内存对象明细（文本）

use alloc::{format, string::String, vec::Vec};

use crate::fs::procfs::ident::to_pid;
use crate::kernel::task::process_from_pid;
use crate::vfs::InodeIdentifier;

pub fn pid_vmo(id: InodeIdentifier) -> Option<Vec<u8>> {
    let process = process_from_pid(to_pid(id))?;
    let process = process.lock();

    let mut content = String::from("BEGIN       END         SIZE        NAME\n");
    for region in &process.regions {
        content.push_str(&format!(
            "{:x} -- {:x}    {:x}    {}\n",
            region.vaddr,
            region.vaddr + region.size - 1,
            region.size,
            region.name
        ));
        content.push_str(&format!(
            "VMO: {}({}): p:{}\n",
            if region.vmo.anonymous {
                "anonymous"
            } else {
                "file-backed"
            },
            region.vmo.ref_count,
            region.vmo.page_count
        ));
    }
    Some(content.into_bytes())
}
