//! `/inodes`：所有 ProcFS 实例当前驻留的 inode

use alloc::{format, string::String, vec::Vec};

use crate::fs::procfs::ProcFS;
use crate::vfs::InodeIdentifier;

pub fn inodes(_id: InodeIdentifier) -> Option<Vec<u8>> {
    let mut content = String::new();
    for fs in ProcFS::instances() {
        for (index, ref_count) in fs.live_inodes() {
            content.push_str(&format!(
                "Inode {:02}:{:08} ({})\n",
                fs.fsid(),
                index,
                ref_count
            ));
        }
    }
    Some(content.into_bytes())
}
