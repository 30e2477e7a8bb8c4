//! `/mm`：虚拟内存对象账目（文本）

use alloc::{format, string::String, vec::Vec};

use crate::mm::MEMORY_STATS;
use crate::vfs::InodeIdentifier;

pub fn mm(_id: InodeIdentifier) -> Option<Vec<u8>> {
    let stats = MEMORY_STATS.lock();

    let mut content = String::new();
    for vmo in &stats.vmobjects {
        content.push_str(&format!(
            "VMObject: {}({}): p:{:4}\n",
            if vmo.anonymous { "anon" } else { "file" },
            vmo.ref_count,
            vmo.page_count
        ));
    }
    content.push_str(&format!("VMO count: {}\n", stats.vmobjects.len()));
    content.push_str(&format!(
        "Free physical pages: {}\n",
        stats.free_user_physical_pages()
    ));
    content.push_str(&format!(
        "Free supervisor physical pages: {}\n",
        stats.free_super_physical_pages()
    ));
    Some(content.into_bytes())
}
