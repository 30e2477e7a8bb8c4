//! `/<pid>/stack`：内核栈回溯（文本）

use alloc::{format, string::String, vec::Vec};

use crate::fs::procfs::ident::to_pid;
use crate::kernel::task::process_from_pid;
use crate::vfs::InodeIdentifier;

pub fn pid_stack(id: InodeIdentifier) -> Option<Vec<u8>> {
    let process = process_from_pid(to_pid(id))?;
    let process = process.lock();

    let mut content = String::new();
    for frame in &process.backtrace {
        content.push_str(&format!("{:08x}  {}\n", frame.address, frame.symbol));
    }
    Some(content.into_bytes())
}
