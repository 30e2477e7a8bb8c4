//! `/<pid>/regs`：各线程的寄存器快照（文本）

use alloc::{format, string::String, vec::Vec};

use crate::fs::procfs::ident::to_pid;
use crate::kernel::task::process_from_pid;
use crate::vfs::InodeIdentifier;

pub fn pid_regs(id: InodeIdentifier) -> Option<Vec<u8>> {
    let process = process_from_pid(to_pid(id))?;
    let process = process.lock();

    let mut content = String::new();
    for thread in &process.threads {
        let regs = &thread.regs;
        content.push_str(&format!("Thread {}:\n", thread.tid));
        content.push_str(&format!("pc:      {:x}\n", regs.pc));
        content.push_str(&format!("ra:      {:x}\n", regs.ra));
        content.push_str(&format!("sp:      {:x}\n", regs.sp));
        content.push_str(&format!("gp:      {:x}\n", regs.gp));
        content.push_str(&format!("tp:      {:x}\n", regs.tp));
        content.push_str(&format!("fp:      {:x}\n", regs.fp));
        content.push_str(&format!("sstatus: {:x}\n", regs.sstatus));
    }
    Some(content.into_bytes())
}
