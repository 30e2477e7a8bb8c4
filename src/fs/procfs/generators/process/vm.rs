//! `/<pid>/vm`：虚拟内存区域（JSON 数组）

use alloc::{string::String, vec::Vec};

use serde::Serialize;

use crate::fs::procfs::ident::to_pid;
use crate::kernel::task::process_from_pid;
use crate::vfs::InodeIdentifier;

#[derive(Serialize)]
struct RegionSnapshot {
    readable: bool,
    writable: bool,
    address: usize,
    size: usize,
    amount_resident: usize,
    name: String,
}

pub fn pid_vm(id: InodeIdentifier) -> Option<Vec<u8>> {
    let process = process_from_pid(to_pid(id))?;

    let array: Vec<RegionSnapshot> = {
        let process = process.lock();
        process
            .regions
            .iter()
            .map(|region| RegionSnapshot {
                readable: region.readable,
                writable: region.writable,
                address: region.vaddr,
                size: region.size,
                amount_resident: region.amount_resident,
                name: region.name.clone(),
            })
            .collect()
    };

    serde_json::to_vec(&array).ok()
}
