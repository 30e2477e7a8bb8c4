//! `/<pid>/fds`：打开的文件描述符（JSON 数组）

use alloc::{string::String, vec::Vec};

use serde::Serialize;

use crate::fs::procfs::ident::to_pid;
use crate::kernel::task::process_from_pid;
use crate::vfs::InodeIdentifier;

#[derive(Serialize)]
struct FdSnapshot {
    fd: usize,
    absolute_path: String,
    seekable: bool,
    class: String,
    offset: usize,
}

pub fn pid_fds(id: InodeIdentifier) -> Option<Vec<u8>> {
    let process = process_from_pid(to_pid(id))?;

    let array: Vec<FdSnapshot> = {
        let process = process.lock();
        if process.number_of_open_fds() == 0 {
            return None;
        }
        process
            .fds
            .iter()
            .enumerate()
            .filter_map(|(fd, slot)| {
                slot.as_ref().map(|info| FdSnapshot {
                    fd,
                    absolute_path: info.absolute_path.clone(),
                    seekable: info.seekable,
                    class: info.class.clone(),
                    offset: info.offset,
                })
            })
            .collect()
    };

    serde_json::to_vec(&array).ok()
}
