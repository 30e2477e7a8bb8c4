//! `/mounts`：挂载点列表（文本）

use alloc::{format, string::String, vec::Vec};

use crate::vfs::{InodeIdentifier, MOUNT_TABLE};

pub fn mounts(_id: InodeIdentifier) -> Option<Vec<u8>> {
    let mut content = String::new();
    for mount in MOUNT_TABLE.list_all() {
        match mount.host {
            None => content.push_str(&format!("{} @ /\n", mount.class_name)),
            Some(host) => content.push_str(&format!(
                "{} @ {}:{} {}\n",
                mount.class_name, host.fsid, host.index, mount.absolute_path
            )),
        }
    }
    Some(content.into_bytes())
}
