//! `/devices`：已登记的字符/块设备（JSON 数组）

use alloc::vec::Vec;

use crate::device::DEVICE_REGISTRY;
use crate::vfs::InodeIdentifier;

pub fn devices(_id: InodeIdentifier) -> Option<Vec<u8>> {
    let devices = DEVICE_REGISTRY.lock().clone();
    serde_json::to_vec(&devices).ok()
}
