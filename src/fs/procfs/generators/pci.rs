//! `/pci`：PCI 设备表（JSON 数组）

use alloc::vec::Vec;

use crate::device::pci::PCI_DEVICES;
use crate::vfs::InodeIdentifier;

pub fn pci(_id: InodeIdentifier) -> Option<Vec<u8>> {
    let devices = PCI_DEVICES.lock().clone();
    serde_json::to_vec(&devices).ok()
}
