//! PCI 设备表
//!
//! 总线枚举的结果。字段名与 `/pci` 的序列化输出一一对应。

use alloc::vec::Vec;

use lazy_static::lazy_static;
use serde::Serialize;

use crate::sync::SpinLock;

#[derive(Debug, Clone, Serialize)]
pub struct PciDeviceInfo {
    pub bus: u8,
    pub slot: u8,
    pub function: u8,
    pub vendor_id: u16,
    pub device_id: u16,
    pub revision_id: u8,
    pub subclass: u8,
    pub class: u8,
    pub subsystem_id: u16,
    pub subsystem_vendor_id: u16,
}

lazy_static! {
    pub static ref PCI_DEVICES: SpinLock<Vec<PciDeviceInfo>> = SpinLock::new(Vec::new());
}
