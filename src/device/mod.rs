//! 设备注册表
//!
//! 字符/块设备驱动在探测成功后登记自己；`/devices` 逐项序列化这张表。

pub mod pci;

use alloc::{string::String, vec::Vec};

use lazy_static::lazy_static;
use serde::Serialize;

use crate::sync::SpinLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    Block,
    Character,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeviceInfo {
    pub major: u32,
    pub minor: u32,
    pub class_name: String,
    #[serde(rename = "type")]
    pub device_type: DeviceType,
}

lazy_static! {
    pub static ref DEVICE_REGISTRY: SpinLock<Vec<DeviceInfo>> = SpinLock::new(Vec::new());
}
