//! CPU 标识
//!
//! 体系结构初始化代码在启动时探测一次并填入；`/cpuinfo` 原样渲染。

use alloc::string::String;

use lazy_static::lazy_static;

use crate::sync::SpinLock;

#[derive(Debug, Clone)]
pub struct CpuInfo {
    /// 厂商标识串
    pub vendor: String,
    pub family: u32,
    pub model: u32,
    pub stepping: u32,
    pub cpu_type: u32,
    /// 型号全称
    pub brand: String,
}

impl CpuInfo {
    pub const fn empty() -> Self {
        CpuInfo {
            vendor: String::new(),
            family: 0,
            model: 0,
            stepping: 0,
            cpu_type: 0,
            brand: String::new(),
        }
    }
}

lazy_static! {
    pub static ref CPU_INFO: SpinLock<CpuInfo> = SpinLock::new(CpuInfo::empty());
}
