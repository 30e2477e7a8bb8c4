//! `/cpuinfo`：CPU 标识信息

use alloc::{format, vec::Vec};

use crate::cpu::CPU_INFO;
use crate::vfs::InodeIdentifier;

pub fn cpuinfo(_id: InodeIdentifier) -> Option<Vec<u8>> {
    let info = CPU_INFO.lock().clone();

    let content = format!(
        "cpuid:     {}\n\
         family:    {}\n\
         model:     {}\n\
         stepping:  {}\n\
         type:      {}\n\
         brandstr:  \"{}\"\n",
        info.vendor, info.family, info.model, info.stepping, info.cpu_type, info.brand
    );
    Some(content.into_bytes())
}
