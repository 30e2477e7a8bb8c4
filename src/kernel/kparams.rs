//! 内核启动参数

use alloc::string::{String, ToString};

use lazy_static::lazy_static;

use crate::sync::SpinLock;

pub struct KParams {
    cmdline: String,
}

lazy_static! {
    static ref KPARAMS: SpinLock<KParams> = SpinLock::new(KParams {
        cmdline: String::new(),
    });
}

/// 启动命令行（启动早期由引导代码设置一次）
pub fn cmdline() -> String {
    KPARAMS.lock().cmdline.clone()
}

pub fn set_cmdline(cmdline: &str) {
    KPARAMS.lock().cmdline = cmdline.to_string();
}
