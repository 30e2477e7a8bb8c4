//! 进程信息伪文件系统（ProcFS）
//!
//! 该 crate 提供一个纯内存的合成文件系统，将内核与进程状态以文件和目录的
//! 形式导出给上层 VFS。除 `/sys` 下的可调参数外，整个命名空间只读。
//!
//! # 架构
//!
//! - [`vfs`]：与宿主 VFS 对接的抽象层（inode 标识符、元数据、错误码、
//!   打开文件描述）
//! - [`fs::procfs`]：核心实现（标识符编码、静态条目表、可调参数注册表、
//!   inode 缓存、目录引擎、读写分发）
//! - 协作者注册表（[`kernel`]、[`mm`]、[`net`]、[`device`]、[`cpu`]、
//!   [`klog`]）：由宿主内核填充，生成器只做只读遍历
//!
//! # 使用示例
//!
//! ```rust,ignore
//! let procfs = ProcFS::new();
//! let root = procfs.get_inode(procfs.root_inode());
//! let id = root.lookup("uptime")?;
//! let inode = procfs.get_inode(id);
//! let n = inode.read_bytes(0, &mut buf, None)?;
//! ```
#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod config;
pub mod cpu;
pub mod device;
pub mod fs;
pub mod kernel;
pub mod klog;
pub mod mm;
pub mod net;
pub mod sync;
pub mod uapi;
pub mod vfs;
