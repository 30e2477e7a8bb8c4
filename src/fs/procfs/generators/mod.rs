//! 内容生成器
//!
//! 每个生成器是一个 `fn(InodeIdentifier) -> Option<Vec<u8>>`：从当前内核
//! 状态生成一份完整的文件内容，返回 None 表示内容来源已消失（进程退出、
//! fd 关闭）。生成器不持久化任何东西，每次调用重新生成；一致性以一次
//! 调用为界，跨文件不作承诺。

pub mod all;
pub mod cmdline;
pub mod cpuinfo;
pub mod devices;
pub mod df;
pub mod dmesg;
pub mod inodes;
pub mod memstat;
pub mod mm;
pub mod mounts;
pub mod net;
pub mod pci;
pub mod process;
pub mod self_link;
pub mod uptime;

pub use all::all;
pub use cmdline::cmdline;
pub use cpuinfo::cpuinfo;
pub use devices::devices;
pub use df::df;
pub use dmesg::dmesg;
pub use inodes::inodes;
pub use memstat::memstat;
pub use mm::mm;
pub use mounts::mounts;
pub use net::{net_adapters, net_local, net_tcp, net_udp};
pub use pci::pci;
pub use process::{pid_cwd, pid_exe, pid_fd_entry, pid_fds, pid_regs, pid_stack, pid_vm, pid_vmo};
pub use self_link::self_link;
pub use uptime::uptime;
