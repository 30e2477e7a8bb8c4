//! ProcFS - 进程信息伪文件系统
//!
//! 把内核与进程状态以文件和目录的形式导出。命名空间是动态的：每个存活
//! 进程对应一棵 `/<pid>/` 子树，`/sys/` 下是运行期注册的可调参数。
//!
//! # 组件
//!
//! - [`ident`] - 标识符编码：把 (父目录类别, 所有者, 文件类别) 打包进
//!   32 位 inode index，分发只看这个编码
//! - [`entries`] - 静态条目表：已知文件名到生成器的映射
//! - [`sys_variables`] - 可调参数注册表
//! - [`ProcFS`] - 门面：inode 缓存（驻留化）与对外工厂
//! - [`ProcFSInode`] - 目录引擎与读写分发
//! - [`generators`] - 内容生成器（每次读取时重新生成）
//!
//! # 设计概览
//!
//! inode 对象不携带内容，只携带标识符和指回门面的引用；同一标识符在任意
//! 时刻至多存在一个 inode 对象（驻留化）。读取内容以"每次打开"为粒度做
//! 快照（见 [`crate::vfs::FileDescription`]），读尽后快照失效。
//! 除 `/sys` 下的可调参数外一切只写入都以权限错误拒绝，目录结构不可变。

pub mod entries;
pub mod generators;
pub mod ident;
pub mod inode;
pub mod procfs;
pub mod sys_variables;

pub use entries::{ProcFSDirectoryEntry, ReadFn, WriteFn};
pub use ident::{FileKind, ParentDirectory};
pub use inode::ProcFSInode;
pub use procfs::ProcFS;
pub use sys_variables::{NotifyHook, SysVariable, SysVariableValue};

#[cfg(test)]
mod tests;
