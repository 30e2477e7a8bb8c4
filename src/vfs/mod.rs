//! 虚拟文件系统（VFS）对接层
//!
//! 本模块不实现路径解析与挂载逻辑（它们属于宿主 VFS），只定义 ProcFS 与
//! 宿主之间的共享类型：
//!
//! - [`InodeIdentifier`]：`(fsid, index)` 二元组，index 为 32 位路由键
//! - [`InodeMetadata`] / [`FileMode`] / [`InodeType`]：元数据与权限位
//! - [`DirEntry`]：目录遍历回调收到的条目
//! - [`FileDescription`]：打开文件描述，承载每次打开的生成器快照
//! - [`FsError`]：与 POSIX errno 对应的错误码
//! - [`MOUNT_TABLE`]：宿主 VFS 公布的挂载点表（`/mounts`、`/df` 的数据源）

pub mod error;
pub mod file;
pub mod inode;
pub mod mount;

pub use error::FsError;
pub use file::FileDescription;
pub use inode::{DirEntry, FileMode, InodeIdentifier, InodeMetadata, InodeType, MEPOCH};
pub use mount::{MOUNT_TABLE, MountInfo, MountTable};
