//! VFS 错误类型
//!
//! 定义了与 POSIX 兼容的文件系统错误码，可通过 [`FsError::to_errno()`] 转换为系统调用错误码。

/// VFS 错误类型
///
/// 各错误码对应标准 POSIX errno 值。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsError {
    // 文件/目录相关
    NotFound,      // -ENOENT(2): 文件不存在
    AlreadyExists, // -EEXIST(17): 文件已存在
    NotDirectory,  // -ENOTDIR(20): 不是目录
    IsDirectory,   // -EISDIR(21): 是目录

    // 权限相关
    PermissionDenied, // -EACCES(13): 权限被拒绝

    // 文件描述符相关
    BadFileDescriptor, // -EBADF(9): 无效的文件描述符

    // 参数相关
    InvalidArgument, // -EINVAL(22): 无效参数

    // 文件系统相关
    ReadOnlyFs, // -EROFS(30): 只读文件系统
    IoError,    // -EIO(5): I/O 错误

    // 其他
    NotSupported, // -ENOTSUP(95): 操作不支持
}

impl FsError {
    /// 转换为系统调用错误码（负数）
    pub fn to_errno(&self) -> isize {
        match self {
            FsError::NotFound => -2,
            FsError::IoError => -5,
            FsError::BadFileDescriptor => -9,
            FsError::PermissionDenied => -13,
            FsError::AlreadyExists => -17,
            FsError::NotDirectory => -20,
            FsError::IsDirectory => -21,
            FsError::InvalidArgument => -22,
            FsError::ReadOnlyFs => -30,
            FsError::NotSupported => -95,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert!(FsError::NotFound.to_errno() == -2);
        assert!(FsError::PermissionDenied.to_errno() == -13);
        assert!(FsError::ReadOnlyFs.to_errno() == -30);
    }
}
