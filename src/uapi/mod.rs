//! 与 POSIX 兼容的普通数据类型
pub mod time;
