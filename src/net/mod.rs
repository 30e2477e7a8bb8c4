//! 网络状态表
//!
//! 网络栈在接口/套接字的生命周期事件中维护这些表；ProcFS 的 `/net/*`
//! 文件只做只读快照遍历。字段名是序列化输出的外部契约。

use alloc::{string::String, vec::Vec};

use lazy_static::lazy_static;
use serde::Serialize;

use crate::sync::SpinLock;

/// 网络适配器
#[derive(Debug, Clone, Serialize)]
pub struct AdapterInfo {
    pub name: String,
    pub class_name: String,
    pub mac_address: String,
    pub ipv4_address: String,
    pub packets_in: u64,
    pub bytes_in: u64,
    pub packets_out: u64,
    pub bytes_out: u64,
    pub link_up: bool,
}

/// TCP 套接字
#[derive(Debug, Clone, Serialize)]
pub struct TcpSocketInfo {
    pub local_address: String,
    pub local_port: u16,
    pub peer_address: String,
    pub peer_port: u16,
    pub state: String,
    pub ack_number: u32,
    pub sequence_number: u32,
    pub packets_in: u64,
    pub bytes_in: u64,
    pub packets_out: u64,
    pub bytes_out: u64,
}

/// UDP 套接字
#[derive(Debug, Clone, Serialize)]
pub struct UdpSocketInfo {
    pub local_address: String,
    pub local_port: u16,
    pub peer_address: String,
    pub peer_port: u16,
}

/// 本地（Unix 域）套接字
#[derive(Debug, Clone, Serialize)]
pub struct LocalSocketInfo {
    pub path: String,
    pub origin_pid: u32,
    pub acceptor_pid: u32,
}

lazy_static! {
    pub static ref NETWORK_ADAPTERS: SpinLock<Vec<AdapterInfo>> = SpinLock::new(Vec::new());
    pub static ref TCP_SOCKETS: SpinLock<Vec<TcpSocketInfo>> = SpinLock::new(Vec::new());
    pub static ref UDP_SOCKETS: SpinLock<Vec<UdpSocketInfo>> = SpinLock::new(Vec::new());
    pub static ref LOCAL_SOCKETS: SpinLock<Vec<LocalSocketInfo>> = SpinLock::new(Vec::new());
}
