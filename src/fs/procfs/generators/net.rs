//! `/net/*`：网络状态表（JSON 数组）

use alloc::vec::Vec;

use crate::net::{LOCAL_SOCKETS, NETWORK_ADAPTERS, TCP_SOCKETS, UDP_SOCKETS};
use crate::vfs::InodeIdentifier;

pub fn net_adapters(_id: InodeIdentifier) -> Option<Vec<u8>> {
    let adapters = NETWORK_ADAPTERS.lock().clone();
    serde_json::to_vec(&adapters).ok()
}

pub fn net_tcp(_id: InodeIdentifier) -> Option<Vec<u8>> {
    let sockets = TCP_SOCKETS.lock().clone();
    serde_json::to_vec(&sockets).ok()
}

pub fn net_udp(_id: InodeIdentifier) -> Option<Vec<u8>> {
    let sockets = UDP_SOCKETS.lock().clone();
    serde_json::to_vec(&sockets).ok()
}

pub fn net_local(_id: InodeIdentifier) -> Option<Vec<u8>> {
    let sockets = LOCAL_SOCKETS.lock().clone();
    serde_json::to_vec(&sockets).ok()
}
