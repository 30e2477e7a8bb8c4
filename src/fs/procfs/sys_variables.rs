//! 可调参数注册表
//!
//! 一份进程级的有序列表，启动期追加、稳态只读。下标 0 是哨兵（类型
//! Invalid），越界查找与未初始化共用一个分支。注册后下标即是该参数的
//! 稳定身份，出现在标识符的所有者字段里。
//!
//! 参数的存储单元由外部拥有：注册表只持有指向加锁单元的类型化句柄
//! （[`SysVariableValue`]），读写都在单元自身的锁内完成，变更回调在
//! 锁释放之后触发。

use alloc::{
    boxed::Box,
    string::{String, ToString},
    sync::Arc,
    vec,
    vec::Vec,
};

use lazy_static::lazy_static;

use crate::fs::procfs::ident::to_sys_index;
use crate::sync::SpinLock;
use crate::vfs::InodeIdentifier;

/// 变更回调：成功写入后（单元锁已释放）触发一次
pub type NotifyHook = Box<dyn Fn() + Send + Sync>;

/// 指向外部所有、锁保护的存储单元的类型化句柄
pub enum SysVariableValue {
    Invalid,
    Boolean(Arc<SpinLock<bool>>),
    Str(Arc<SpinLock<String>>),
}

pub struct SysVariable {
    pub name: String,
    pub value: SysVariableValue,
    notify: Option<NotifyHook>,
}

impl SysVariable {
    pub fn notify(&self) {
        if let Some(hook) = &self.notify {
            hook();
        }
    }
}

lazy_static! {
    static ref SYS_VARIABLES: SpinLock<Vec<Arc<SysVariable>>> = SpinLock::new(vec![Arc::new(
        SysVariable {
            name: String::new(),
            value: SysVariableValue::Invalid,
            notify: None,
        }
    )]);
}

pub(crate) fn add_bool(name: &str, cell: Arc<SpinLock<bool>>, notify: Option<NotifyHook>) {
    let mut variables = SYS_VARIABLES.lock();
    log::debug!("procfs: 注册布尔参数 /sys/{}", name);
    variables.push(Arc::new(SysVariable {
        name: name.to_string(),
        value: SysVariableValue::Boolean(cell),
        notify,
    }));
}

pub(crate) fn add_string(name: &str, cell: Arc<SpinLock<String>>, notify: Option<NotifyHook>) {
    let mut variables = SYS_VARIABLES.lock();
    log::debug!("procfs: 注册字符串参数 /sys/{}", name);
    variables.push(Arc::new(SysVariable {
        name: name.to_string(),
        value: SysVariableValue::Str(cell),
        notify,
    }));
}

/// 标识符对应的参数；越界时返回哨兵
pub(crate) fn for_inode(id: InodeIdentifier) -> Arc<SysVariable> {
    let variables = SYS_VARIABLES.lock();
    let index = to_sys_index(id);
    match variables.get(index) {
        Some(variable) => variable.clone(),
        None => variables[0].clone(),
    }
}

/// 注册表快照（含哨兵，遍历方需跳过下标 0）
pub(crate) fn snapshot() -> Vec<Arc<SysVariable>> {
    SYS_VARIABLES.lock().clone()
}

pub(crate) fn read_sys_bool(id: InodeIdentifier) -> Option<Vec<u8>> {
    let variable = for_inode(id);
    let SysVariableValue::Boolean(cell) = &variable.value else {
        unreachable!("procfs: 对非布尔参数执行布尔读取");
    };
    let value = { *cell.lock() };
    Some(if value { vec![b'1', b'\n'] } else { vec![b'0', b'\n'] })
}

pub(crate) fn write_sys_bool(id: InodeIdentifier, data: &[u8]) -> usize {
    let variable = for_inode(id);
    let SysVariableValue::Boolean(cell) = &variable.value else {
        unreachable!("procfs: 对非布尔参数执行布尔写入");
    };

    // 首字节必须是 '0' 或 '1'；其它输入按文档化行为静默忽略，
    // 但仍然报告消费了全部字节
    if data.is_empty() || !(data[0] == b'0' || data[0] == b'1') {
        return data.len();
    }

    {
        *cell.lock() = data[0] == b'1';
    }
    variable.notify();
    data.len()
}

pub(crate) fn read_sys_string(id: InodeIdentifier) -> Option<Vec<u8>> {
    let variable = for_inode(id);
    let SysVariableValue::Str(cell) = &variable.value else {
        unreachable!("procfs: 对非字符串参数执行字符串读取");
    };
    let result = cell.lock().as_bytes().to_vec();
    Some(result)
}

pub(crate) fn write_sys_string(id: InodeIdentifier, data: &[u8]) -> usize {
    let variable = for_inode(id);
    let SysVariableValue::Str(cell) = &variable.value else {
        unreachable!("procfs: 对非字符串参数执行字符串写入");
    };

    {
        *cell.lock() = String::from_utf8_lossy(data).into_owned();
    }
    variable.notify();
    data.len()
}
