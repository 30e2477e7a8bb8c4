//! 内核协作者模型
//!
//! ProcFS 自身不产生任何状态；本模块定义宿主内核向它公布状态所用的
//! 注册表与数据结构。所有注册表都是进程级单例，生成器对它们只做
//! 一次性的只读快照遍历。

pub mod kparams;
pub mod task;
pub mod timer;

pub use task::{
    FdInfo, PROCESS_TABLE, Process, ProcessPriority, ProcessState, ProcessTable, Region,
    RegisterDump, SharedProcess, StackFrame, ThreadInfo, VmObjectRef, current_pid,
    process_from_pid, set_current_pid,
};
