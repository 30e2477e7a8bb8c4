//! 进程表
//!
//! 该模块维护系统中所有进程的映射表，使用进程 ID 作为键。
//! 进程描述符由宿主内核在创建/退出时登记与注销；ProcFS 的目录引擎和
//! 生成器通过 [`PROCESS_TABLE`] 查找与遍历。
//! 每个进程以 `Arc<SpinLock<Process>>` 形式共享，遍历时先取出 Arc 并
//! 释放表锁，再对单个进程加锁做快照。

use alloc::{
    collections::btree_map::BTreeMap,
    string::{String, ToString},
    sync::Arc,
    vec::Vec,
};
use core::sync::atomic::{AtomicU32, Ordering};

use lazy_static::lazy_static;

use crate::sync::SpinLock;

pub type SharedProcess = Arc<SpinLock<Process>>;

/// 进程调度状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessState {
    Runnable,
    Running,
    Sleeping,
    Stopped,
    Dead,
}

impl ProcessState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessState::Runnable => "Runnable",
            ProcessState::Running => "Running",
            ProcessState::Sleeping => "Sleeping",
            ProcessState::Stopped => "Stopped",
            ProcessState::Dead => "Dead",
        }
    }
}

/// 进程调度优先级
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessPriority {
    Idle,
    Low,
    Normal,
    High,
}

impl ProcessPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessPriority::Idle => "Idle",
            ProcessPriority::Low => "Low",
            ProcessPriority::Normal => "Normal",
            ProcessPriority::High => "High",
        }
    }
}

/// 线程寄存器快照（RISC-V 命名）
#[derive(Debug, Clone, Default)]
pub struct RegisterDump {
    pub pc: usize,
    pub ra: usize,
    pub sp: usize,
    pub gp: usize,
    pub tp: usize,
    pub fp: usize,
    pub sstatus: usize,
}

/// 线程信息
#[derive(Debug, Clone)]
pub struct ThreadInfo {
    pub tid: u32,
    pub regs: RegisterDump,
}

/// 内核栈回溯中的一帧
#[derive(Debug, Clone)]
pub struct StackFrame {
    pub address: usize,
    pub symbol: String,
}

/// 虚拟内存对象的引用信息
#[derive(Debug, Clone)]
pub struct VmObjectRef {
    pub anonymous: bool,
    pub ref_count: usize,
    pub page_count: usize,
}

/// 一段虚拟内存区域
#[derive(Debug, Clone)]
pub struct Region {
    pub name: String,
    pub vaddr: usize,
    pub size: usize,
    pub readable: bool,
    pub writable: bool,
    pub amount_resident: usize,
    pub vmo: VmObjectRef,
}

/// 打开的文件描述符信息
#[derive(Debug, Clone)]
pub struct FdInfo {
    pub absolute_path: String,
    pub seekable: bool,
    pub class: String,
    pub offset: usize,
}

/// 进程描述符
///
/// ProcFS 只读取这些字段；除 fd 表有增删辅助方法外，其余字段由宿主
/// 内核直接维护。
pub struct Process {
    pub pid: u32,
    pub ppid: u32,
    pub pgid: u32,
    pub sid: u32,
    pub uid: u32,
    pub gid: u32,
    pub name: String,
    pub state: ProcessState,
    pub priority: ProcessPriority,
    pub tty_name: Option<String>,
    pub tty_pgid: u32,
    pub times_scheduled: u64,
    pub ticks: u64,
    pub syscall_count: u64,
    pub icon_id: i32,
    pub amount_shared: usize,
    pub regions: Vec<Region>,
    /// fd 槽位数组；None 表示该 fd 未打开
    pub fds: Vec<Option<FdInfo>>,
    /// 可执行文件的绝对路径；内核线程没有
    pub exe_path: Option<String>,
    pub cwd: String,
    pub threads: Vec<ThreadInfo>,
    pub backtrace: Vec<StackFrame>,
}

impl Process {
    pub fn new(pid: u32, name: &str) -> Self {
        Process {
            pid,
            ppid: 0,
            pgid: pid,
            sid: pid,
            uid: 0,
            gid: 0,
            name: name.to_string(),
            state: ProcessState::Runnable,
            priority: ProcessPriority::Normal,
            tty_name: None,
            tty_pgid: 0,
            times_scheduled: 0,
            ticks: 0,
            syscall_count: 0,
            icon_id: 0,
            amount_shared: 0,
            regions: Vec::new(),
            fds: Vec::new(),
            exe_path: None,
            cwd: String::from("/"),
            threads: Vec::new(),
            backtrace: Vec::new(),
        }
    }

    /// 虚拟内存总量：所有区域大小之和
    pub fn amount_virtual(&self) -> usize {
        self.regions.iter().map(|r| r.size).sum()
    }

    /// 常驻内存总量
    pub fn amount_resident(&self) -> usize {
        self.regions.iter().map(|r| r.amount_resident).sum()
    }

    pub fn number_of_open_fds(&self) -> usize {
        self.fds.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn fd(&self, fd: usize) -> Option<&FdInfo> {
        self.fds.get(fd).and_then(|slot| slot.as_ref())
    }

    /// 在指定的 fd 槽位安装描述符信息，必要时扩展数组
    pub fn install_fd(&mut self, fd: usize, info: FdInfo) {
        debug_assert!(fd < crate::config::DEFAULT_MAX_FDS);
        while self.fds.len() <= fd {
            self.fds.push(None);
        }
        self.fds[fd] = Some(info);
    }

    pub fn close_fd(&mut self, fd: usize) {
        if let Some(slot) = self.fds.get_mut(fd) {
            *slot = None;
        }
    }
}

/// 进程表
pub struct ProcessTable {
    processes: BTreeMap<u32, SharedProcess>,
}

impl ProcessTable {
    pub fn new() -> Self {
        ProcessTable {
            processes: BTreeMap::new(),
        }
    }

    pub fn add_process(&mut self, process: SharedProcess) {
        let pid = process.lock().pid;
        self.processes.insert(pid, process);
    }

    pub fn remove_process(&mut self, pid: u32) {
        self.processes.remove(&pid);
    }

    pub fn get(&self, pid: u32) -> Option<SharedProcess> {
        self.processes.get(&pid).cloned()
    }

    /// 所有存活进程的 pid 快照（升序）
    pub fn pids(&self) -> Vec<u32> {
        self.processes.keys().copied().collect()
    }

    /// 所有存活进程的快照
    pub fn all(&self) -> Vec<SharedProcess> {
        self.processes.values().cloned().collect()
    }
}

lazy_static! {
    pub static ref PROCESS_TABLE: SpinLock<ProcessTable> = SpinLock::new(ProcessTable::new());
}

static CURRENT_PID: AtomicU32 = AtomicU32::new(0);

/// 当前正在运行的进程（由调度器在切换时更新）
pub fn current_pid() -> u32 {
    CURRENT_PID.load(Ordering::Relaxed)
}

pub fn set_current_pid(pid: u32) {
    CURRENT_PID.store(pid, Ordering::Relaxed);
}

/// 根据 pid 查找进程；持表锁的时间仅覆盖查找本身
pub fn process_from_pid(pid: u32) -> Option<SharedProcess> {
    PROCESS_TABLE.lock().get(pid)
}
