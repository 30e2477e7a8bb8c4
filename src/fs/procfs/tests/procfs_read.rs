//! ProcFS 读路径测试：生成器内容与每次打开的快照语义

use alloc::{string::ToString, vec, vec::Vec};

use serde_json::Value;

use super::*;
use crate::fs::procfs::ident::{self, FileKind, ParentDirectory};
use crate::kernel::task::{FdInfo, Region, StackFrame, ThreadInfo, VmObjectRef, set_current_pid};
use crate::kernel::{kparams, timer};
use crate::net::{AdapterInfo, NETWORK_ADAPTERS};
use crate::vfs::{FileDescription, MOUNT_TABLE, MountInfo};

// 读取 /self 得到当前 pid 的十进制字节，无换行
#[test]
fn test_read_self() {
    let _guard = register_process(777, "self-test");
    set_current_pid(777);

    let procfs = create_test_procfs();
    let root = procfs.get_inode(procfs.root_inode());
    let id = root.lookup("self").unwrap();
    assert!(ident::to_file_type(id) == FileKind::RootSelf);

    let self_link = procfs.get_inode(id);
    let mut buf = [0u8; 16];
    let nread = self_link.read_bytes(0, &mut buf, None).unwrap();
    assert!(&buf[..nread] == b"777");
}

// 读取 /<pid>/fd/<n> 得到描述符指向的绝对路径
#[test]
fn test_read_fd_entry() {
    let guard = register_process(417, "fd-test");
    guard.process.lock().install_fd(
        5,
        FdInfo {
            absolute_path: "/tmp/x".to_string(),
            seekable: true,
            class: "RegularFile".to_string(),
            offset: 0,
        },
    );

    let procfs = create_test_procfs();
    let fd_entry = procfs.get_inode(ident::to_identifier_with_fd(procfs.fsid(), 417, 5));

    let mut buf = [0u8; 64];
    let nread = fd_entry.read_bytes(0, &mut buf, None).unwrap();
    assert!(&buf[..nread] == b"/tmp/x");
}

#[test]
fn test_read_uptime() {
    timer::set_time_ms(42_500);

    let procfs = create_test_procfs();
    let root = procfs.get_inode(procfs.root_inode());
    let uptime = procfs.get_inode(root.lookup("uptime").unwrap());

    let content = read_to_end(&uptime, None, 16);
    assert!(content == b"42\n");
}

#[test]
fn test_read_cmdline() {
    kparams::set_cmdline("root=/dev/hda1 console=ttyS0");

    let procfs = create_test_procfs();
    let root = procfs.get_inode(procfs.root_inode());
    let cmdline = procfs.get_inode(root.lookup("cmdline").unwrap());

    let content = read_to_end(&cmdline, None, 8);
    assert!(content == b"root=/dev/hda1 console=ttyS0\n");

    // 被拒绝的写入不改变内容
    assert!(cmdline.write_bytes(0, b"x") == Err(crate::vfs::FsError::PermissionDenied));
    assert!(read_to_end(&cmdline, None, 8) == b"root=/dev/hda1 console=ttyS0\n");
}

// 同一打开句柄上的分块读取拼接后等于首次读取时的生成器输出；
// 首次读取之后出现的进程在快照里不可见，读尽刷新后可见
#[test]
fn test_read_snapshot_per_open_handle() {
    let _guard_a = register_process(421, "snapshot-a");

    let procfs = create_test_procfs();
    let root = procfs.get_inode(procfs.root_inode());
    let all = procfs.get_inode(root.lookup("all").unwrap());

    let description = FileDescription::new();

    // 首次读取：生成快照
    let mut first_chunk = vec![0u8; 16];
    let nread = all
        .read_bytes(0, &mut first_chunk, Some(&description))
        .unwrap();
    assert!(nread > 0);

    // 快照生成之后才出现的进程
    let _guard_b = register_process(422, "snapshot-b");

    // 继续读到 EOF
    let mut content = first_chunk[..nread].to_vec();
    loop {
        let mut buf = [0u8; 16];
        let n = all
            .read_bytes(content.len(), &mut buf, Some(&description))
            .unwrap();
        if n == 0 {
            break;
        }
        content.extend_from_slice(&buf[..n]);
    }

    let pids = listed_pids(&content);
    assert!(pids.contains(&421));
    assert!(!pids.contains(&422));

    // EOF 清除了快照，重新读取能看到新进程
    let refreshed = read_to_end(&all, Some(&description), 64);
    let pids = listed_pids(&refreshed);
    assert!(pids.contains(&421));
    assert!(pids.contains(&422));
}

// 无打开描述时每次读取都是新生成的内容
#[test]
fn test_read_without_description_is_fresh() {
    let procfs = create_test_procfs();
    let root = procfs.get_inode(procfs.root_inode());
    let all = procfs.get_inode(root.lookup("all").unwrap());

    // 一次读完，保证内容出自同一次生成
    let mut buf = vec![0u8; 64 * 1024];
    let nread = all.read_bytes(0, &mut buf, None).unwrap();
    let pids = listed_pids(&buf[..nread]);
    // 即使没有注册任何进程，空闲任务的记录也在
    assert!(pids[0] == 0);
    assert!(!pids.contains(&423));

    let _guard = register_process(423, "fresh");
    let nread = all.read_bytes(0, &mut buf, None).unwrap();
    assert!(listed_pids(&buf[..nread]).contains(&423));
}

#[test]
fn test_read_offset_past_end() {
    let procfs = create_test_procfs();
    let root = procfs.get_inode(procfs.root_inode());
    let uptime = procfs.get_inode(root.lookup("uptime").unwrap());

    let mut buf = [0u8; 16];
    assert!(uptime.read_bytes(10_000, &mut buf, None).unwrap() == 0);
}

#[test]
fn test_read_all_process_fields() {
    let guard = register_process(424, "fields");
    {
        let mut process = guard.process.lock();
        process.ppid = 1;
        process.syscall_count = 9;
        process.regions.push(Region {
            name: "stack".to_string(),
            vaddr: 0x1000,
            size: 0x4000,
            readable: true,
            writable: true,
            amount_resident: 0x2000,
            vmo: VmObjectRef {
                anonymous: true,
                ref_count: 1,
                page_count: 4,
            },
        });
    }

    let procfs = create_test_procfs();
    let root = procfs.get_inode(procfs.root_inode());
    let all = procfs.get_inode(root.lookup("all").unwrap());

    // 经由打开描述读取，拿到一份一致的快照
    let description = FileDescription::new();
    let content = read_to_end(&all, Some(&description), 256);
    let parsed: Value = serde_json::from_slice(&content).unwrap();

    // 第一条永远是空闲任务的合成记录
    let idle = &parsed.as_array().unwrap()[0];
    assert!(idle["pid"] == 0);
    assert!(idle["name"] == "idle");
    assert!(idle["priority"] == "Idle");
    assert!(idle["ticks"] == 0);

    let entry = parsed
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["pid"] == 424)
        .unwrap();

    assert!(entry["name"] == "fields");
    assert!(entry["ppid"] == 1);
    assert!(entry["state"] == "Runnable");
    assert!(entry["priority"] == "Normal");
    assert!(entry["tty"] == "notty");
    assert!(entry["syscall_count"] == 9);
    assert!(entry["amount_virtual"] == 0x4000);
    assert!(entry["amount_resident"] == 0x2000);
    assert!(entry["nfds"] == 0);
}

#[test]
fn test_read_pid_vm_and_fds_shapes() {
    let guard = register_process(425, "shapes");
    {
        let mut process = guard.process.lock();
        process.regions.push(Region {
            name: "heap".to_string(),
            vaddr: 0x8000,
            size: 0x2000,
            readable: true,
            writable: false,
            amount_resident: 0x1000,
            vmo: VmObjectRef {
                anonymous: false,
                ref_count: 2,
                page_count: 2,
            },
        });
        process.install_fd(
            3,
            FdInfo {
                absolute_path: "/var/log/system.log".to_string(),
                seekable: true,
                class: "RegularFile".to_string(),
                offset: 128,
            },
        );
    }

    let procfs = create_test_procfs();
    let root = procfs.get_inode(procfs.root_inode());
    let pid_dir = procfs.get_inode(root.lookup("425").unwrap());

    let vm = procfs.get_inode(pid_dir.lookup("vm").unwrap());
    let parsed: Value = serde_json::from_slice(&read_to_end(&vm, None, 128)).unwrap();
    let region = &parsed.as_array().unwrap()[0];
    assert!(region["readable"] == true);
    assert!(region["writable"] == false);
    assert!(region["address"] == 0x8000);
    assert!(region["size"] == 0x2000);
    assert!(region["amount_resident"] == 0x1000);
    assert!(region["name"] == "heap");

    let fds = procfs.get_inode(pid_dir.lookup("fds").unwrap());
    let parsed: Value = serde_json::from_slice(&read_to_end(&fds, None, 128)).unwrap();
    let fd = &parsed.as_array().unwrap()[0];
    assert!(fd["fd"] == 3);
    assert!(fd["absolute_path"] == "/var/log/system.log");
    assert!(fd["seekable"] == true);
    assert!(fd["class"] == "RegularFile");
    assert!(fd["offset"] == 128);
}

#[test]
fn test_read_pid_text_files() {
    let guard = register_process(426, "texty");
    {
        let mut process = guard.process.lock();
        process.cwd = "/home/anon".to_string();
        process.exe_path = Some("/bin/texty".to_string());
        process.backtrace.push(StackFrame {
            address: 0x8020_4a30,
            symbol: "schedule".to_string(),
        });
        process.threads.push(ThreadInfo {
            tid: 426,
            regs: crate::kernel::task::RegisterDump {
                pc: 0x8000_1000,
                ..Default::default()
            },
        });
        process.regions.push(Region {
            name: "text".to_string(),
            vaddr: 0x1_0000,
            size: 0x1000,
            readable: true,
            writable: false,
            amount_resident: 0x1000,
            vmo: VmObjectRef {
                anonymous: false,
                ref_count: 1,
                page_count: 1,
            },
        });
    }

    let procfs = create_test_procfs();
    let root = procfs.get_inode(procfs.root_inode());
    let pid_dir = procfs.get_inode(root.lookup("426").unwrap());

    let cwd = procfs.get_inode(pid_dir.lookup("cwd").unwrap());
    assert!(read_to_end(&cwd, None, 64) == b"/home/anon");

    let exe = procfs.get_inode(pid_dir.lookup("exe").unwrap());
    assert!(read_to_end(&exe, None, 64) == b"/bin/texty");

    let stack = procfs.get_inode(pid_dir.lookup("stack").unwrap());
    let content = read_to_end(&stack, None, 64);
    assert!(core::str::from_utf8(&content).unwrap().contains("schedule"));

    let regs = procfs.get_inode(pid_dir.lookup("regs").unwrap());
    let content = read_to_end(&regs, None, 64);
    let text = core::str::from_utf8(&content).unwrap();
    assert!(text.contains("Thread 426:"));
    assert!(text.contains("pc:      80001000"));

    let vmo = procfs.get_inode(pid_dir.lookup("vmo").unwrap());
    let content = read_to_end(&vmo, None, 64);
    let text = core::str::from_utf8(&content).unwrap();
    assert!(text.starts_with("BEGIN"));
    assert!(text.contains("file-backed"));
}

// 进程退出后读取其文件报告"不存在"
#[test]
fn test_read_dead_process_file() {
    let procfs = create_test_procfs();
    let vm = procfs.get_inode(ident::to_identifier(
        procfs.fsid(),
        ParentDirectory::Pid,
        427,
        FileKind::PidVm,
    ));
    let mut buf = [0u8; 16];
    assert!(
        vm.read_bytes(0, &mut buf, None)
            == Err(crate::vfs::FsError::NotFound)
    );
}

#[test]
fn test_read_net_adapters_fields() {
    NETWORK_ADAPTERS.lock().push(AdapterInfo {
        name: "eth-test0".to_string(),
        class_name: "E1000NetworkAdapter".to_string(),
        mac_address: "52:54:00:12:34:56".to_string(),
        ipv4_address: "10.0.2.15".to_string(),
        packets_in: 7,
        bytes_in: 700,
        packets_out: 3,
        bytes_out: 300,
        link_up: true,
    });

    let procfs = create_test_procfs();
    let root = procfs.get_inode(procfs.root_inode());
    let net = procfs.get_inode(root.lookup("net").unwrap());
    let adapters = procfs.get_inode(net.lookup("adapters").unwrap());

    let parsed: Value = serde_json::from_slice(&read_to_end(&adapters, None, 128)).unwrap();
    let adapter = parsed
        .as_array()
        .unwrap()
        .iter()
        .find(|a| a["name"] == "eth-test0")
        .unwrap();
    assert!(adapter["class_name"] == "E1000NetworkAdapter");
    assert!(adapter["mac_address"] == "52:54:00:12:34:56");
    assert!(adapter["ipv4_address"] == "10.0.2.15");
    assert!(adapter["packets_in"] == 7);
    assert!(adapter["bytes_out"] == 300);
    assert!(adapter["link_up"] == true);
}

#[test]
fn test_read_df_fields() {
    MOUNT_TABLE.register(MountInfo {
        class_name: "Ext2FS".to_string(),
        total_block_count: 2048,
        free_block_count: 1024,
        total_inode_count: 512,
        free_inode_count: 256,
        absolute_path: "/mnt/test-df".to_string(),
        block_size: 1024,
        readonly: false,
        device: Some("/dev/hda".to_string()),
        host: Some(crate::vfs::InodeIdentifier::new(1, 17)),
    });

    let procfs = create_test_procfs();
    let root = procfs.get_inode(procfs.root_inode());
    let df = procfs.get_inode(root.lookup("df").unwrap());

    let parsed: Value = serde_json::from_slice(&read_to_end(&df, None, 128)).unwrap();
    let mount = parsed
        .as_array()
        .unwrap()
        .iter()
        .find(|m| m["mount_point"] == "/mnt/test-df")
        .unwrap();
    assert!(mount["class_name"] == "Ext2FS");
    assert!(mount["total_block_count"] == 2048);
    assert!(mount["free_block_count"] == 1024);
    assert!(mount["total_inode_count"] == 512);
    assert!(mount["free_inode_count"] == 256);
    assert!(mount["block_size"] == 1024);
    assert!(mount["readonly"] == false);
    assert!(mount["device"] == "/dev/hda");

    // /mounts 的文本视图里也能看到
    let mounts = procfs.get_inode(root.lookup("mounts").unwrap());
    let text = read_to_end(&mounts, None, 128);
    assert!(
        core::str::from_utf8(&text)
            .unwrap()
            .contains("Ext2FS @ 1:17 /mnt/test-df")
    );

    MOUNT_TABLE.unregister("/mnt/test-df");
}

#[test]
fn test_read_memstat_fields() {
    let procfs = create_test_procfs();
    let root = procfs.get_inode(procfs.root_inode());
    let memstat = procfs.get_inode(root.lookup("memstat").unwrap());

    let parsed: Value = serde_json::from_slice(&read_to_end(&memstat, None, 128)).unwrap();
    for key in [
        "kmalloc_allocated",
        "kmalloc_available",
        "kmalloc_eternal_allocated",
        "user_physical_allocated",
        "user_physical_available",
        "super_physical_allocated",
        "super_physical_available",
        "kmalloc_call_count",
        "kfree_call_count",
    ] {
        assert!(parsed.get(key).is_some(), "memstat 缺少字段 {}", key);
    }
}

#[test]
fn test_read_dmesg_collects_log_records() {
    crate::klog::init();
    log::warn!("procfs dmesg 测试标记 431");

    let procfs = create_test_procfs();
    let root = procfs.get_inode(procfs.root_inode());
    let dmesg = procfs.get_inode(root.lookup("dmesg").unwrap());

    let content = read_to_end(&dmesg, None, 4096);
    assert!(
        core::str::from_utf8(&content)
            .unwrap()
            .contains("procfs dmesg 测试标记 431")
    );
}

#[test]
fn test_read_inodes_lists_interned() {
    let procfs = create_test_procfs();
    let root = procfs.get_inode(procfs.root_inode());
    let inodes = procfs.get_inode(root.lookup("inodes").unwrap());

    let mut buf = vec![0u8; 64 * 1024];
    let nread = inodes.read_bytes(0, &mut buf, None).unwrap();
    let text = core::str::from_utf8(&buf[..nread]).unwrap();
    // 至少包含本实例的 inodes 文件自身
    let expected = alloc::format!("{:02}:{:08}", procfs.fsid(), inodes.identifier().index);
    assert!(text.contains(&expected));
}

/// 从 /all 的 JSON 输出里取出 pid 列表
fn listed_pids(content: &[u8]) -> Vec<u64> {
    let parsed: Value = serde_json::from_slice(content).unwrap();
    parsed
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["pid"].as_u64().unwrap())
        .collect()
}
