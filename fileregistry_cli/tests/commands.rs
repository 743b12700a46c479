//!
//! # CLI Command Integration Tests
//!
//! This file contains integration tests for the `fileregistry_cli`
//! subcommands, driving the binary against registries prepared through
//! the library.
//!
//
// // # CLI 命令集成测试
// //
// // 此文件包含 `fileregistry_cli` 各子命令的集成测试，
// // 测试对象是通过库预先准备好的注册表目录。
// //

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use fileregistry::common::entry::{EnvType, FileEntry};
use fileregistry::registry::FileRegistry;

/// 辅助函数：在临时目录里准备一个包含两个条目的注册表。
fn setup_populated_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    let db_dir = dir.path().to_string_lossy().to_string();

    let registry = FileRegistry::open_local(db_dir.clone(), false).unwrap();
    registry
        .set_file_entry(
            &format!("{}/sst/000001.sst", db_dir),
            FileEntry::new(EnvType::Data, vec![0xAB, 0xCD]),
        )
        .unwrap();
    registry
        .set_file_entry(
            &format!("{}/CURRENT", db_dir),
            FileEntry::new(EnvType::Store, vec![0x11]),
        )
        .unwrap();

    dir
}

fn cli() -> Command {
    Command::cargo_bin("fileregistry_cli").unwrap()
}

/// Tests that `check` succeeds on a fresh directory and fails once a
/// registry file exists.
//
// // 测试 `check` 在全新目录上成功，在已有注册表后失败。
#[test]
fn test_check_command() {
    let fresh = TempDir::new().unwrap();
    cli()
        .arg("check")
        .arg(fresh.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("OK: no registry file"));

    let populated = setup_populated_dir();
    cli()
        .arg("check")
        .arg(populated.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("exists"));
}

/// Tests that `status` reports the registry file and the tracked count.
//
// // 测试 `status` 报告注册表文件与被跟踪条目数量。
#[test]
fn test_status_command() {
    let dir = setup_populated_dir();
    cli()
        .arg("status")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Registry File:  present"))
        .stdout(predicate::str::contains("Tracked Files:  2"));
}

/// Tests that `status` also works on a directory with no registry.
//
// // 测试 `status` 在没有注册表的目录上同样工作。
#[test]
fn test_status_command_on_fresh_directory() {
    let dir = TempDir::new().unwrap();
    cli()
        .arg("status")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Registry File:  absent"))
        .stdout(predicate::str::contains("Tracked Files:  0"));
}

/// Tests that `list` prints the relative keys, and `--detail` includes
/// env type and hex settings.
//
// // 测试 `list` 打印相对键，`--detail` 附带环境类型与十六进制载荷。
#[test]
fn test_list_command() {
    let dir = setup_populated_dir();
    cli()
        .arg("list")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("sst/000001.sst"))
        .stdout(predicate::str::contains("CURRENT"))
        .stdout(predicate::str::contains("Total: 2 tracked file(s)"));

    cli()
        .arg("list")
        .arg(dir.path())
        .arg("--detail")
        .assert()
        .success()
        .stdout(predicate::str::contains("Data"))
        .stdout(predicate::str::contains("abcd"));
}

/// Tests `get` for a tracked path (absolute form) and for an untracked one.
//
// // 测试 `get`：被跟踪路径（绝对形式）与未被跟踪路径。
#[test]
fn test_get_command() {
    let dir = setup_populated_dir();
    let abs_path = format!("{}/sst/000001.sst", dir.path().to_string_lossy());

    cli()
        .arg("get")
        .arg(dir.path())
        .arg(&abs_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("sst/000001.sst"))
        .stdout(predicate::str::contains("abcd"));

    cli()
        .arg("get")
        .arg(dir.path())
        .arg("/no/such/file")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not tracked"));
}
