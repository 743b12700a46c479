#![allow(dead_code)]

use std::sync::Arc;
use tempfile::TempDir;
use fileregistry::common::entry::{EnvType, FileEntry};
use fileregistry::registry::FileRegistry;
use fileregistry::storage::local::LocalStorage;

/// 辅助函数：在临时目录上创建并加载一个可写的注册表。
///
/// 返回 `(根目录字符串, FileRegistry)` 元组，让测试既能直接
/// 检查磁盘上的快照文件，又能获得注册表实例。
pub fn setup_registry(dir: &TempDir) -> (String, FileRegistry) {
    let db_dir = dir.path().to_string_lossy().to_string();
    let registry = FileRegistry::new(Arc::new(LocalStorage::new()), db_dir.clone(), false);
    registry.load().unwrap();
    (db_dir, registry)
}

/// 辅助函数：在同一目录上再打开一个实例（可指定只读）。
pub fn reopen_registry(db_dir: &str, read_only: bool) -> FileRegistry {
    let registry = FileRegistry::new(Arc::new(LocalStorage::new()), db_dir, read_only);
    registry.load().unwrap();
    registry
}

/// 辅助函数：构造一个带有可辨识载荷的数据级条目。
pub fn sample_entry(marker: u8) -> FileEntry {
    FileEntry::new(EnvType::Data, vec![marker, 0x10, 0x20])
}
