use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

pub mod path;
mod store;

pub use path::transform_path;
pub use store::{RegistryState, RegistryStore};

use crate::common::entry::FileEntry;
use crate::storage::StorageBackend;
use crate::storage::local::LocalStorage;

/// Defines errors that can occur while operating on the file registry.
//
// // 定义在操作文件注册表时可能发生的错误。
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// A registry file exists where none was expected.
    //
    // // 在不应存在注册表文件的地方发现了一个。
    #[error("registry file {0} exists")]
    AlreadyInitialized(PathBuf),

    /// The persisted registry bytes could not be parsed.
    //
    // // 持久化的注册表字节无法解析。
    #[error("corrupt registry file: {0}")]
    CorruptRegistry(#[from] serde_json::Error),

    /// The persisted registry declares a snapshot version this library does not support.
    //
    // // 持久化的注册表声明了本库不支持的快照版本。
    #[error("unsupported registry version: found {found}, but this library supports version {supported}")]
    UnsupportedVersion { supported: u32, found: u32 },

    /// An underlying read, write or replace failed.
    //
    // // 底层的读取、写入或替换失败。
    #[error("registry I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A mutation was attempted on a read-only registry.
    //
    // // 在只读注册表上尝试了变更操作。
    #[error("file registry is read-only: cannot modify entry for '{0}'")]
    ReadOnlyViolation(String),
}

/// 文件注册表的公共外观。
///
/// 负责路径规范化、只读模式的强制执行，以及并发访问的串行化。
/// 所有操作（读和写）都在同一个互斥临界区内完成整个
/// "读取-变更-持久化" 序列，并发调用者观察到的是一段线性的
/// 状态变迁历史。
#[derive(Debug)]
pub struct FileRegistry {
    env: Arc<dyn StorageBackend>,
    /// 引擎的根目录；所有被跟踪的路径尽可能相对于它表示。
    db_dir: String,
    /// 只读实例拒绝一切变更操作。
    read_only: bool,
    store: Mutex<RegistryStore>,
}

impl FileRegistry {
    /// 创建一个注册表实例。不执行任何 IO；
    /// 调用方随后通过 [`load`](Self::load) 读入持久化状态。
    pub fn new(env: Arc<dyn StorageBackend>, db_dir: impl Into<String>, read_only: bool) -> Self {
        let db_dir = db_dir.into();
        let store = RegistryStore::new(env.clone(), &db_dir);
        Self {
            env,
            db_dir,
            read_only,
            store: Mutex::new(store),
        }
    }

    /// 便捷构造：使用本地文件系统环境创建并立即加载。
    pub fn open_local(db_dir: impl Into<String>, read_only: bool) -> Result<Self, RegistryError> {
        let registry = Self::new(Arc::new(LocalStorage::new()), db_dir, read_only);
        registry.load()?;
        Ok(registry)
    }

    /// 该实例是否为只读。
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// 引擎根目录。
    pub fn db_dir(&self) -> &str {
        &self.db_dir
    }

    /// 底层存储环境句柄。
    pub fn env(&self) -> &Arc<dyn StorageBackend> {
        &self.env
    }

    /// 将绝对路径规范化为该注册表使用的键。
    pub fn transform_path(&self, path: &str) -> String {
        transform_path(&self.db_dir, path)
    }

    /// 断言根目录从未有过注册表文件。
    /// 这是一个只读查询，在只读模式下同样允许。
    pub fn check_no_registry_file(&self) -> Result<(), RegistryError> {
        self.store().check_no_registry_file()
    }

    /// 从环境加载持久化状态，替换当前内存状态。
    /// 没有快照文件时初始化为空并成功。两种模式下都允许。
    pub fn load(&self) -> Result<(), RegistryError> {
        self.store().load()
    }

    /// 查询某个路径的条目。未被跟踪的路径返回 `None`，从不失败。
    pub fn get_file_entry(&self, path: &str) -> Option<FileEntry> {
        let key = self.transform_path(path);
        self.store().state().get(&key).cloned()
    }

    /// 全部被跟踪条目的快照副本（按键排序）。
    pub fn entries(&self) -> BTreeMap<String, FileEntry> {
        self.store().state().entries()
    }

    /// 当前被跟踪的条目数量。
    pub fn len(&self) -> usize {
        self.store().state().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store().state().is_empty()
    }

    /// 插入或覆盖 `path` 的条目，并持久化新状态。
    pub fn set_file_entry(&self, path: &str, entry: FileEntry) -> Result<(), RegistryError> {
        self.check_writable(path)?;
        let key = self.transform_path(path);

        let mut store = self.store();
        let new_state = store.state().with_entry(key, entry);
        store.persist(&new_state)?;
        store.install(new_state);
        Ok(())
    }

    /// 镜像文件系统的硬链接：若 `src_path` 被跟踪，把它的条目
    /// 作为独立副本复制到 `dst_path`，然后持久化。
    /// `src_path` 未被跟踪时是成功的空操作（大多数文件不被跟踪，
    /// 对它们做硬链接不需要注册表动作）。
    pub fn maybe_link_entry(&self, src_path: &str, dst_path: &str) -> Result<(), RegistryError> {
        self.check_writable(src_path)?;
        let src_key = self.transform_path(src_path);
        let dst_key = self.transform_path(dst_path);

        let mut store = self.store();
        if store.state().get(&src_key).is_none() {
            return Ok(());
        }
        let new_state = store.state().with_copied(&src_key, dst_key);
        store.persist(&new_state)?;
        store.install(new_state);
        Ok(())
    }

    /// 镜像文件系统的重命名：若 `src_path` 被跟踪，把它的条目
    /// 移动到 `dst_path`（覆盖那里原有的条目），然后持久化。
    /// `src_path` 未被跟踪时是成功的空操作；这个空操作分支
    /// **不会** 清除 `dst_path` 上可能已存在的条目。
    pub fn maybe_rename_entry(&self, src_path: &str, dst_path: &str) -> Result<(), RegistryError> {
        self.check_writable(src_path)?;
        let src_key = self.transform_path(src_path);
        let dst_key = self.transform_path(dst_path);

        let mut store = self.store();
        if store.state().get(&src_key).is_none() {
            return Ok(());
        }
        let new_state = store.state().with_moved(&src_key, dst_key);
        store.persist(&new_state)?;
        store.install(new_state);
        Ok(())
    }

    /// 镜像文件系统的删除：移除 `path` 的条目（若存在），然后
    /// 持久化。未被跟踪时是成功的空操作。
    pub fn maybe_delete_entry(&self, path: &str) -> Result<(), RegistryError> {
        self.check_writable(path)?;
        let key = self.transform_path(path);

        let mut store = self.store();
        if store.state().get(&key).is_none() {
            return Ok(());
        }
        let new_state = store.state().without_entry(&key);
        store.persist(&new_state)?;
        store.install(new_state);
        Ok(())
    }

    /// 只读模式下拒绝变更，不触碰任何状态。
    fn check_writable(&self, path: &str) -> Result<(), RegistryError> {
        if self.read_only {
            return Err(RegistryError::ReadOnlyViolation(path.to_string()));
        }
        Ok(())
    }

    /// 获取串行化锁。
    /// 状态只会被整体替换（persist 成功后 install），一个被
    /// poison 的锁里仍然是完整的快照，恢复它是安全的。
    fn store(&self) -> MutexGuard<'_, RegistryStore> {
        self.store.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
