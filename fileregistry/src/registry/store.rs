use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::common::constants::{
    CURRENT_REGISTRY_VERSION, REGISTRY_FILENAME, REGISTRY_TMP_FILENAME,
};
use crate::common::entry::FileEntry;
use crate::registry::RegistryError;
use crate::storage::StorageBackend;

/// 某个时间点上完整的 "注册表键 -> 条目" 集合。
///
/// 这是一个纯值类型：所有变更方法都返回一个新的快照，
/// 不修改自身。外观层先构造出后继状态并持久化成功之后，
/// 才会把它安装为当前状态，因此失败的持久化不会留下
/// 任何可见的内存变更。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistryState {
    files: BTreeMap<String, FileEntry>,
}

impl RegistryState {
    /// 查找某个键的条目。
    pub fn get(&self, key: &str) -> Option<&FileEntry> {
        self.files.get(key)
    }

    /// 当前被跟踪的条目数量。
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// 以排序后的 (键, 条目) 形式返回全部内容的副本。
    pub fn entries(&self) -> BTreeMap<String, FileEntry> {
        self.files.clone()
    }

    /// 返回插入/覆盖了 `key` 之后的新快照。
    pub fn with_entry(&self, key: String, entry: FileEntry) -> RegistryState {
        let mut files = self.files.clone();
        files.insert(key, entry);
        RegistryState { files }
    }

    /// 返回移除了 `key` 之后的新快照。
    pub fn without_entry(&self, key: &str) -> RegistryState {
        let mut files = self.files.clone();
        files.remove(key);
        RegistryState { files }
    }

    /// 返回把 `src` 的条目复制到 `dst` 之后的新快照（硬链接语义）。
    /// `dst` 得到的是独立副本；`src` 不存在时快照不变。
    pub fn with_copied(&self, src: &str, dst: String) -> RegistryState {
        let mut files = self.files.clone();
        if let Some(entry) = files.get(src).cloned() {
            files.insert(dst, entry);
        }
        RegistryState { files }
    }

    /// 返回把 `src` 的条目移动到 `dst` 之后的新快照（重命名语义）。
    /// `dst` 原有的条目会被覆盖，而不是合并；`src` 不存在时快照不变。
    pub fn with_moved(&self, src: &str, dst: String) -> RegistryState {
        let mut files = self.files.clone();
        if let Some(entry) = files.remove(src) {
            files.insert(dst, entry);
        }
        RegistryState { files }
    }
}

/// 注册表快照文件的持久化形式（版本化、自描述）。
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RegistrySnapshot {
    /// 快照格式版本号，当前固定为 1
    version: u32,
    /// 全部被跟踪的条目
    files: BTreeMap<String, FileEntry>,
}

/// 持有当前 RegistryState 并管理其持久化的存储层。
///
/// 并发控制在外观层：`RegistryStore` 自身假设调用者已经
/// 串行化了所有访问。
#[derive(Debug)]
pub struct RegistryStore {
    env: Arc<dyn StorageBackend>,
    /// 注册表快照文件的完整路径 (root/FILE_REGISTRY)。
    registry_path: PathBuf,
    /// 持久化期间使用的临时文件路径，仅对单次 persist 调用私有。
    tmp_path: PathBuf,
    state: RegistryState,
}

impl RegistryStore {
    /// 创建一个空的存储层。不执行任何 IO。
    pub fn new(env: Arc<dyn StorageBackend>, db_dir: &str) -> Self {
        let root = Path::new(db_dir);
        Self {
            env,
            registry_path: root.join(REGISTRY_FILENAME),
            tmp_path: root.join(REGISTRY_TMP_FILENAME),
            state: RegistryState::default(),
        }
    }

    /// 当前内存状态。
    pub fn state(&self) -> &RegistryState {
        &self.state
    }

    /// 注册表快照文件的路径。
    pub fn registry_path(&self) -> &Path {
        &self.registry_path
    }

    /// 断言该目录从未有过注册表。
    ///
    /// 与 `load` 不同（load 对文件是否存在都宽容），这个检查
    /// 只在快照文件不存在时成功，供初始化全新目录的调用方使用。
    pub fn check_no_registry_file(&self) -> Result<(), RegistryError> {
        if self.env.exists(&self.registry_path)? {
            return Err(RegistryError::AlreadyInitialized(
                self.registry_path.clone(),
            ));
        }
        Ok(())
    }

    /// 从环境加载持久化的状态，替换当前内存状态。
    ///
    /// 快照文件不存在是全新目录的预期情况：初始化为空状态并成功。
    pub fn load(&mut self) -> Result<(), RegistryError> {
        if !self.env.exists(&self.registry_path)? {
            self.state = RegistryState::default();
            return Ok(());
        }

        let contents = self.env.read(&self.registry_path)?;

        // --- 版本检查 ---
        // 先只解析出 version 字段，再做完整反序列化，
        // 这样版本不匹配能与字节级损坏区分开。
        let value: Value = serde_json::from_slice(&contents)?;
        let version = value["version"].as_u64().unwrap_or(0) as u32;
        if version != CURRENT_REGISTRY_VERSION {
            return Err(RegistryError::UnsupportedVersion {
                supported: CURRENT_REGISTRY_VERSION,
                found: version,
            });
        }

        let snapshot: RegistrySnapshot = serde_json::from_slice(&contents)?;
        self.state = RegistryState {
            files: snapshot.files,
        };
        Ok(())
    }

    /// 把给定的快照持久化到环境。
    ///
    /// 协议：完整序列化 -> 持久写入临时文件 -> 原子替换快照文件。
    /// 任意时刻崩溃，留在磁盘上的要么是完整的旧快照、要么是完整的
    /// 新快照，绝不会是两者的混合。此方法不修改内存状态；
    /// 调用方在持久化成功之后再调用 [`install`](Self::install)。
    pub fn persist(&self, state: &RegistryState) -> Result<(), RegistryError> {
        let snapshot = RegistrySnapshot {
            version: CURRENT_REGISTRY_VERSION,
            files: state.entries(),
        };
        let contents = serde_json::to_vec(&snapshot)?;

        // 1. 完整写入临时文件并落盘
        self.env.write_durable(&self.tmp_path, &contents)?;

        // 2. 原子替换正式快照文件
        self.env.rename(&self.tmp_path, &self.registry_path)?;
        Ok(())
    }

    /// 把一个已经持久化成功的快照安装为当前内存状态。
    pub fn install(&mut self, state: RegistryState) {
        self.state = state;
    }
}
