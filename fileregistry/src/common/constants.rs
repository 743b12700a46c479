/// The current version of the registry snapshot file format.
pub const CURRENT_REGISTRY_VERSION: u32 = 1;

// --- 注册表文件常量 ---

/// 注册表快照文件在根目录下的固定文件名。
pub const REGISTRY_FILENAME: &str = "FILE_REGISTRY";

/// 持久化期间使用的临时文件名。
/// 必须与 `REGISTRY_FILENAME` 位于同一目录，rename 才是原子操作。
pub const REGISTRY_TMP_FILENAME: &str = "FILE_REGISTRY.tmp";
