pub mod local;

use std::fmt::Debug;
use std::io;
use std::path::Path;

/// 存储环境特征
/// 定义了注册表所需的最小 IO 能力集，解耦了注册表逻辑与物理存储。
/// 注册表自身不做任何其他 IO。
pub trait StorageBackend: Send + Sync + Debug {
    /// 检查路径是否存在
    fn exists(&self, path: &Path) -> io::Result<bool>;

    /// 读取文件的完整内容
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// 持久地写入文件的完整内容。
    /// 返回成功时，内容必须已落盘（fsync）。
    fn write_durable(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    /// 原子替换：将 `from` 重命名为 `to`。
    /// `to` 的旧内容必须在替换完成之前保持完整可读。
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;

    /// 删除指定路径的文件。文件不存在时视作删除成功（幂等性）。
    fn delete(&self, path: &Path) -> io::Result<()>;
}
