use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;
use super::StorageBackend;

/// 基于本地文件系统的存储环境实现
#[derive(Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl StorageBackend for LocalStorage {
    fn exists(&self, path: &Path) -> io::Result<bool> {
        Ok(path.exists())
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    fn write_durable(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        let mut file = File::create(path)?;
        file.write_all(contents)?;
        // 内容落盘之后 rename 才有意义，否则崩溃后可能读到空文件
        file.sync_all()?;
        Ok(())
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        // 同一目录下的 rename 在 POSIX 上是原子替换
        fs::rename(from, to)
    }

    fn delete(&self, path: &Path) -> io::Result<()> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            // 文件不存在，视作删除成功（幂等性）
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}
