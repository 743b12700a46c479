//! 存储引擎的文件注册表：一个崩溃安全的、持久化的
//! "文件路径 -> 加密元数据" 映射。
//!
//! 大多数文件不需要特殊处理；注册表只记录少数需要
//! 特殊解释（例如加密）的文件，并保证这份记录在进程
//! 崩溃、文件重命名、硬链接和目录移动之后依然正确。

pub mod common;
pub mod registry;
pub mod storage;
