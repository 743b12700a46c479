use std::path::PathBuf;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 显示注册表的状态概要
    Status {
        /// 引擎根目录
        #[arg(value_name = "ROOT_DIR")]
        dir: PathBuf,
    },
    /// 列出全部被跟踪的条目
    #[command(visible_alias = "ls")]
    List {
        /// 引擎根目录
        #[arg(value_name = "ROOT_DIR")]
        dir: PathBuf,

        /// 显示每个条目的详细信息
        #[arg(short = 'd', long = "detail")]
        detail: bool,
    },
    /// 查询单个文件的注册表条目
    Get {
        /// 引擎根目录
        #[arg(value_name = "ROOT_DIR")]
        dir: PathBuf,

        /// 要查询的文件路径（绝对路径会先相对化为注册表键）
        #[arg(required = true)]
        file: String,
    },
    /// 断言目录从未被初始化过（不存在注册表文件）
    Check {
        /// 引擎根目录
        #[arg(value_name = "ROOT_DIR")]
        dir: PathBuf,
    },
}
