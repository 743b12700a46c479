use std::path::Path;
use std::sync::Arc;
use fileregistry::registry::FileRegistry;
use fileregistry::storage::local::LocalStorage;
use crate::errors::CliError;

pub fn handle_check(dir: &Path) -> Result<(), CliError> {
    // 不加载：只检查快照文件是否存在，损坏的文件也应被报告为"已初始化"
    let registry = FileRegistry::new(
        Arc::new(LocalStorage::new()),
        dir.to_string_lossy(),
        true,
    );
    registry.check_no_registry_file()?;

    println!("OK: no registry file at {:?}", dir);
    Ok(())
}
