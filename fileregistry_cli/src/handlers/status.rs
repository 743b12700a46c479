use std::path::Path;
use fileregistry::common::constants::CURRENT_REGISTRY_VERSION;
use fileregistry::registry::FileRegistry;
use crate::errors::CliError;

pub fn handle_status(dir: &Path) -> Result<(), CliError> {
    let registry = FileRegistry::open_local(dir.to_string_lossy(), true)?;

    // check_no_registry_file 失败恰好说明快照文件存在
    let file_present = registry.check_no_registry_file().is_err();

    println!("--- Registry Status ---");
    println!("  Root:           {:?}", dir);
    println!(
        "  Registry File:  {}",
        if file_present { "present" } else { "absent" }
    );
    println!("  Format Version: {}", CURRENT_REGISTRY_VERSION);
    println!("  Tracked Files:  {}", registry.len());
    println!("-----------------------");

    Ok(())
}
