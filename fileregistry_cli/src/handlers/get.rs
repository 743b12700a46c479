use std::path::Path;
use fileregistry::registry::FileRegistry;
use crate::errors::CliError;

pub fn handle_get(dir: &Path, file: &str) -> Result<(), CliError> {
    let registry = FileRegistry::open_local(dir.to_string_lossy(), true)?;

    let entry = registry
        .get_file_entry(file)
        .ok_or_else(|| CliError::EntryNotFound(file.to_string()))?;

    println!("  Key:            {}", registry.transform_path(file));
    println!("  Env Type:       {:?}", entry.env_type);
    println!("  Settings (hex): {}", entry.encryption_settings);

    Ok(())
}
