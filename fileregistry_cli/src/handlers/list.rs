use std::path::Path;
use fileregistry::registry::FileRegistry;
use crate::errors::CliError;

pub fn handle_list(dir: &Path, detail: bool) -> Result<(), CliError> {
    let registry = FileRegistry::open_local(dir.to_string_lossy(), true)?;
    let entries = registry.entries();

    if entries.is_empty() {
        println!("(no tracked files)");
        return Ok(());
    }

    for (key, entry) in &entries {
        if detail {
            println!(
                "{}\t{:?}\t{}",
                key,
                entry.env_type,
                entry.encryption_settings
            );
        } else {
            println!("{}", key);
        }
    }
    println!("Total: {} tracked file(s)", entries.len());

    Ok(())
}
