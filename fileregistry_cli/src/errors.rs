use std::io;
use thiserror::Error;
use fileregistry::registry::RegistryError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("The specified file is not tracked by the registry: {0}")]
    EntryNotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),
}
