pub mod constants;
pub mod entry;
