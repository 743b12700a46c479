mod check;
mod get;
mod list;
mod status;

pub use check::handle_check;
pub use get::handle_get;
pub use list::handle_list;
pub use status::handle_status;
