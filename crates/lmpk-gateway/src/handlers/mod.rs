mod health;
mod manage;
mod redirect;

pub use health::health_handler;
pub use manage::{create_handler, delete_handler, modify_handler};
pub use redirect::{index_handler, redirect_handler};
