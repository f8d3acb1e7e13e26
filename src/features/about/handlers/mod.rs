pub mod about_handler;

pub use about_handler::{__path_get_about, __path_update_about, get_about, update_about};
