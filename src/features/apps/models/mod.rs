mod app;

pub use app::{App, AppFilter, AppRecord};
