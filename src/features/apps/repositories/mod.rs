pub mod app_repository;

pub use app_repository::{AppRepository, PgAppRepository};
