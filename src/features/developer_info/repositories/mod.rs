pub mod developer_info_repository;

pub use developer_info_repository::{DeveloperInfoRepository, PgDeveloperInfoRepository};
