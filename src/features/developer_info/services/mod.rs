pub mod developer_info_service;

pub use developer_info_service::DeveloperInfoService;
