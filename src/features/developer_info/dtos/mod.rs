pub mod developer_info_dto;

pub use developer_info_dto::{DeveloperInfoInputDto, DeveloperInfoResponseDto};
