pub mod about_dto;

pub use about_dto::{AboutInputDto, AboutResponseDto};
