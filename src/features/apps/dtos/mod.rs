pub mod app_dto;

pub use app_dto::{AppInputDto, AppResponseDto, AppSummaryDto, ListAppsQuery};
