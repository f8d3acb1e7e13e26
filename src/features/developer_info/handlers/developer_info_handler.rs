use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::developer_info::dtos::{DeveloperInfoInputDto, DeveloperInfoResponseDto};
use crate::features::developer_info::services::DeveloperInfoService;
use crate::shared::codec::DecodePolicy;
use crate::shared::types::ApiResponse;

/// Get the public developer profile
#[utoipa::path(
    get,
    path = "/api/public/developer-info",
    responses(
        (status = 200, description = "Developer profile", body = ApiResponse<DeveloperInfoResponseDto>),
        (status = 404, description = "Profile not written yet")
    ),
    tag = "developer"
)]
pub async fn get_public_developer_info(
    State(service): State<Arc<DeveloperInfoService>>,
) -> Result<Json<ApiResponse<DeveloperInfoResponseDto>>> {
    let info = service.get(DecodePolicy::Lenient).await?;
    Ok(Json(ApiResponse::success(Some(info), None, None)))
}

/// Get the developer profile for editing
#[utoipa::path(
    get,
    path = "/api/admin/developer-info",
    responses(
        (status = 200, description = "Developer profile", body = ApiResponse<DeveloperInfoResponseDto>),
        (status = 401, description = "Missing or invalid admin credentials"),
        (status = 404, description = "Profile not written yet"),
        (status = 500, description = "Stored data is corrupt")
    ),
    security(("basic_auth" = [])),
    tag = "admin"
)]
pub async fn get_developer_info(
    State(service): State<Arc<DeveloperInfoService>>,
) -> Result<Json<ApiResponse<DeveloperInfoResponseDto>>> {
    let info = service.get(DecodePolicy::Strict).await?;
    Ok(Json(ApiResponse::success(Some(info), None, None)))
}

/// Replace the developer profile
#[utoipa::path(
    put,
    path = "/api/admin/developer-info",
    request_body = DeveloperInfoInputDto,
    responses(
        (status = 200, description = "Developer profile updated", body = ApiResponse<DeveloperInfoResponseDto>),
        (status = 400, description = "Missing or invalid fields"),
        (status = 401, description = "Missing or invalid admin credentials")
    ),
    security(("basic_auth" = [])),
    tag = "admin"
)]
pub async fn update_developer_info(
    State(service): State<Arc<DeveloperInfoService>>,
    AppJson(dto): AppJson<DeveloperInfoInputDto>,
) -> Result<Json<ApiResponse<DeveloperInfoResponseDto>>> {
    let info = service.update(dto).await?;
    Ok(Json(ApiResponse::success(Some(info), None, None)))
}
