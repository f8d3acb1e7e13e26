use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::about::dtos::{AboutInputDto, AboutResponseDto};
use crate::features::about::services::AboutService;
use crate::shared::types::ApiResponse;

/// Get the about page
#[utoipa::path(
    get,
    path = "/api/about",
    responses(
        (status = 200, description = "About page", body = ApiResponse<AboutResponseDto>),
    ),
    tag = "about"
)]
pub async fn get_about(
    State(service): State<Arc<AboutService>>,
) -> Result<Json<ApiResponse<AboutResponseDto>>> {
    let about = service.get().await?;
    Ok(Json(ApiResponse::success(Some(about), None, None)))
}

/// Replace the about page
#[utoipa::path(
    put,
    path = "/api/admin/about",
    request_body = AboutInputDto,
    responses(
        (status = 200, description = "About page updated", body = ApiResponse<AboutResponseDto>),
        (status = 400, description = "Missing or invalid fields"),
        (status = 401, description = "Missing or invalid admin credentials")
    ),
    security(("basic_auth" = [])),
    tag = "admin"
)]
pub async fn update_about(
    State(service): State<Arc<AboutService>>,
    AppJson(dto): AppJson<AboutInputDto>,
) -> Result<Json<ApiResponse<AboutResponseDto>>> {
    let about = service.update(dto).await?;
    Ok(Json(ApiResponse::success(Some(about), None, None)))
}
