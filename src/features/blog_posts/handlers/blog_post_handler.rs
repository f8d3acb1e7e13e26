use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::blog_posts::dtos::{
    BlogPostInputDto, BlogPostResponseDto, ListBlogPostsQuery,
};
use crate::features::blog_posts::services::BlogPostService;
use crate::shared::types::ApiResponse;

/// List blog posts
///
/// Newest first, nine per page unless `pageSize` (or `limit`) says otherwise.
#[utoipa::path(
    get,
    path = "/api/blog-posts",
    params(ListBlogPostsQuery),
    responses(
        (status = 200, description = "Page of blog posts", body = ApiResponse<Vec<BlogPostResponseDto>>),
    ),
    tag = "blog"
)]
pub async fn list_blog_posts(
    State(service): State<Arc<BlogPostService>>,
    Query(query): Query<ListBlogPostsQuery>,
) -> Result<Json<ApiResponse<Vec<BlogPostResponseDto>>>> {
    let (posts, meta) = service.list(&query).await?;
    Ok(Json(ApiResponse::success(Some(posts), None, Some(meta))))
}

/// Get blog post by id or slug
#[utoipa::path(
    get,
    path = "/api/blog-posts/{identifier}",
    params(
        ("identifier" = String, Path, description = "Blog post id or slug")
    ),
    responses(
        (status = 200, description = "Blog post found", body = ApiResponse<BlogPostResponseDto>),
        (status = 404, description = "Blog post not found")
    ),
    tag = "blog"
)]
pub async fn get_blog_post(
    State(service): State<Arc<BlogPostService>>,
    Path(identifier): Path<String>,
) -> Result<Json<ApiResponse<BlogPostResponseDto>>> {
    let post = service.get(&identifier).await?;
    Ok(Json(ApiResponse::success(Some(post), None, None)))
}

/// Create a blog post
#[utoipa::path(
    post,
    path = "/api/admin/blog-posts",
    request_body = BlogPostInputDto,
    responses(
        (status = 201, description = "Blog post created", body = ApiResponse<BlogPostResponseDto>),
        (status = 400, description = "Missing or invalid fields, or unknown category/app"),
        (status = 401, description = "Missing or invalid admin credentials"),
        (status = 409, description = "Slug already taken")
    ),
    security(("basic_auth" = [])),
    tag = "admin"
)]
pub async fn create_blog_post(
    State(service): State<Arc<BlogPostService>>,
    AppJson(dto): AppJson<BlogPostInputDto>,
) -> Result<(StatusCode, Json<ApiResponse<BlogPostResponseDto>>)> {
    let post = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(post), None, None)),
    ))
}

/// Replace a blog post
#[utoipa::path(
    put,
    path = "/api/admin/blog-posts/{identifier}",
    params(
        ("identifier" = String, Path, description = "Blog post id or slug")
    ),
    request_body = BlogPostInputDto,
    responses(
        (status = 200, description = "Blog post updated", body = ApiResponse<BlogPostResponseDto>),
        (status = 400, description = "Missing or invalid fields, or unknown category/app"),
        (status = 401, description = "Missing or invalid admin credentials"),
        (status = 404, description = "Blog post not found"),
        (status = 409, description = "Slug already taken")
    ),
    security(("basic_auth" = [])),
    tag = "admin"
)]
pub async fn update_blog_post(
    State(service): State<Arc<BlogPostService>>,
    Path(identifier): Path<String>,
    AppJson(dto): AppJson<BlogPostInputDto>,
) -> Result<Json<ApiResponse<BlogPostResponseDto>>> {
    let post = service.update(&identifier, dto).await?;
    Ok(Json(ApiResponse::success(Some(post), None, None)))
}

/// Delete a blog post
#[utoipa::path(
    delete,
    path = "/api/admin/blog-posts/{identifier}",
    params(
        ("identifier" = String, Path, description = "Blog post id or slug")
    ),
    responses(
        (status = 200, description = "Blog post deleted", body = ApiResponse<BlogPostResponseDto>),
        (status = 401, description = "Missing or invalid admin credentials"),
        (status = 404, description = "Blog post not found")
    ),
    security(("basic_auth" = [])),
    tag = "admin"
)]
pub async fn delete_blog_post(
    State(service): State<Arc<BlogPostService>>,
    Path(identifier): Path<String>,
) -> Result<Json<ApiResponse<BlogPostResponseDto>>> {
    let post = service.delete(&identifier).await?;
    Ok(Json(ApiResponse::success(
        Some(post),
        Some("Blog post deleted".to_string()),
        None,
    )))
}
